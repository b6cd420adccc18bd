// Text report rendering for executed suites
use verdict_core::{TestResult, TestStatus};

/// Per-status totals for the summary line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub executed: usize,
    pub errors: usize,
}

pub fn summarize(results: &[TestResult]) -> Summary {
    let mut summary = Summary::default();
    for result in results {
        match result.status {
            TestStatus::Passed => summary.passed += 1,
            TestStatus::Failed => summary.failed += 1,
            TestStatus::Executed => summary.executed += 1,
            TestStatus::Error => summary.errors += 1,
        }
    }
    summary
}

/// Render the per-case verdicts and a summary to stdout.
pub fn render(results: &[TestResult]) {
    println!("→ Executed {} test cases", results.len());
    println!();

    for result in results {
        let glyph = match result.status {
            TestStatus::Passed | TestStatus::Executed => "✓",
            TestStatus::Failed | TestStatus::Error => "✗",
        };
        println!(
            "  {} {} [{}] ({:.3}s)",
            glyph, result.case.label, result.status, result.elapsed
        );
        println!("    {}", result.message);

        if result.status == TestStatus::Failed {
            if let Some(expected) = &result.case.expected_output {
                println!("    Expected: {:?}", expected.trim());
                println!("    Got:      {:?}", result.stdout.trim());
            }
        }
        if result.status == TestStatus::Error && !result.stderr.is_empty() {
            println!("    stderr: {}", result.stderr.lines().next().unwrap_or(""));
        }
    }

    let summary = summarize(results);
    println!();
    println!(
        "→ {} passed, {} failed, {} executed, {} errors",
        summary.passed, summary.failed, summary.executed, summary.errors
    );
}
