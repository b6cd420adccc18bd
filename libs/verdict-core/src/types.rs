use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// A single test case produced by the parser.
///
/// Cases are created once per parse call and read-only afterwards; the same
/// list can be handed to the executor and the assertion-script emitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// 1-based position in parse order.
    pub index: usize,
    /// Descriptive label, synthesized as "Test {index}" when not supplied.
    pub label: String,
    /// Text delivered verbatim to the target's stdin; non-empty after
    /// trimming and terminated by exactly one trailing newline.
    pub input_data: String,
    /// Expected stdout, terminated by exactly one trailing newline.
    /// `None` means no comparison was requested for this case.
    pub expected_output: Option<String>,
}

/// Verdict for one executed case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    /// Zero exit and the captured output matched the expected text.
    Passed,
    /// Zero exit but the captured output differed from the expected text.
    Failed,
    /// Zero exit with no expected output to compare against.
    Executed,
    /// Timeout or non-zero exit.
    Error,
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TestStatus::Passed => "passed",
            TestStatus::Failed => "failed",
            TestStatus::Executed => "executed",
            TestStatus::Error => "error",
        };
        f.write_str(name)
    }
}

/// Outcome of running one case against the target program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    /// The originating case.
    pub case: TestCase,
    pub status: TestStatus,
    /// Captured stdout (empty for timed-out runs).
    pub stdout: String,
    /// Captured stderr (empty for timed-out runs).
    pub stderr: String,
    /// Wall-clock seconds; equals the configured bound when the run timed out.
    pub elapsed: f64,
    /// Human-readable explanation consistent with `status`.
    pub message: String,
}

impl TestResult {
    /// True when the case did not end well: a mismatch or a harness-level
    /// error. `Executed` counts as fine since no verdict was requested.
    pub fn has_error(&self) -> bool {
        matches!(self.status, TestStatus::Error | TestStatus::Failed)
    }
}

/// Batch-stopping failures. Per-case failures never show up here; they are
/// recorded inside the affected case's own `TestResult`.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A block in the case text yielded no input section. Parsing is
    /// all-or-nothing, so no case list is produced.
    #[error("test {block} has no input data; add at least one input line")]
    Parse { block: usize },

    /// The target program could not be started at all. This invalidates
    /// every remaining case identically, so the whole batch is aborted.
    #[error("failed to launch target program {}", target.display())]
    Launch {
        target: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
