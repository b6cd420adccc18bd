/// Case Executor - Sequential Target Runs and Classification
///
/// **Core Responsibility:**
/// Run the target program once per case and classify each outcome.
///
/// **Critical Properties:**
/// - One fresh process per case, strictly one after another
/// - Case N is fully collected and classified before case N+1 starts
/// - A per-case timeout or non-zero exit never aborts the batch
/// - Only a launch failure (target cannot start at all) stops the batch
///
/// **Classification Rules:**
/// - timeout            -> `Error`, output abandoned, elapsed = the bound
/// - non-zero exit      -> `Error`, captured output retained
/// - zero exit + expected -> trim-only comparison: `Passed` / `Failed`
/// - zero exit, no expected -> `Executed`
use crate::types::{HarnessError, TestCase, TestResult, TestStatus};
use std::io;
use std::path::Path;
use std::process::{Output, Stdio};
use std::time::{Duration, Instant};
use tokio::io::AsyncWriteExt;
use tokio::process::{Child, Command};

/// Normalize captured or expected text for comparison. Outer whitespace
/// only; internal differences stay significant.
fn normalize(text: &str) -> &str {
    text.trim()
}

/// Run every case against `target`, in order, and collect one result per
/// case. `timeout` bounds each individual run; `None` waits indefinitely.
///
/// Returns `Err` only for a launch failure, which invalidates every
/// remaining case identically. Everything else lands in the per-case
/// results.
pub async fn run_test_cases(
    cases: &[TestCase],
    target: &Path,
    timeout: Option<Duration>,
) -> Result<Vec<TestResult>, HarnessError> {
    let mut results = Vec::with_capacity(cases.len());

    for case in cases {
        results.push(run_case(case, target, timeout).await?);
    }

    Ok(results)
}

async fn run_case(
    case: &TestCase,
    target: &Path,
    timeout: Option<Duration>,
) -> Result<TestResult, HarnessError> {
    let start = Instant::now();

    // kill_on_drop reaps the child when a timed-out interaction future is
    // dropped, so an abandoned run cannot outlive its case.
    let child = Command::new(target)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| HarnessError::Launch {
            target: target.to_path_buf(),
            source,
        })?;

    // The whole interaction, input delivery included, runs under the bound:
    // a target that stalls while its stdin pipe is still being filled must
    // time out like any other.
    let interaction = interact(child, case.input_data.as_bytes());
    let waited = match timeout {
        Some(bound) => match tokio::time::timeout(bound, interaction).await {
            Ok(outcome) => outcome,
            Err(_) => {
                return Ok(TestResult {
                    case: case.clone(),
                    status: TestStatus::Error,
                    stdout: String::new(),
                    stderr: String::new(),
                    elapsed: bound.as_secs_f64(),
                    message: format!("Timed out after {:.3}s", bound.as_secs_f64()),
                });
            }
        },
        None => interaction.await,
    };

    let elapsed = start.elapsed().as_secs_f64();

    // The process started but its output could not be collected. Per-case
    // error; the batch continues.
    let output = match waited {
        Ok(output) => output,
        Err(err) => {
            return Ok(TestResult {
                case: case.clone(),
                status: TestStatus::Error,
                stdout: String::new(),
                stderr: String::new(),
                elapsed,
                message: format!("Failed to collect target output: {err}"),
            });
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    let (status, message) = if !output.status.success() {
        let message = match output.status.code() {
            Some(code) => format!("Target exited with code {code}"),
            None => "Target was terminated by a signal".to_string(),
        };
        (TestStatus::Error, message)
    } else if let Some(expected) = &case.expected_output {
        if normalize(&stdout) == normalize(expected) {
            (
                TestStatus::Passed,
                "Output matches the expected text".to_string(),
            )
        } else {
            (
                TestStatus::Failed,
                "Output differs from the expected text".to_string(),
            )
        }
    } else {
        (
            TestStatus::Executed,
            "Target finished successfully".to_string(),
        )
    };

    Ok(TestResult {
        case: case.clone(),
        status,
        stdout,
        stderr,
        elapsed,
        message,
    })
}

/// Feed the case input while the child's stdout and stderr are being
/// collected. Writing and draining must be interleaved: a target that
/// echoes while it reads would otherwise deadlock against full pipe
/// buffers once the input outgrows them.
async fn interact(mut child: Child, input: &[u8]) -> io::Result<Output> {
    let stdin = child.stdin.take();
    let feed = async {
        if let Some(mut stdin) = stdin {
            // Closing stdin signals end-of-input. A target that exits
            // without draining its input produces a broken pipe here; that
            // is its business and shows up in the exit status, not as a
            // harness error.
            let _ = stdin.write_all(input).await;
            let _ = stdin.shutdown().await;
        }
    };

    let (_, output) = tokio::join!(feed, child.wait_with_output());
    output
}
