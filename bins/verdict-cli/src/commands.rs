// CLI commands: run a suite, emit an assertion script
use crate::config::RunDefaults;
use crate::report;
use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;
use verdict_core::{parse_cases, run_test_cases, write_assert_script};

/// Parse `file`, optionally emit the assertion script, run every case
/// against the target and render the results.
///
/// Returns whether the whole suite is green (no failed or errored case).
/// Parse and launch failures propagate as errors; per-case failures do not.
pub async fn run_suite(
    file: &Path,
    target: Option<PathBuf>,
    timeout: Option<f64>,
    json: bool,
    emit: Option<PathBuf>,
    config_path: &Path,
) -> Result<bool> {
    let defaults = RunDefaults::load(config_path)?;

    let Some(target) = target.or(defaults.target) else {
        bail!("no target program given; pass --target or set it in {}", config_path.display());
    };
    let timeout = match timeout.or(defaults.timeout_secs) {
        Some(secs) => Some(Duration::try_from_secs_f64(secs).map_err(|_| {
            anyhow!("invalid timeout {secs}; expected a non-negative number of seconds")
        })?),
        None => None,
    };

    let raw = fs::read_to_string(file)
        .with_context(|| format!("Failed to read case file {}", file.display()))?;
    let cases = parse_cases(&raw)?;
    info!(cases = cases.len(), "Parsed case definitions");

    if let Some(out) = emit {
        write_assert_script(&cases, &target, &out)
            .with_context(|| format!("Failed to write assertion script {}", out.display()))?;
        info!(script = %out.display(), "Assertion script written");
    }

    let results = run_test_cases(&cases, &target, timeout).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        report::render(&results);
    }

    Ok(!results.iter().any(|r| r.has_error()))
}

/// Parse `file` and write the standalone assertion script, nothing else.
pub fn emit_script(file: &Path, target: &Path, out: &Path) -> Result<()> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("Failed to read case file {}", file.display()))?;
    let cases = parse_cases(&raw)?;

    write_assert_script(&cases, target, out)
        .with_context(|| format!("Failed to write assertion script {}", out.display()))?;
    info!(cases = cases.len(), script = %out.display(), "Assertion script written");

    Ok(())
}
