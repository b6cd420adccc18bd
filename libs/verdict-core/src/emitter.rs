/// Assertion-Script Emitter - Cases to a Standalone Runnable Artifact
///
/// **Core Responsibility:**
/// Turn a parsed case list into a self-contained POSIX `sh` script that
/// re-checks the target program without this harness.
///
/// **Critical Properties:**
/// - Never executes anything itself
/// - Accepts the same case list the executor consumes
/// - The emitted script takes the target path as `$1`, defaulting to the
///   path baked in at emission time, and exits non-zero on any failure
use crate::types::TestCase;
use std::fs;
use std::io;
use std::path::Path;

/// Write a standalone assertion script for `cases` to `out`.
///
/// Inputs and expected outputs are embedded pre-trimmed: command
/// substitution strips trailing newlines from the captured output, which
/// matches the executor's trim-only comparison for the outer whitespace
/// that matters here.
pub fn write_assert_script(cases: &[TestCase], target: &Path, out: &Path) -> io::Result<()> {
    let mut script = String::new();

    script.push_str("#!/bin/sh\n");
    script.push_str("# Generated assertion suite; re-checks each case against the target.\n");
    script.push_str("# Usage: sh this_script [target]\n");
    script.push_str(&format!(
        "TARGET=\"${{1:-{}}}\"\n",
        sh_quote_inner(&target.display().to_string())
    ));
    script.push_str(
        r#"total=0
failures=0

check() {
    name=$1
    input=$2
    expected=$3
    has_expected=$4
    total=$((total + 1))
    actual=$(printf '%s\n' "$input" | "$TARGET")
    status=$?
    if [ "$status" -ne 0 ]; then
        echo "ERROR  $name (exit code $status)"
        failures=$((failures + 1))
        return
    fi
    if [ "$has_expected" = "yes" ] && [ "$actual" != "$expected" ]; then
        echo "FAILED $name"
        echo "  expected: $expected"
        echo "  actual:   $actual"
        failures=$((failures + 1))
        return
    fi
    echo "OK     $name"
}

"#,
    );

    for case in cases {
        let input = case.input_data.trim();
        let (expected, has_expected) = match &case.expected_output {
            Some(text) => (text.trim(), "yes"),
            None => ("", "no"),
        };
        script.push_str(&format!(
            "check {} {} {} {}\n",
            sh_quote(&case.label),
            sh_quote(input),
            sh_quote(expected),
            has_expected,
        ));
    }

    script.push_str(
        r#"
echo
echo "$((total - failures)) of $total checks passed"
[ "$failures" -eq 0 ] || exit 1
"#,
    );

    fs::write(out, script)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(out)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(out, perms)?;
    }

    Ok(())
}

/// Single-quote `text` for POSIX sh, escaping embedded quotes.
fn sh_quote(text: &str) -> String {
    format!("'{}'", sh_quote_inner(text))
}

fn sh_quote_inner(text: &str) -> String {
    text.replace('\'', r#"'\''"#)
}
