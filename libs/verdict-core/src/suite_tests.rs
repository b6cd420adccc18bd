/// End-to-end tests for the parse-then-execute pipeline:
/// 1. Domain text is parsed into ordered cases
/// 2. The cases run against a real target program
/// 3. Verdicts, ordering and timing come out right

#[cfg(unix)]
mod pipeline_tests {
    use crate::cases::parse_cases;
    use crate::executor::run_test_cases;
    use crate::types::TestStatus;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::TempDir;

    fn write_target(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("target.sh");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    const SUM_TARGET: &str = r#"read n
total=0
while [ "$n" -gt 0 ]; do
    read v
    total=$((total + v))
    n=$((n - 1))
done
echo "$total""#;

    #[tokio::test]
    async fn test_suite_with_mixed_verdicts() {
        let dir = TempDir::new().unwrap();
        let target = write_target(&dir, SUM_TARGET);

        let text = "\
# adds small numbers
3
1
2
3
=>
6

# wrong expectation
2
1
1
=>
5

# no verdict requested
1
41
";
        let cases = parse_cases(text).unwrap();
        assert_eq!(cases.len(), 3);

        let results = run_test_cases(&cases, &target, Some(Duration::from_secs(5)))
            .await
            .unwrap();

        assert_eq!(results[0].status, TestStatus::Passed);
        assert_eq!(results[0].case.label, "adds small numbers");
        assert_eq!(results[1].status, TestStatus::Failed);
        assert_eq!(results[2].status, TestStatus::Executed);
        assert_eq!(results[2].stdout.trim(), "41");

        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.case.index, i + 1);
        }
    }

    #[tokio::test]
    async fn test_cases_without_expectations_never_pass_or_fail() {
        let dir = TempDir::new().unwrap();
        let target = write_target(&dir, SUM_TARGET);

        let text = "1\n5\n\n2\n3\n4\n";
        let cases = parse_cases(text).unwrap();
        let results = run_test_cases(&cases, &target, None).await.unwrap();

        for result in &results {
            assert!(matches!(
                result.status,
                TestStatus::Executed | TestStatus::Error
            ));
        }
    }
}
