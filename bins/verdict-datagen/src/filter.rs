// Row filtering: sum the rows of a generated table that qualify
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// A row qualifies when all three hold:
/// 1. its sum is strictly greater than three times its maximum,
/// 2. all four numbers are distinct,
/// 3. at least one number is a single-digit integer (0 through 9).
pub fn row_ok(numbers: &[i64]) -> bool {
    let Some(&max) = numbers.iter().max() else {
        return false;
    };
    let total: i64 = numbers.iter().sum();

    if total <= 3 * max {
        return false;
    }
    for (i, a) in numbers.iter().enumerate() {
        if numbers[i + 1..].contains(a) {
            return false;
        }
    }
    numbers.iter().any(|n| (0..=9).contains(n))
}

/// Read the table from `path` and sum the numbers of every qualifying row.
/// Lines with the wrong column count or non-numeric fields are skipped.
pub fn process_file(path: &Path) -> Result<i64> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read generated file {}", path.display()))?;

    let mut total = 0i64;
    for line in content.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 4 {
            continue;
        }
        let Ok(numbers) = parts
            .iter()
            .map(|p| p.parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
        else {
            continue;
        };
        if row_ok(&numbers) {
            total += numbers.iter().sum::<i64>();
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_row_ok_accepts_valid_rows() {
        assert!(row_ok(&[500, 498, 497, 7]));
    }

    #[test]
    fn test_row_ok_rejects_duplicates() {
        assert!(!row_ok(&[5, 5, 10, 11]));
    }

    #[test]
    fn test_row_ok_rejects_low_sum() {
        assert!(!row_ok(&[1, 2, 3, 4]));
    }

    #[test]
    fn test_row_ok_requires_a_single_digit_entry() {
        assert!(!row_ok(&[100, 101, 102, 103]));
    }

    #[test]
    fn test_row_ok_rejects_empty_rows() {
        assert!(!row_ok(&[]));
    }

    #[test]
    fn test_process_file_filters_invalid_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.txt");
        fs::write(
            &path,
            "500 498 497 7\n\
             1 2 3\n\
             7 a 1 2\n\
             7 7 7 9\n\
             9 12 15 6\n",
        )
        .unwrap();

        // Only the first row qualifies.
        assert_eq!(process_file(&path).unwrap(), 1502);
    }

    #[test]
    fn test_process_file_missing_file() {
        assert!(process_file(Path::new("/nonexistent/data.txt")).is_err());
    }
}
