/// Case Parser - Domain Text to Ordered Test Cases
///
/// **Core Responsibility:**
/// Convert freeform, human-authored text into an ordered `TestCase` list.
///
/// **Critical Properties:**
/// - Pure function: raw text in, case list out, no hidden state
/// - Deterministic: the same text always yields the same list
/// - All-or-nothing: the first block without input data fails the whole parse
///
/// **Grammar:**
/// - Blank-line runs split the text into blocks; empty blocks are dropped
/// - `#` / `//` lines are comments; the first one with trailing text names
///   the case, otherwise the label defaults to "Test {index}"
/// - A payload line that exactly equals a separator token (after trimming
///   and uppercasing) splits input from expected output; no separator means
///   the whole payload is input and no comparison is requested
use crate::types::{HarnessError, TestCase};

const COMMENT_PREFIXES: [&str; 2] = ["#", "//"];

/// Whole-line separator tokens, matched against the trimmed, uppercased
/// line. A finite literal match, never a substring search, so numeric input
/// containing separator-like characters cannot split a case by accident.
const SEPARATOR_TOKENS: [&str; 8] = [
    "=>",
    "->",
    "EXPECTED:",
    "OUTPUT:",
    "ОЖИДАЕМО:",
    "ОТВЕТ:",
    "ANS:",
    "---",
];

/// Parse raw text describing a suite of tests.
///
/// Each case is separated by one or more blank lines. Lines starting with
/// `#` or `//` are comments and derive the case label. A line containing
/// only a separator token (for example `=>` or `EXPECTED:`) marks the start
/// of the expected output.
pub fn parse_cases(raw_text: &str) -> Result<Vec<TestCase>, HarnessError> {
    let mut cases = Vec::new();

    for (ordinal, block) in split_blocks(raw_text).into_iter().enumerate() {
        let index = ordinal + 1;
        let label = extract_label(&block).unwrap_or_else(|| format!("Test {index}"));

        let payload: Vec<&str> = block.iter().copied().filter(|l| !is_comment(l)).collect();
        let (input_lines, expected_lines) = split_input_output(&payload);

        let mut input_data = join_section(input_lines);
        if input_data.is_empty() {
            return Err(HarnessError::Parse { block: index });
        }
        if !input_data.ends_with('\n') {
            input_data.push('\n');
        }

        // An expected section that trims down to nothing counts as absent,
        // not as an empty expectation.
        let expected_output = expected_lines.and_then(|lines| {
            let mut joined = join_section(lines);
            if joined.is_empty() {
                None
            } else {
                if !joined.ends_with('\n') {
                    joined.push('\n');
                }
                Some(joined)
            }
        });

        cases.push(TestCase {
            index,
            label,
            input_data,
            expected_output,
        });
    }

    Ok(cases)
}

/// Split the text into blocks on runs of line breaks. Only truly empty
/// lines are boundaries; a whitespace-only line stays inside its block as
/// an internal empty payload line. Blocks without visible content are
/// discarded and never receive an ordinal.
fn split_blocks(raw_text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in raw_text.lines() {
        if line.is_empty() {
            if current.iter().any(|l| !l.trim().is_empty()) {
                blocks.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if current.iter().any(|l| !l.trim().is_empty()) {
        blocks.push(current);
    }

    blocks
}

fn is_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    COMMENT_PREFIXES.iter().any(|p| trimmed.starts_with(p))
}

/// First comment line with non-empty text after its marker, if any.
fn extract_label(lines: &[&str]) -> Option<String> {
    for line in lines {
        let trimmed = line.trim();
        for prefix in COMMENT_PREFIXES {
            if let Some(rest) = trimmed.strip_prefix(prefix) {
                let value = rest.trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}

/// Scan top to bottom for the first separator line; lines before it are the
/// input section, lines strictly after it are the expected-output section.
fn split_input_output<'a>(lines: &'a [&'a str]) -> (&'a [&'a str], Option<&'a [&'a str]>) {
    for (i, line) in lines.iter().enumerate() {
        let normalized = line.trim().to_uppercase();
        if SEPARATOR_TOKENS.contains(&normalized.as_str()) {
            return (&lines[..i], Some(&lines[i + 1..]));
        }
    }
    (lines, None)
}

/// Right-trim each line, join with single newlines, trim the whole.
fn join_section(lines: &[&str]) -> String {
    lines
        .iter()
        .map(|l| l.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_case_with_label_and_expected() {
        let cases = parse_cases("# Test A\n3\n1\n2\n3\n=>\n6\n").unwrap();

        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].index, 1);
        assert_eq!(cases[0].label, "Test A");
        assert_eq!(cases[0].input_data, "3\n1\n2\n3\n");
        assert_eq!(cases[0].expected_output.as_deref(), Some("6\n"));
    }

    #[test]
    fn test_blank_line_run_splits_blocks() {
        let cases = parse_cases("1\n2\n\n\n3\n4\n").unwrap();

        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].input_data, "1\n2\n");
        assert_eq!(cases[1].input_data, "3\n4\n");
        assert!(cases[0].expected_output.is_none());
        assert!(cases[1].expected_output.is_none());
    }

    #[test]
    fn test_whitespace_only_line_stays_inside_its_block() {
        // A line of spaces is not a block boundary; it survives as an
        // internal empty payload line.
        let cases = parse_cases("1\n \n2\n").unwrap();

        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].input_data, "1\n\n2\n");
    }

    #[test]
    fn test_whitespace_only_block_is_discarded() {
        let cases = parse_cases("  \n\n1\n").unwrap();

        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].index, 1);
        assert_eq!(cases[0].input_data, "1\n");
    }

    #[test]
    fn test_comment_only_block_is_a_parse_error() {
        let err = parse_cases("# only a comment\n\n").unwrap_err();

        match err {
            HarnessError::Parse { block } => assert_eq!(block, 1),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_all_or_nothing_reports_failing_block() {
        // Block 1 is fine, block 2 has a separator but no input.
        let err = parse_cases("1\n\n// broken\n=>\n5\n").unwrap_err();

        match err {
            HarnessError::Parse { block } => assert_eq!(block, 2),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_ordinals_are_gapless_and_parse_is_deterministic() {
        let text = "# a\n1\n\n2\n\n# c\n3\n=>\n9\n";
        let first = parse_cases(text).unwrap();
        let second = parse_cases(text).unwrap();

        assert_eq!(first, second);
        for (i, case) in first.iter().enumerate() {
            assert_eq!(case.index, i + 1);
        }
    }

    #[test]
    fn test_default_label_uses_ordinal() {
        let cases = parse_cases("5\n\n6\n").unwrap();

        assert_eq!(cases[0].label, "Test 1");
        assert_eq!(cases[1].label, "Test 2");
    }

    #[test]
    fn test_label_comes_from_first_nonempty_comment() {
        let cases = parse_cases("//\n// Edge case\n# ignored later\n1\n").unwrap();

        assert_eq!(cases[0].label, "Edge case");
    }

    #[test]
    fn test_separator_tokens_are_case_insensitive_whole_lines() {
        let cases = parse_cases("1 2\nexpected:\n3\n").unwrap();
        assert_eq!(cases[0].input_data, "1 2\n");
        assert_eq!(cases[0].expected_output.as_deref(), Some("3\n"));

        // A separator token embedded in a longer line must not split.
        let cases = parse_cases("x => y\n").unwrap();
        assert_eq!(cases[0].input_data, "x => y\n");
        assert!(cases[0].expected_output.is_none());
    }

    #[test]
    fn test_locale_separator_token() {
        let cases = parse_cases("7\nОтвет:\n7\n").unwrap();

        assert_eq!(cases[0].input_data, "7\n");
        assert_eq!(cases[0].expected_output.as_deref(), Some("7\n"));
    }

    #[test]
    fn test_empty_expected_section_is_absent() {
        let cases = parse_cases("1\n=>\n").unwrap();

        assert!(cases[0].expected_output.is_none());
    }

    #[test]
    fn test_lines_are_right_trimmed_and_newline_terminated() {
        let cases = parse_cases("1  \n2\t\n=>\n3   \n").unwrap();

        assert_eq!(cases[0].input_data, "1\n2\n");
        assert_eq!(cases[0].expected_output.as_deref(), Some("3\n"));
    }

    #[test]
    fn test_crlf_input() {
        let cases = parse_cases("# win\r\n1\r\n2\r\n\r\n\r\n3\r\n").unwrap();

        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].label, "win");
        assert_eq!(cases[0].input_data, "1\n2\n");
        assert_eq!(cases[1].input_data, "3\n");
    }

    #[test]
    fn test_empty_text_yields_no_cases() {
        assert!(parse_cases("").unwrap().is_empty());
        assert!(parse_cases("\n\n  \n").unwrap().is_empty());
    }
}
