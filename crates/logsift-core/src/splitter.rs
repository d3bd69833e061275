/// Split of raw input into displayable lines
pub(crate) struct SplitLines<'a> {
    /// Non-blank lines, in input order, capped at the line limit
    pub lines: Vec<&'a str>,
    /// Whether the cap cut lines off
    pub truncated: bool,
    /// Non-blank lines beyond the cap
    pub hidden: usize,
}

/// Split raw text into non-blank lines, normalizing `\r\n` endings and
/// applying the line cap.
///
/// Lines that are empty after whitespace trimming are skipped entirely:
/// they are neither counted nor rendered. Kept lines retain their original
/// content.
pub(crate) fn split_lines(raw: &str, max_lines: usize) -> SplitLines<'_> {
    let mut lines = Vec::new();
    let mut hidden = 0;

    for line in raw.split('\n') {
        // Stripping the trailing \r per line is equivalent to replacing
        // \r\n with \n up front, without copying the whole input
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            continue;
        }
        if lines.len() < max_lines {
            lines.push(line);
        } else {
            hidden += 1;
        }
    }

    SplitLines {
        lines,
        truncated: hidden > 0,
        hidden,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_and_skips_blank_lines() {
        let split = split_lines("one\n\ntwo\n   \nthree\n", 100);
        assert_eq!(split.lines, vec!["one", "two", "three"]);
        assert!(!split.truncated);
        assert_eq!(split.hidden, 0);
    }

    #[test]
    fn test_normalizes_crlf() {
        let split = split_lines("one\r\ntwo\r\n", 100);
        assert_eq!(split.lines, vec!["one", "two"]);
    }

    #[test]
    fn test_whitespace_only_lines_are_skipped() {
        let split = split_lines("\t\n  \t  \nkept", 100);
        assert_eq!(split.lines, vec!["kept"]);
    }

    #[test]
    fn test_kept_lines_are_not_trimmed() {
        let split = split_lines("  padded  ", 100);
        assert_eq!(split.lines, vec!["  padded  "]);
    }

    #[test]
    fn test_cap_truncates_and_counts_hidden() {
        let raw = (0..7).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let split = split_lines(&raw, 5);
        assert_eq!(split.lines.len(), 5);
        assert!(split.truncated);
        assert_eq!(split.hidden, 2);
    }

    #[test]
    fn test_blank_lines_do_not_count_toward_cap() {
        let raw = "a\n\nb\n\nc";
        let split = split_lines(raw, 3);
        assert_eq!(split.lines, vec!["a", "b", "c"]);
        assert!(!split.truncated);
    }

    #[test]
    fn test_empty_input() {
        let split = split_lines("", 100);
        assert!(split.lines.is_empty());
        assert!(!split.truncated);
    }
}
