/// A run of field text with its highlight flag
pub(crate) type Segment = (String, bool);

/// Split a text field around the first case-insensitive occurrence of the
/// first keyword.
///
/// Only the first keyword is used and only its first occurrence is marked,
/// keeping spans non-overlapping. The marked substring keeps its original
/// casing. No keywords, or no occurrence, yields the text unchanged.
pub(crate) fn highlight_first(text: &str, keywords: &[String]) -> Vec<Segment> {
    let unmarked = || vec![(text.to_string(), false)];

    let Some(keyword) = keywords.first() else {
        return unmarked();
    };

    let lower = text.to_lowercase();
    let Some(start) = lower.find(keyword.as_str()) else {
        return unmarked();
    };
    let end = start + keyword.len();

    // Case folding can change byte lengths (e.g. İ → i̇), shifting offsets
    // between the folded haystack and the original. Leave the field
    // unmarked rather than split mid-character.
    if lower.len() != text.len() || !text.is_char_boundary(start) || !text.is_char_boundary(end) {
        return unmarked();
    }

    let mut segments = Vec::with_capacity(3);
    if start > 0 {
        segments.push((text[..start].to_string(), false));
    }
    segments.push((text[start..end].to_string(), true));
    if end < text.len() {
        segments.push((text[end..].to_string(), false));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_lowercase()).collect()
    }

    #[test]
    fn test_marks_first_occurrence_with_original_casing() {
        let segments = highlight_first("/Admin/panel/admin", &keywords(&["admin"]));
        assert_eq!(
            segments,
            vec![
                ("/".to_string(), false),
                ("Admin".to_string(), true),
                ("/panel/admin".to_string(), false),
            ]
        );
        assert_eq!(segments.iter().filter(|(_, hl)| *hl).count(), 1);
    }

    #[test]
    fn test_only_first_keyword_is_used() {
        let segments = highlight_first("alpha beta", &keywords(&["beta", "alpha"]));
        assert_eq!(
            segments,
            vec![
                ("alpha ".to_string(), false),
                ("beta".to_string(), true),
            ]
        );
    }

    #[test]
    fn test_no_keywords_leaves_text_unchanged() {
        assert_eq!(
            highlight_first("plain text", &[]),
            vec![("plain text".to_string(), false)]
        );
    }

    #[test]
    fn test_no_occurrence_leaves_text_unchanged() {
        assert_eq!(
            highlight_first("plain text", &keywords(&["missing"])),
            vec![("plain text".to_string(), false)]
        );
    }

    #[test]
    fn test_match_at_start_and_end() {
        assert_eq!(
            highlight_first("admin", &keywords(&["admin"])),
            vec![("admin".to_string(), true)]
        );
    }

    #[test]
    fn test_multibyte_text_does_not_panic() {
        let segments = highlight_first("リクエスト error 発生", &keywords(&["error"]));
        assert_eq!(segments.iter().filter(|(_, hl)| *hl).count(), 1);
        let joined: String = segments.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(joined, "リクエスト error 発生");
    }
}
