use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

/// Cuts `text` to at most `max` grapheme clusters, replacing the tail with
/// `...` when anything was removed.
pub fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max {
        return text.to_string();
    }
    trace!(len = graphemes.len(), max, "Truncating text");
    let keep = max.saturating_sub(3);
    let mut out: String = graphemes[..keep].concat();
    out.push_str("...");
    out
}

/// Splits a comma separated user list, trimming entries and dropping empties.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strips list markers such as `1.`, `2)`, `-` or `*` from a model output
/// line. A numeric marker must be followed by whitespace, so `3.5mm` stays.
/// Returns `None` when nothing is left.
pub fn strip_list_marker(line: &str) -> Option<String> {
    let trimmed = line.trim();
    let without_number = match trimmed.find(|c: char| !c.is_ascii_digit()) {
        Some(idx) if idx > 0 => trimmed[idx..]
            .strip_prefix(['.', ')'])
            .filter(|rest| rest.starts_with(char::is_whitespace))
            .unwrap_or(trimmed),
        _ => trimmed,
    };
    let cleaned = without_number
        .trim_start_matches(['-', '*', '•'])
        .trim()
        .trim_matches('"')
        .trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
    }

    #[test]
    fn truncate_counts_graphemes() {
        let text = "é".repeat(5);
        assert_eq!(truncate_with_ellipsis(&text, 4), "é...");
    }

    #[test]
    fn split_list_drops_empty() {
        assert_eq!(split_list(" a, ,b ,"), vec!["a", "b"]);
    }

    #[test]
    fn strip_markers() {
        assert_eq!(strip_list_marker("1. sunny office").as_deref(), Some("sunny office"));
        assert_eq!(strip_list_marker("12) desk").as_deref(), Some("desk"));
        assert_eq!(strip_list_marker("- \"quoted\"").as_deref(), Some("quoted"));
        assert_eq!(strip_list_marker("8k resolution").as_deref(), Some("8k resolution"));
        assert_eq!(strip_list_marker("  * "), None);
    }

    #[test]
    fn numbers_inside_text_are_not_markers() {
        assert_eq!(
            strip_list_marker("3.5mm lens close-up of a desk").as_deref(),
            Some("3.5mm lens close-up of a desk")
        );
        assert_eq!(strip_list_marker("2)desk").as_deref(), Some("2)desk"));
        assert_eq!(strip_list_marker("4.\tdesk").as_deref(), Some("desk"));
    }

    #[test]
    fn capitalize() {
        assert_eq!(capitalize_first("desk"), "Desk");
        assert_eq!(capitalize_first(""), "");
    }

    proptest! {
        #[test]
        fn prop_truncate_bounded(s in "(?s).*", max in 3usize..300) {
            let out = truncate_with_ellipsis(&s, max);
            prop_assert!(out.graphemes(true).count() <= max);
        }
    }
}
