//! Sentence finishing and numeric emphasis.

use std::ops::Range;

use crate::model::TextSpan;
use crate::summarize::{NUMERIC, P_VALUE};

/// Append a period unless the text already ends a sentence.
pub fn ensure_terminal(text: &str) -> String {
    let text = text.trim();
    if text.ends_with(['.', '!', '?']) {
        text.to_string()
    } else {
        format!("{}.", text)
    }
}

/// Split text into spans, emphasizing p-values and numeric tokens.
///
/// A p-value swallows any number inside it, so spans never overlap and
/// concatenating them gives back `text` exactly.
pub fn emphasize(text: &str) -> Vec<TextSpan> {
    let mut ranges: Vec<Range<usize>> = P_VALUE.find_iter(text).map(|m| m.range()).collect();
    for m in NUMERIC.find_iter(text) {
        let range = m.range();
        if !ranges.iter().any(|r| overlaps(r, &range)) {
            ranges.push(range);
        }
    }
    ranges.sort_by_key(|r| r.start);

    let mut spans = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut cursor = 0;
    for range in ranges {
        if range.start > cursor {
            spans.push(TextSpan::plain(&text[cursor..range.start]));
        }
        spans.push(TextSpan::emphasized(&text[range.clone()]));
        cursor = range.end;
    }
    if cursor < text.len() {
        spans.push(TextSpan::plain(&text[cursor..]));
    }
    spans
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejoin(spans: &[TextSpan]) -> String {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    fn marked(spans: &[TextSpan]) -> Vec<&str> {
        spans
            .iter()
            .filter(|s| s.emphasis)
            .map(|s| s.text.as_str())
            .collect()
    }

    #[test]
    fn test_ensure_terminal() {
        assert_eq!(ensure_terminal("Costs fell"), "Costs fell.");
        assert_eq!(ensure_terminal("Costs fell!"), "Costs fell!");
        assert_eq!(ensure_terminal("  Did costs fall?  "), "Did costs fall?");
    }

    #[test]
    fn test_emphasize_numbers() {
        let text = "Output rose 42% to $1,200 per unit in 2023.";
        let spans = emphasize(text);
        assert_eq!(rejoin(&spans), text);
        assert_eq!(marked(&spans), vec!["42%", "$1,200", "2023"]);
    }

    #[test]
    fn test_p_value_absorbs_number() {
        let text = "The effect was robust (P = 0.03) in both arms.";
        let spans = emphasize(text);
        assert_eq!(rejoin(&spans), text);
        assert_eq!(marked(&spans), vec!["P = 0.03"]);
    }

    #[test]
    fn test_leading_and_trailing_emphasis() {
        let spans = emphasize("2024 closed at 17");
        assert_eq!(spans.len(), 3);
        assert!(spans[0].emphasis);
        assert!(!spans[1].emphasis);
        assert!(spans[2].emphasis);
    }

    #[test]
    fn test_no_emphasis() {
        let spans = emphasize("Nothing to see here.");
        assert_eq!(spans, vec![TextSpan::plain("Nothing to see here.")]);
    }

    #[test]
    fn test_empty_text() {
        assert!(emphasize("").is_empty());
    }
}
