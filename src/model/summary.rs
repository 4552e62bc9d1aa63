//! Candidate sentences and summary points.

use serde::{Deserialize, Serialize};

/// A scored sentence eligible for selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Sentence text, trimmed, without terminal punctuation
    pub sentence: String,

    /// Relevance score (always above the emission threshold)
    pub score: f64,

    /// Page number (1-indexed) the sentence came from
    pub page: u32,

    /// Zero-based index among retained sentences on that page
    pub position: usize,
}

impl Candidate {
    /// Create a new candidate.
    pub fn new(sentence: impl Into<String>, score: f64, page: u32, position: usize) -> Self {
        Self {
            sentence: sentence.into(),
            score,
            page,
            position,
        }
    }

    /// Document-order key: (page, position).
    pub fn document_order(&self) -> (u32, usize) {
        (self.page, self.position)
    }
}

/// A run of text that is either plain or emphasized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    /// The text content
    pub text: String,

    /// Whether the run is a highlighted numeric/statistical token
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub emphasis: bool,
}

impl TextSpan {
    /// Create a plain span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: false,
        }
    }

    /// Create an emphasized span.
    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: true,
        }
    }
}

/// One selected sentence, prepared for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryPoint {
    /// Sentence text split into plain and emphasized runs
    pub spans: Vec<TextSpan>,

    /// Source page number (1-indexed)
    pub page: u32,
}

impl SummaryPoint {
    /// Create a point from prepared spans.
    pub fn new(spans: Vec<TextSpan>, page: u32) -> Self {
        Self { spans, page }
    }

    /// Text with emphasis stripped.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Emphasized fragments, in order.
    pub fn emphasized(&self) -> impl Iterator<Item = &str> {
        self.spans
            .iter()
            .filter(|s| s.emphasis)
            .map(|s| s.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_document_order() {
        let a = Candidate::new("first", 30.0, 2, 0);
        let b = Candidate::new("second", 90.0, 1, 4);
        assert!(b.document_order() < a.document_order());
    }

    #[test]
    fn test_summary_point_plain_text() {
        let point = SummaryPoint::new(
            vec![
                TextSpan::plain("Revenue rose "),
                TextSpan::emphasized("12%"),
                TextSpan::plain("."),
            ],
            4,
        );
        assert_eq!(point.plain_text(), "Revenue rose 12%.");
        assert_eq!(point.emphasized().collect::<Vec<_>>(), vec!["12%"]);
    }

    #[test]
    fn test_span_serialization_skips_plain_flag() {
        let json = serde_json::to_string(&TextSpan::plain("a")).unwrap();
        assert_eq!(json, r#"{"text":"a"}"#);
        let json = serde_json::to_string(&TextSpan::emphasized("1")).unwrap();
        assert_eq!(json, r#"{"text":"1","emphasis":true}"#);
    }
}
