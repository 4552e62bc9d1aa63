//! Word-processor style export document.
//!
//! Binary writers (DOCX and similar) consume an [`ExportDocument`]: a title,
//! a subtitle and a flat list of paragraphs, some of which are headings.

use serde::{Deserialize, Serialize};

use super::{text, Summary, SummaryBlock};

/// Heading level used for outline parts.
const PART_HEADING_LEVEL: u8 = 2;

/// A paragraph in an export document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportParagraph {
    /// Paragraph text
    pub text: String,

    /// Heading level (1-6), or `None` for body text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_level: Option<u8>,
}

impl ExportParagraph {
    /// Create a body paragraph.
    pub fn body(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            heading_level: None,
        }
    }

    /// Create a heading paragraph.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Self {
            text: text.into(),
            heading_level: Some(level.clamp(1, 6)),
        }
    }

    /// Check if this paragraph is a heading.
    pub fn is_heading(&self) -> bool {
        self.heading_level.is_some()
    }
}

/// Document handed to binary export writers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Level-1 title ("Summary: {filename}")
    pub title: String,

    /// Line under the title ("Pages: N | Words: W")
    pub subtitle: String,

    /// Summary paragraphs in order
    pub paragraphs: Vec<ExportParagraph>,
}

/// Build an export document from a summary.
pub fn to_export_document(summary: &Summary) -> ExportDocument {
    let paragraphs = summary
        .output
        .blocks
        .iter()
        .map(|block| match block {
            SummaryBlock::Heading { title, .. } => {
                ExportParagraph::heading(title.clone(), PART_HEADING_LEVEL)
            }
            other => ExportParagraph::body(text::block_line(other, true)),
        })
        .collect();

    ExportDocument {
        title: format!("Summary: {}", summary.info.filename),
        subtitle: summary.header_line(),
        paragraphs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentInfo, SelectionSettings, SummaryPoint, SummaryStyle, TextSpan};
    use crate::render::RenderedOutput;
    use crate::summarize::SummaryStats;

    #[test]
    fn test_export_outline() {
        let mut output = RenderedOutput::new(SummaryStyle::Outline);
        output.push(SummaryBlock::Heading {
            number: 1,
            title: "Part 1".to_string(),
        });
        output.push(SummaryBlock::Point(SummaryPoint::new(
            vec![TextSpan::plain("Demand rose "), TextSpan::emphasized("8%"), TextSpan::plain(".")],
            6,
        )));
        let info = DocumentInfo {
            filename: "outlook.pdf".to_string(),
            title: None,
            page_count: 9,
            word_count: 2100,
        };
        let summary = Summary::new(info, SelectionSettings::new(), output, SummaryStats::default());

        let doc = to_export_document(&summary);
        assert_eq!(doc.title, "Summary: outlook.pdf");
        assert_eq!(doc.subtitle, "Pages: 9 | Words: 2100");
        assert_eq!(doc.paragraphs[0], ExportParagraph::heading("Part 1", 2));
        assert_eq!(doc.paragraphs[1], ExportParagraph::body("Demand rose 8%. p.6"));
        assert!(!doc.paragraphs[1].is_heading());
    }

    #[test]
    fn test_heading_level_clamped() {
        assert_eq!(ExportParagraph::heading("x", 9).heading_level, Some(6));
        assert_eq!(ExportParagraph::heading("x", 0).heading_level, Some(1));
    }
}
