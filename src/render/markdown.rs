//! Markdown rendering for summaries.

use crate::model::SummaryPoint;

use super::{RenderOptions, Summary, SummaryBlock};

/// Convert a summary to Markdown.
pub fn to_markdown(summary: &Summary, options: &RenderOptions) -> String {
    MarkdownRenderer::new(options.clone()).render(summary)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a summary to Markdown.
    pub fn render(&self, summary: &Summary) -> String {
        let mut output = String::new();

        if self.options.include_header {
            output.push_str(&format!("# Summary: {}\n\n", summary.info.filename));
        }

        let mut previous: Option<&SummaryBlock> = None;
        for block in &summary.output.blocks {
            if let Some(prev) = previous {
                // Consecutive bullets form one list
                if prev.is_point() && block.is_point() {
                    output.push('\n');
                } else {
                    output.push_str("\n\n");
                }
            }
            output.push_str(&self.render_block(block));
            previous = Some(block);
        }

        if !summary.output.is_empty() {
            output.push('\n');
        }
        output
    }

    fn render_block(&self, block: &SummaryBlock) -> String {
        match block {
            SummaryBlock::Point(point) => {
                let mut line = format!("- {}", self.render_spans(point));
                if self.options.page_refs {
                    line.push_str(&format!(" *(p. {})*", point.page));
                }
                line
            }
            SummaryBlock::Section {
                number,
                text,
                pages,
            } => {
                let mut line = format!("**Section {}:** {}", number, text);
                if self.options.page_refs && !pages.is_empty() {
                    let pages = pages
                        .iter()
                        .map(u32::to_string)
                        .collect::<Vec<_>>()
                        .join(", ");
                    line.push_str(&format!(" *(p. {})*", pages));
                }
                line
            }
            SummaryBlock::Heading { title, .. } => format!("### {}", title),
        }
    }

    fn render_spans(&self, point: &SummaryPoint) -> String {
        let mut text = String::new();
        for span in &point.spans {
            if span.emphasis && self.options.emphasis {
                text.push_str("**");
                text.push_str(&span.text);
                text.push_str("**");
            } else {
                text.push_str(&span.text);
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentInfo, SelectionSettings, SummaryStyle, TextSpan};
    use crate::render::RenderedOutput;
    use crate::summarize::SummaryStats;

    fn summary(output: RenderedOutput) -> Summary {
        let info = DocumentInfo {
            filename: "study.pdf".to_string(),
            title: None,
            page_count: 5,
            word_count: 900,
        };
        Summary::new(info, SelectionSettings::new(), output, SummaryStats::default())
    }

    fn rise_point(page: u32) -> SummaryBlock {
        SummaryBlock::Point(SummaryPoint::new(
            vec![
                TextSpan::plain("Output rose "),
                TextSpan::emphasized("42%"),
                TextSpan::plain("."),
            ],
            page,
        ))
    }

    #[test]
    fn test_bullets_with_emphasis() {
        let mut output = RenderedOutput::new(SummaryStyle::Bullets);
        output.push(rise_point(2));
        output.push(rise_point(3));

        let md = to_markdown(&summary(output), &RenderOptions::default());
        assert_eq!(
            md,
            "- Output rose **42%**. *(p. 2)*\n- Output rose **42%**. *(p. 3)*\n"
        );
    }

    #[test]
    fn test_emphasis_disabled() {
        let mut output = RenderedOutput::new(SummaryStyle::Bullets);
        output.push(rise_point(2));

        let options = RenderOptions::new().with_emphasis(false).with_page_refs(false);
        assert_eq!(to_markdown(&summary(output), &options), "- Output rose 42%.\n");
    }

    #[test]
    fn test_sections() {
        let mut output = RenderedOutput::new(SummaryStyle::Paragraphs);
        output.push(SummaryBlock::Section {
            number: 1,
            text: "A. B.".to_string(),
            pages: vec![1, 2],
        });
        output.push(SummaryBlock::Section {
            number: 2,
            text: "C.".to_string(),
            pages: vec![4],
        });

        let md = to_markdown(&summary(output), &RenderOptions::default());
        assert_eq!(
            md,
            "**Section 1:** A. B. *(p. 1, 2)*\n\n**Section 2:** C. *(p. 4)*\n"
        );
    }

    #[test]
    fn test_outline_with_header() {
        let mut output = RenderedOutput::new(SummaryStyle::Outline);
        output.push(SummaryBlock::Heading {
            number: 1,
            title: "Part 1".to_string(),
        });
        output.push(rise_point(1));

        let options = RenderOptions::new().with_header(true);
        let md = to_markdown(&summary(output), &options);
        assert!(md.starts_with("# Summary: study.pdf\n\n### Part 1\n\n- Output rose"));
    }

    #[test]
    fn test_empty_summary() {
        let output = RenderedOutput::new(SummaryStyle::Bullets);
        assert_eq!(to_markdown(&summary(output), &RenderOptions::default()), "");
    }
}
