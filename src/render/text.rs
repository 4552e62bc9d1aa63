//! Plain text rendering for summaries.

use super::{RenderOptions, RenderedOutput, Summary, SummaryBlock};

/// Width of the rule under the text header.
const RULE_WIDTH: usize = 60;

/// Convert a summary to plain text, one line per block.
pub fn to_text(summary: &Summary, options: &RenderOptions) -> String {
    let mut output = String::new();

    if options.include_header {
        output.push_str(&format!("SUMMARY: {}\n", summary.info.filename));
        output.push_str(&"=".repeat(RULE_WIDTH));
        output.push('\n');
        output.push_str(&summary.header_line());
        output.push_str("\n\n");
    }

    output.push_str(&lines(&summary.output, options.page_refs));
    output
}

pub(crate) fn lines(output: &RenderedOutput, page_refs: bool) -> String {
    output
        .blocks
        .iter()
        .map(|block| block_line(block, page_refs))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn block_line(block: &SummaryBlock, page_refs: bool) -> String {
    let body = match block.label() {
        Some(label) if !block.is_heading() => format!("{}: {}", label, block.plain_text()),
        _ => block.plain_text(),
    };

    if !page_refs || block.pages().is_empty() {
        return body;
    }

    let pages = block
        .pages()
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("{} p.{}", body, pages)
}
