//! Arranging selected candidates into styled blocks.

use crate::model::{Candidate, SummaryPoint, SummaryStyle};

use super::emphasis::{emphasize, ensure_terminal};
use super::output::{RenderedOutput, SummaryBlock};

/// Points per paragraph section.
pub const PARAGRAPH_GROUP: usize = 3;

/// Preferred points per outline part.
pub const OUTLINE_PART: usize = 4;

/// Turn a selected candidate into a display point.
pub fn prepare_point(candidate: &Candidate) -> SummaryPoint {
    let text = ensure_terminal(&candidate.sentence);
    SummaryPoint::new(emphasize(&text), candidate.page)
}

/// Lay out selected candidates in the requested style.
///
/// Candidates are expected in document order. No candidates means no
/// blocks, whatever the style.
pub fn format_output(selected: &[Candidate], style: SummaryStyle) -> RenderedOutput {
    let points: Vec<SummaryPoint> = selected.iter().map(prepare_point).collect();
    let mut output = RenderedOutput::new(style);
    if points.is_empty() {
        return output;
    }

    match style {
        SummaryStyle::Bullets => {
            output.blocks = points.into_iter().map(SummaryBlock::Point).collect();
        }
        SummaryStyle::Paragraphs => {
            for (i, group) in points.chunks(PARAGRAPH_GROUP).enumerate() {
                output.push(section(i + 1, group));
            }
        }
        SummaryStyle::Outline => {
            let (_, per) = outline_shape(points.len());
            for (i, part) in points.chunks(per).enumerate() {
                let number = i + 1;
                output.push(SummaryBlock::Heading {
                    number,
                    title: format!("Part {}", number),
                });
                output
                    .blocks
                    .extend(part.iter().cloned().map(SummaryBlock::Point));
            }
        }
    }
    output
}

/// Number of outline parts and points per part for `n > 0` points.
pub fn outline_shape(n: usize) -> (usize, usize) {
    let sections = n.div_ceil(OUTLINE_PART);
    (sections, n.div_ceil(sections))
}

fn section(number: usize, group: &[SummaryPoint]) -> SummaryBlock {
    let text = group
        .iter()
        .map(SummaryPoint::plain_text)
        .collect::<Vec<_>>()
        .join(" ");

    let mut pages = Vec::new();
    for point in group {
        if !pages.contains(&point.page) {
            pages.push(point.page);
        }
    }

    SummaryBlock::Section {
        number,
        text,
        pages,
    }
}
