//! Structured summary output.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{SummaryPoint, SummaryStyle};

/// One labeled block of a rendered summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SummaryBlock {
    /// A single summary point (bullet)
    Point(SummaryPoint),

    /// Up to three points joined into prose
    Section {
        /// Section number (1-indexed)
        number: usize,
        /// Joined point texts, emphasis stripped
        text: String,
        /// Distinct pages in order of first appearance
        pages: Vec<u32>,
    },

    /// An outline heading
    Heading {
        /// Part number (1-indexed)
        number: usize,
        /// Heading text ("Part N")
        title: String,
    },
}

impl SummaryBlock {
    /// Label shown before a section's text.
    pub fn label(&self) -> Option<String> {
        match self {
            SummaryBlock::Section { number, .. } => Some(format!("Section {}", number)),
            SummaryBlock::Heading { title, .. } => Some(title.clone()),
            SummaryBlock::Point(_) => None,
        }
    }

    /// Block text with emphasis stripped.
    pub fn plain_text(&self) -> String {
        match self {
            SummaryBlock::Point(point) => point.plain_text(),
            SummaryBlock::Section { text, .. } => text.clone(),
            SummaryBlock::Heading { title, .. } => title.clone(),
        }
    }

    /// Pages this block refers to.
    pub fn pages(&self) -> &[u32] {
        match self {
            SummaryBlock::Point(point) => std::slice::from_ref(&point.page),
            SummaryBlock::Section { pages, .. } => pages,
            SummaryBlock::Heading { .. } => &[],
        }
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, SummaryBlock::Heading { .. })
    }

    /// Check if this block is a point.
    pub fn is_point(&self) -> bool {
        matches!(self, SummaryBlock::Point(_))
    }
}

/// A rendered summary: style plus ordered blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedOutput {
    /// Layout the blocks were produced for
    pub style: SummaryStyle,

    /// Blocks in display order
    pub blocks: Vec<SummaryBlock>,
}

impl RenderedOutput {
    /// Create an empty output for a style.
    pub fn new(style: SummaryStyle) -> Self {
        Self {
            style,
            blocks: Vec::new(),
        }
    }

    /// Add a block.
    pub fn push(&mut self, block: SummaryBlock) {
        self.blocks.push(block);
    }

    /// Check if the output has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Summary points in order; sections carry no points.
    pub fn points(&self) -> impl Iterator<Item = &SummaryPoint> {
        self.blocks.iter().filter_map(|b| match b {
            SummaryBlock::Point(p) => Some(p),
            _ => None,
        })
    }

    /// One plain-text line per block, with page references.
    pub fn plain_text(&self) -> String {
        super::text::lines(self, true)
    }

    /// Sorted, distinct page numbers referenced anywhere in the output.
    pub fn referenced_pages(&self) -> Vec<u32> {
        let pages: BTreeSet<u32> = self
            .blocks
            .iter()
            .flat_map(|b| b.pages().iter().copied())
            .collect();
        pages.into_iter().collect()
    }
}
