//! A rendered summary together with its document header and counters.

use serde::{Deserialize, Serialize};

use crate::model::{DocumentInfo, SelectionSettings};
use crate::summarize::SummaryStats;

use super::RenderedOutput;

/// Everything the serializers need to write out one summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Source document header data
    pub info: DocumentInfo,

    /// Settings the summary was generated with
    pub settings: SelectionSettings,

    /// Styled summary blocks
    pub output: RenderedOutput,

    /// Pipeline counters
    pub stats: SummaryStats,
}

impl Summary {
    /// Bundle a rendered output with its document.
    pub fn new(
        info: DocumentInfo,
        settings: SelectionSettings,
        output: RenderedOutput,
        stats: SummaryStats,
    ) -> Self {
        Self {
            info,
            settings,
            output,
            stats,
        }
    }

    /// Check if no points were selected.
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Header line shared by the text and export formats.
    pub fn header_line(&self) -> String {
        format!(
            "Pages: {} | Words: {}",
            self.info.page_count, self.info.word_count
        )
    }
}
