//! Extractive summarization pipeline.
//!
//! Page texts are segmented into sentences, scored against the selected
//! focus, filtered to candidates, then reduced to a page-diverse,
//! duplicate-free selection in document order. Every stage is a pure
//! function of its inputs: the same pages and settings always produce the
//! same summary.
//!
//! # Example
//!
//! ```
//! use pdfdigest::model::{PageText, SelectionSettings, SummaryLength};
//! use pdfdigest::summarize::Summarizer;
//!
//! let pages = vec![PageText::new(
//!     1,
//!     "The key finding was a 42% increase in output across every plant we studied.",
//! )];
//! let settings = SelectionSettings::new().with_length(SummaryLength::Short);
//! let run = Summarizer::new(settings).run(&pages);
//!
//! assert_eq!(run.selected.len(), 1);
//! assert_eq!(run.stats.candidate_count, 1);
//! ```

mod patterns;
pub mod score;
pub mod segment;
pub mod select;
pub mod similarity;

pub use score::Scorer;
pub use segment::{sentences, Sentence, Sentences};
pub use select::Selector;
pub use similarity::{is_near_duplicate, TokenSet};

pub(crate) use patterns::{NUMERIC, P_VALUE};

use serde::{Deserialize, Serialize};

use crate::model::{Candidate, PageText, SelectionSettings};
use crate::render::{self, RenderedOutput};

/// Counters collected during one summary generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Pages fed into the pipeline
    pub page_count: u32,

    /// Sentences that passed the length filter
    pub sentence_count: u32,

    /// Sentences that scored above the candidate threshold
    pub candidate_count: u32,

    /// Candidates kept by the selector
    pub selected_count: u32,

    /// Points requested by the length setting
    pub target_points: u32,
}

/// Result of running the pipeline once.
#[derive(Debug, Clone)]
pub struct SummaryRun {
    /// Selected candidates in document order
    pub selected: Vec<Candidate>,

    /// Rendered output for the requested style
    pub output: RenderedOutput,

    /// Pipeline counters
    pub stats: SummaryStats,
}

/// Runs segmentation, scoring, selection and rendering for one set of
/// settings.
#[derive(Debug, Clone, Copy)]
pub struct Summarizer {
    settings: SelectionSettings,
}

impl Summarizer {
    /// Create a summarizer for the given settings.
    pub fn new(settings: SelectionSettings) -> Self {
        Self { settings }
    }

    /// Settings this summarizer runs with.
    pub fn settings(&self) -> &SelectionSettings {
        &self.settings
    }

    /// Segment and score every page, keeping sentences above the threshold.
    ///
    /// Candidates come out page-major, then by position.
    pub fn candidates(&self, pages: &[PageText]) -> Vec<Candidate> {
        self.collect_candidates(pages, &mut SummaryStats::default())
    }

    /// Run the full pipeline.
    pub fn run(&self, pages: &[PageText]) -> SummaryRun {
        let mut stats = SummaryStats {
            page_count: pages.len() as u32,
            target_points: self.settings.target_points() as u32,
            ..Default::default()
        };

        let candidates = self.collect_candidates(pages, &mut stats);
        let selected = Selector::new(self.settings.target_points()).select(&candidates, pages.len());
        stats.selected_count = selected.len() as u32;

        log::debug!(
            "summarized {} pages: {} sentences, {} candidates, {} selected",
            stats.page_count,
            stats.sentence_count,
            stats.candidate_count,
            stats.selected_count
        );

        let output = render::format_output(&selected, self.settings.style);
        SummaryRun {
            selected,
            output,
            stats,
        }
    }

    fn collect_candidates(&self, pages: &[PageText], stats: &mut SummaryStats) -> Vec<Candidate> {
        let scorer = Scorer::new(self.settings.focus);
        let total_pages = pages.len();
        let mut candidates = Vec::new();

        for (page_index, page) in pages.iter().enumerate() {
            for sentence in sentences(&page.text) {
                stats.sentence_count += 1;
                let score = scorer.score(&sentence.text, page_index, total_pages);
                if score::is_candidate_score(score) {
                    candidates.push(Candidate::new(
                        sentence.text,
                        score,
                        page.page_number,
                        sentence.position,
                    ));
                }
            }
        }

        stats.candidate_count = candidates.len() as u32;
        candidates
    }
}

/// Generate a summary of the given pages.
///
/// Zero pages, or pages without eligible sentences, produce an empty
/// output.
pub fn generate_summary(pages: &[PageText], settings: &SelectionSettings) -> RenderedOutput {
    Summarizer::new(*settings).run(pages).output
}
