//! Sentence relevance scoring.

use crate::model::SummaryFocus;

use super::patterns::{count_proper_nouns, NUMERIC, SIGNIFICANCE};

/// Points for each distinct focus keyword present.
pub const KEYWORD_POINTS: f64 = 15.0;

/// Points for each numeric or currency token.
pub const NUMERIC_POINTS: f64 = 10.0;

/// Points when the sentence reports statistical significance.
pub const SIGNIFICANCE_POINTS: f64 = 12.0;

/// Points for each capitalized word.
pub const PROPER_NOUN_POINTS: f64 = 3.0;

/// Points when the sentence contains `:`, `,` or `;`.
pub const STRUCTURE_POINTS: f64 = 5.0;

/// Multiplier for sentences on the first or last page.
pub const BOUNDARY_PAGE_FACTOR: f64 = 1.1;

/// Sentences must score strictly above this to become candidates.
pub const CANDIDATE_THRESHOLD: f64 = 20.0;

/// Scores sentences for one focus.
#[derive(Debug, Clone, Copy)]
pub struct Scorer {
    keywords: &'static [&'static str],
}

impl Scorer {
    /// Create a scorer for the given focus.
    pub fn new(focus: SummaryFocus) -> Self {
        Self {
            keywords: focus.keywords(),
        }
    }

    /// Score a sentence found on page `page_index` (0-based) of a
    /// document with `total_pages` pages.
    ///
    /// The result is never negative.
    pub fn score(&self, sentence: &str, page_index: usize, total_pages: usize) -> f64 {
        let lower = sentence.to_lowercase();
        let mut score = 0.0;

        let keyword_hits = self.keywords.iter().filter(|k| lower.contains(*k)).count();
        score += keyword_hits as f64 * KEYWORD_POINTS;

        score += NUMERIC.find_iter(sentence).count() as f64 * NUMERIC_POINTS;

        if SIGNIFICANCE.is_match(&lower) {
            score += SIGNIFICANCE_POINTS;
        }

        score += count_proper_nouns(sentence) as f64 * PROPER_NOUN_POINTS;

        if sentence.contains([':', ',', ';']) {
            score += STRUCTURE_POINTS;
        }

        if is_boundary_page(page_index, total_pages) {
            score *= BOUNDARY_PAGE_FACTOR;
        }

        score
    }
}

/// Whether a score qualifies a sentence as a candidate.
pub fn is_candidate_score(score: f64) -> bool {
    score > CANDIDATE_THRESHOLD
}

fn is_boundary_page(page_index: usize, total_pages: usize) -> bool {
    page_index == 0 || page_index + 1 == total_pages
}
