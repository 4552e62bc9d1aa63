//! Near-duplicate detection between sentences.

use std::collections::HashSet;

use super::patterns::WHITESPACE;

/// Overlap ratio above which two sentences are near-duplicates.
pub const DUPLICATE_THRESHOLD: f64 = 0.7;

/// Lowercased set of whitespace-delimited tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSet(HashSet<String>);

impl TokenSet {
    /// Tokenize a sentence.
    pub fn new(sentence: &str) -> Self {
        let lowered = sentence.to_lowercase();
        Self(
            WHITESPACE
                .split(&lowered)
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shared tokens divided by the size of the larger set.
    pub fn overlap(&self, other: &TokenSet) -> f64 {
        let larger = self.len().max(other.len());
        if larger == 0 {
            return 0.0;
        }
        let shared = self.0.intersection(&other.0).count();
        shared as f64 / larger as f64
    }

    /// Check whether two token sets are near-duplicates.
    pub fn is_near_duplicate(&self, other: &TokenSet) -> bool {
        self.overlap(other) > DUPLICATE_THRESHOLD
    }
}

/// Check whether two sentences are near-duplicates.
pub fn is_near_duplicate(a: &str, b: &str) -> bool {
    TokenSet::new(a).is_near_duplicate(&TokenSet::new(b))
}
