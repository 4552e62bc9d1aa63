//! Page-diverse, duplicate-free candidate selection.

use std::collections::HashSet;

use crate::model::Candidate;

use super::similarity::TokenSet;

/// Greedy selector with a page-coverage pass.
#[derive(Debug, Clone, Copy)]
pub struct Selector {
    target_points: usize,
}

impl Selector {
    /// Create a selector aiming for `target_points` points.
    pub fn new(target_points: usize) -> Self {
        Self { target_points }
    }

    /// Target number of points.
    pub fn target_points(&self) -> usize {
        self.target_points
    }

    /// Select candidates from a document with `total_pages` pages.
    ///
    /// Candidates must be in generation order (page-major, then position);
    /// that order breaks score ties. The result is sorted by
    /// (page, position) and holds no near-duplicate pair. Coverage may pick
    /// one point per page even past the target; the fill pass never does.
    pub fn select(&self, candidates: &[Candidate], total_pages: usize) -> Vec<Candidate> {
        let mut ranked: Vec<&Candidate> = candidates.iter().collect();
        // Stable: equal scores keep generation order
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        let tokens: Vec<TokenSet> = ranked.iter().map(|c| TokenSet::new(&c.sentence)).collect();
        let mut chosen = vec![false; ranked.len()];
        let mut picked: Vec<usize> = Vec::new();

        // One representative per page first
        let mut covered: HashSet<u32> = HashSet::new();
        for (idx, candidate) in ranked.iter().enumerate() {
            if picked.len() >= total_pages {
                break;
            }
            if covered.contains(&candidate.page) {
                continue;
            }
            if duplicates_any(&tokens, &picked, idx) {
                continue;
            }
            chosen[idx] = true;
            picked.push(idx);
            covered.insert(candidate.page);
        }
        log::debug!(
            "coverage pass picked {} of {} pages",
            picked.len(),
            total_pages
        );

        // Fill the rest by score
        for idx in 0..ranked.len() {
            if picked.len() >= self.target_points {
                break;
            }
            if chosen[idx] || duplicates_any(&tokens, &picked, idx) {
                continue;
            }
            chosen[idx] = true;
            picked.push(idx);
        }

        let mut selected: Vec<Candidate> = picked.into_iter().map(|i| ranked[i].clone()).collect();
        selected.sort_by_key(Candidate::document_order);
        selected
    }
}

fn duplicates_any(tokens: &[TokenSet], picked: &[usize], idx: usize) -> bool {
    picked
        .iter()
        .any(|&p| tokens[idx].is_near_duplicate(&tokens[p]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarize::similarity::is_near_duplicate;

    fn candidate(text: &str, score: f64, page: u32, position: usize) -> Candidate {
        Candidate::new(text, score, page, position)
    }

    /// Sentences sharing no tokens with each other.
    fn distinct(n: usize) -> String {
        ["alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel"]
            .iter()
            .map(|w| format!("{}{}", w, n))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_two_pages_three_candidates_each() {
        let candidates = vec![
            candidate(&distinct(1), 30.0, 1, 0),
            candidate(&distinct(2), 50.0, 1, 1),
            candidate(&distinct(3), 40.0, 1, 2),
            candidate(&distinct(4), 25.0, 2, 0),
            candidate(&distinct(5), 35.0, 2, 1),
            candidate(&distinct(6), 45.0, 2, 2),
        ];
        let selected = Selector::new(7).select(&candidates, 2);

        assert_eq!(selected.len(), 6);
        let order: Vec<_> = selected.iter().map(Candidate::document_order).collect();
        assert_eq!(order, vec![(1, 0), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_coverage_reaches_low_scoring_page() {
        let candidates = vec![
            candidate(&distinct(1), 90.0, 1, 0),
            candidate(&distinct(2), 80.0, 1, 1),
            candidate(&distinct(3), 70.0, 1, 2),
            candidate(&distinct(4), 21.0, 2, 0),
        ];
        let selected = Selector::new(2).select(&candidates, 2);
        let pages: Vec<_> = selected.iter().map(|c| c.page).collect();
        assert_eq!(pages, vec![1, 2]);
        assert_eq!(selected[0].position, 0);
    }

    #[test]
    fn test_near_duplicate_keeps_higher_score() {
        let base = "the new process reduced waiting times for patients in all three clinics";
        let longer = format!("{} last year", base);
        let candidates = vec![
            candidate(base, 40.0, 1, 0),
            candidate(&longer, 60.0, 1, 1),
            candidate(&distinct(9), 30.0, 1, 2),
        ];
        let selected = Selector::new(7).select(&candidates, 1);

        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].sentence, longer);
        assert_eq!(selected[1].sentence, distinct(9));
    }

    #[test]
    fn test_coverage_past_target() {
        let candidates: Vec<_> = (0..30)
            .map(|i| candidate(&distinct(i), 25.0 + i as f64, (i / 3) as u32 + 1, i % 3))
            .collect();
        let selected = Selector::new(7).select(&candidates, 10);
        assert_eq!(selected.len(), 10);
        let pages: Vec<_> = selected.iter().map(|c| c.page).collect();
        assert_eq!(pages, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_fill_stops_at_target() {
        let candidates: Vec<_> = (0..30)
            .map(|i| candidate(&distinct(i), 25.0 + i as f64, (i / 10) as u32 + 1, i % 10))
            .collect();
        let selected = Selector::new(7).select(&candidates, 3);
        assert_eq!(selected.len(), 7);
        let pages: HashSet<_> = selected.iter().map(|c| c.page).collect();
        assert_eq!(pages.len(), 3);
    }

    #[test]
    fn test_ties_break_by_generation_order() {
        let candidates = vec![
            candidate(&distinct(1), 30.0, 1, 0),
            candidate(&distinct(2), 30.0, 1, 1),
            candidate(&distinct(3), 30.0, 1, 2),
        ];
        let selected = Selector::new(2).select(&candidates, 1);
        let positions: Vec<_> = selected.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![0, 1]);
    }

    #[test]
    fn test_fewer_candidates_than_target() {
        let candidates = vec![candidate(&distinct(1), 30.0, 1, 0)];
        assert_eq!(Selector::new(22).select(&candidates, 1).len(), 1);
        assert!(Selector::new(22).select(&[], 0).is_empty());
    }

    #[test]
    fn test_selection_has_no_duplicates() {
        let base = "quarterly revenue grew steadily across all of the regional offices";
        let candidates: Vec<_> = (0..8)
            .map(|i| {
                let text = if i % 2 == 0 {
                    format!("{} {}", base, i)
                } else {
                    distinct(i)
                };
                candidate(&text, 40.0 - i as f64, 1, i)
            })
            .collect();
        let selected = Selector::new(14).select(&candidates, 1);

        for (i, a) in selected.iter().enumerate() {
            for b in &selected[i + 1..] {
                assert!(!is_near_duplicate(&a.sentence, &b.sentence));
            }
        }
        assert_eq!(selected.len(), 5);
    }
}
