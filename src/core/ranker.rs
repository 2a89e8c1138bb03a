//! Similarity Ranking
//!
//! Scores a typed query against candidate package names and keeps the best
//! few for the selector.
//!
//! # Scoring
//!
//! Both strings are trimmed and lowercased, then:
//! 1. Exact match scores `1.0`
//! 2. Otherwise normalized Damerau-Levenshtein similarity, so single
//!    transpositions like `pyhton` stay close to `python`
//! 3. A prefix bonus (`google-ch` -> `google-chrome`) or a smaller
//!    substring bonus (`chrome` -> `google-chrome`) is added
//! 4. Non-exact scores are capped below `1.0`
//!
//! Anything under the relevance cutoff is dropped.

use crate::core::types::{Candidate, ScoredCandidate};
use std::cmp::Ordering;

/// Fixed UI bound on the number of ranked entries.
pub const MAX_RESULTS: usize = 10;

/// Default minimum score for a candidate to be considered relevant.
pub const DEFAULT_CUTOFF: f64 = 0.4;

pub const PREFIX_BONUS: f64 = 0.35;
pub const SUBSTRING_BONUS: f64 = 0.30;

/// Highest score a non-exact match can reach.
pub const NON_EXACT_CEILING: f64 = 0.99;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranker {
    cutoff: f64,
    limit: usize,
}

impl Ranker {
    /// `limit` is clamped to `1..=MAX_RESULTS`, `cutoff` to `[0, 1]`.
    pub fn new(cutoff: f64, limit: usize) -> Self {
        let cutoff = if cutoff.is_finite() {
            cutoff.clamp(0.0, 1.0)
        } else {
            DEFAULT_CUTOFF
        };
        Self {
            cutoff,
            limit: limit.clamp(1, MAX_RESULTS),
        }
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Score, filter, sort and truncate `candidates` against `query`.
    ///
    /// Sorted by score descending, ties by name ascending. An empty result
    /// means nothing relevant was found.
    pub fn rank(&self, query: &str, candidates: &[Candidate]) -> Vec<ScoredCandidate> {
        let mut scored: Vec<ScoredCandidate> = candidates
            .iter()
            .filter_map(|candidate| {
                let score = similarity(query, candidate.name());
                (score >= self.cutoff && score > 0.0).then(|| ScoredCandidate {
                    candidate: candidate.clone(),
                    score,
                })
            })
            .collect();

        scored.sort_by(compare_scored);
        scored.truncate(self.limit);
        scored
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(DEFAULT_CUTOFF, MAX_RESULTS)
    }
}

fn compare_scored(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.candidate.name().cmp(b.candidate.name()))
}

/// Similarity between a query and a package name in `[0, 1]`.
pub fn similarity(query: &str, name: &str) -> f64 {
    let query = query.trim().to_lowercase();
    let name = name.trim().to_lowercase();

    if query.is_empty() || name.is_empty() {
        return 0.0;
    }
    if query == name {
        return 1.0;
    }

    let base = strsim::normalized_damerau_levenshtein(&query, &name);
    let bonus = if name.starts_with(&query) {
        PREFIX_BONUS
    } else if name.contains(&query) {
        SUBSTRING_BONUS
    } else {
        0.0
    };

    (base + bonus).min(NON_EXACT_CEILING)
}

#[cfg(test)]
mod tests;
