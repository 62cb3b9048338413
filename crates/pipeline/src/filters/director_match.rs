//! Second stage: narrow to the seed's directors when there are enough of
//! them, then order by rating.

use crate::ranking::{contains_any, sort_by_rating_desc};
use crate::traits::{Filter, Seed};
use data_loader::TitleRecord;

/// Prefers titles by the seed's directors and sorts the working set by
/// rating.
///
/// ## Algorithm
/// 1. If the seed has directors, collect candidates whose `directors` field
///    mentions one of them, excluding the seed title itself.
/// 2. If that subset has strictly more than `threshold` records it becomes
///    the working set. Otherwise it is discarded entirely and the incoming
///    set is kept as is.
/// 3. The working set is sorted by rating, highest first (stable).
pub struct DirectorMatchFilter {
    threshold: usize,
}

impl DirectorMatchFilter {
    /// Create a new DirectorMatchFilter.
    ///
    /// # Arguments
    /// * `threshold` - The director subset must be larger than this (typically 5)
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }
}

impl Filter for DirectorMatchFilter {
    fn name(&self) -> &str {
        "DirectorMatchFilter"
    }

    fn apply<'a>(&self, candidates: Vec<&'a TitleRecord>, seed: &Seed<'_>) -> Vec<&'a TitleRecord> {
        let directors = &seed.metadata.directors;

        let mut working = if directors.is_empty() {
            candidates
        } else {
            let by_directors: Vec<&TitleRecord> = candidates
                .iter()
                .copied()
                .filter(|record| record.id != seed.id && contains_any(&record.directors, directors))
                .collect();

            if by_directors.len() > self.threshold {
                tracing::info!(
                    "Director Filtering: Found {} titles by same directors.",
                    by_directors.len()
                );
                by_directors
            } else {
                tracing::info!(
                    "Director Filtering: Not enough titles by same directors ({}), using genre-filtered titles.",
                    by_directors.len()
                );
                candidates
            }
        };

        sort_by_rating_desc(&mut working);
        working
    }
}
