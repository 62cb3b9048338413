//! Third stage: prefer titles of the same type as the seed.

use crate::traits::{Filter, Seed};
use data_loader::TitleRecord;

/// Keeps candidates whose `title_type` equals the seed's, but only when
/// there are at least `min_matches` of them; otherwise the working set is
/// passed through untouched. Order is preserved either way.
pub struct TitleTypeFilter {
    min_matches: usize,
}

impl TitleTypeFilter {
    pub fn new(min_matches: usize) -> Self {
        Self { min_matches }
    }
}

impl Filter for TitleTypeFilter {
    fn name(&self) -> &str {
        "TitleTypeFilter"
    }

    fn apply<'a>(&self, candidates: Vec<&'a TitleRecord>, seed: &Seed<'_>) -> Vec<&'a TitleRecord> {
        let title_type = seed.metadata.title_type.as_str();

        let same_type: Vec<&TitleRecord> = candidates
            .iter()
            .copied()
            .filter(|record| record.title_type == title_type)
            .collect();

        if same_type.is_empty() || same_type.len() < self.min_matches {
            tracing::debug!(
                "Title Type Filtering: only {} '{}' titles, ignoring type",
                same_type.len(),
                title_type
            );
            candidates
        } else {
            same_type
        }
    }
}
