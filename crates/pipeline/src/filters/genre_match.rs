//! First stage: keep titles sharing at least one genre with the seed.

use crate::ranking::contains_any;
use crate::traits::{Filter, Seed};
use data_loader::TitleRecord;

/// Keeps candidates whose genre field mentions any of the seed's genres.
///
/// ## Algorithm
/// Substring match of each seed genre against the raw `genres` field, so a
/// title tagged "Comedy,Romance" matches a seed with genres ["Romance"].
/// A seed with no genres matches nothing.
pub struct GenreMatchFilter;

impl Filter for GenreMatchFilter {
    fn name(&self) -> &str {
        "GenreMatchFilter"
    }

    fn apply<'a>(&self, candidates: Vec<&'a TitleRecord>, seed: &Seed<'_>) -> Vec<&'a TitleRecord> {
        let genres = &seed.metadata.genres;

        let filtered: Vec<&TitleRecord> = candidates
            .into_iter()
            .filter(|record| contains_any(&record.genres, genres))
            .collect();

        if filtered.is_empty() {
            tracing::info!("Genre Filtering: No matching genres found.");
        }
        filtered
    }
}
