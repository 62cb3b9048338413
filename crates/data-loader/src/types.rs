//! Core domain types for the title dataset.
//!
//! This module defines the data structures shared by every crate in the
//! workspace:
//! - `TitleRecord`: one row of the dataset, a potential recommendation
//! - `SeedMetadata`: what the metadata service tells us about the seed title
//! - `Dataset`: the read-only, in-memory table of records
//! - `DatasetStats`: aggregate numbers computed once for reporting

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a title (an IMDb `tconst` such as "tt0111161")
pub type TitleId = String;

// =============================================================================
// Record Types
// =============================================================================

/// One row of the title dataset.
///
/// `genres` and `directors` are kept exactly as they appear in the file
/// (comma-delimited); matching is done on the raw field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleRecord {
    pub id: TitleId,
    pub genres: String,
    pub directors: String,
    pub title_type: String,
    /// `None` when the dataset has no rating for this title
    pub average_rating: Option<f32>,
}

impl TitleRecord {
    pub fn new(
        id: impl Into<TitleId>,
        genres: impl Into<String>,
        directors: impl Into<String>,
        title_type: impl Into<String>,
        average_rating: Option<f32>,
    ) -> Self {
        Self {
            id: id.into(),
            genres: genres.into(),
            directors: directors.into(),
            title_type: title_type.into(),
            average_rating,
        }
    }

    /// Individual genre labels, trimmed
    pub fn genre_list(&self) -> impl Iterator<Item = &str> {
        self.genres.split(',').map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Metadata of the seed title, as resolved from the metadata service.
///
/// Created per request and dropped when the request is done.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeedMetadata {
    /// Genre labels in the order the service returned them
    pub genres: Vec<String>,
    /// Director names, possibly empty
    pub directors: Vec<String>,
    pub title_type: String,
}

impl SeedMetadata {
    pub fn new(genres: Vec<String>, directors: Vec<String>, title_type: impl Into<String>) -> Self {
        Self {
            genres,
            directors,
            title_type: title_type.into(),
        }
    }
}

// =============================================================================
// Statistics Types
// =============================================================================

/// Summary numbers for a loaded dataset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetStats {
    pub total: usize,
    pub rated: usize,
    /// Mean of all present ratings, 0.0 when nothing is rated
    pub mean_rating: f32,
    pub by_title_type: HashMap<String, usize>,
    pub genre_counts: HashMap<String, usize>,
}

impl DatasetStats {
    /// Genres sorted by how many records carry them (most frequent first)
    pub fn top_genres(&self, n: usize) -> Vec<(&str, usize)> {
        let mut genres: Vec<(&str, usize)> = self
            .genre_counts
            .iter()
            .map(|(genre, count)| (genre.as_str(), *count))
            .collect();
        genres.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        genres.truncate(n);
        genres
    }
}

// =============================================================================
// Dataset - The In-Memory Table
// =============================================================================

/// Read-only table of title records.
///
/// Records keep the order they had in the source file: ties in rating are
/// broken by that order downstream. The `by_id` index gives O(1) lookups.
#[derive(Debug, Default)]
pub struct Dataset {
    pub(crate) records: Vec<TitleRecord>,
    pub(crate) by_id: HashMap<TitleId, usize>,
}

impl Dataset {
    /// Creates a new, empty Dataset
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Build a dataset from records in the given order.
    ///
    /// A record whose id is already present is skipped.
    pub fn from_records(records: impl IntoIterator<Item = TitleRecord>) -> Self {
        let mut dataset = Self::new();
        for record in records {
            if !dataset.insert_record(record) {
                tracing::warn!("Skipping record with duplicate title id");
            }
        }
        dataset
    }

    /// Append a record. Returns false (and drops the record) if the id is
    /// already taken.
    pub fn insert_record(&mut self, record: TitleRecord) -> bool {
        if self.by_id.contains_key(&record.id) {
            return false;
        }
        self.by_id.insert(record.id.clone(), self.records.len());
        self.records.push(record);
        true
    }

    /// All records, in dataset order
    pub fn records(&self) -> &[TitleRecord] {
        &self.records
    }

    /// Get a record by its title id
    pub fn get(&self, id: &str) -> Option<&TitleRecord> {
        self.by_id.get(id).map(|&pos| &self.records[pos])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
