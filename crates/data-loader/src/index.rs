//! Dataset building and aggregate statistics.
//!
//! - Load the CSV into a `Dataset` (records in file order + id index)
//! - Compute `DatasetStats` in parallel with Rayon

use crate::error::Result;
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

impl Dataset {
    /// Load the title dataset from a CSV file.
    ///
    /// This is the main entry point for loading data. The returned dataset is
    /// meant to be wrapped in an `Arc` and shared read-only for the rest of
    /// the process.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading title dataset from {:?}", path);

        let titles = parser::parse_titles(path)?;

        // The parser already rejected duplicate ids, so every insert succeeds
        let mut dataset = Dataset::new();
        dataset.records.reserve(titles.len());
        for title in titles {
            dataset.insert_record(title);
        }

        info!("Loaded {} titles", dataset.len());
        Ok(dataset)
    }

    /// Compute aggregate statistics over all records.
    ///
    /// Each Rayon worker folds its share of rows into a partial
    /// `DatasetStats`, the partials are then merged.
    pub fn compute_stats(&self) -> DatasetStats {
        let partial = self
            .records
            .par_iter()
            .fold(PartialStats::default, |mut acc, record| {
                acc.add(record);
                acc
            })
            .reduce(PartialStats::default, PartialStats::merge);

        let mean_rating = if partial.rated > 0 {
            (partial.rating_sum / partial.rated as f64) as f32
        } else {
            0.0
        };

        DatasetStats {
            total: self.records.len(),
            rated: partial.rated,
            mean_rating,
            by_title_type: partial.by_title_type,
            genre_counts: partial.genre_counts,
        }
    }
}

#[derive(Default)]
struct PartialStats {
    rated: usize,
    rating_sum: f64,
    by_title_type: HashMap<String, usize>,
    genre_counts: HashMap<String, usize>,
}

impl PartialStats {
    fn add(&mut self, record: &TitleRecord) {
        if let Some(rating) = record.average_rating {
            self.rated += 1;
            self.rating_sum += rating as f64;
        }

        let title_type = if record.title_type.is_empty() {
            "unknown"
        } else {
            record.title_type.as_str()
        };
        *self.by_title_type.entry(title_type.to_string()).or_insert(0) += 1;

        for genre in record.genre_list() {
            *self.genre_counts.entry(genre.to_string()).or_insert(0) += 1;
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.rated += other.rated;
        self.rating_sum += other.rating_sum;
        for (title_type, count) in other.by_title_type {
            *self.by_title_type.entry(title_type).or_insert(0) += count;
        }
        for (genre, count) in other.genre_counts {
            *self.genre_counts.entry(genre).or_insert(0) += count;
        }
        self
    }
}
