//! The FilterPipeline orchestrates the recommendation stages.
//!
//! This module provides the FilterPipeline struct that chains stages
//! together using the builder pattern, and the `recommend` entry point that
//! runs the standard genre → director → title type relaxation.

use crate::config::PipelineConfig;
use crate::filters::{DirectorMatchFilter, GenreMatchFilter, TitleTypeFilter};
use crate::traits::{Filter, Seed};
use data_loader::{Dataset, SeedMetadata, TitleRecord};

/// Chains multiple stages together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreMatchFilter)
///     .add_filter(DirectorMatchFilter::new(5))
///     .add_filter(TitleTypeFilter::new(5));
///
/// let working = pipeline.apply(dataset.records().iter().collect(), &seed);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The standard relaxation pipeline: genre, then director, then type.
    pub fn standard(config: &PipelineConfig) -> Self {
        Self::new()
            .add_filter(GenreMatchFilter)
            .add_filter(DirectorMatchFilter::new(config.director_match_threshold))
            .add_filter(TitleTypeFilter::new(config.title_type_match_threshold))
    }

    /// Add a stage to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the stages, in run order
    pub fn stage_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all stages in sequence to the working set.
    ///
    /// ## Algorithm
    /// 1. Start with the input candidates
    /// 2. For each stage in order:
    ///    a. Log stage name and input count
    ///    b. Apply the stage
    ///    c. Log output count
    ///    d. Stop early if nothing is left
    /// 3. Return the final working set
    pub fn apply<'a>(&self, candidates: Vec<&'a TitleRecord>, seed: &Seed<'_>) -> Vec<&'a TitleRecord> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, seed);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
            if current.is_empty() {
                tracing::info!("{}: no candidates left, stopping", filter.name());
                break;
            }
        }
        current
    }

    /// Run the pipeline over a whole dataset and keep the first `top_n`.
    ///
    /// Records are borrowed from `dataset`; nothing is copied or mutated.
    pub fn recommend<'a>(
        &self,
        metadata: &SeedMetadata,
        dataset: &'a Dataset,
        seed_id: &str,
        top_n: usize,
    ) -> Vec<&'a TitleRecord> {
        let seed = Seed::new(seed_id, metadata);
        let mut working = self.apply(dataset.records().iter().collect(), &seed);
        working.truncate(top_n);

        if working.is_empty() {
            tracing::info!("Recommendations: No recommendations found for {}.", seed_id);
        } else {
            tracing::info!("Recommendations: {} titles for {}", working.len(), seed_id);
        }
        working
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::standard(&PipelineConfig::default())
    }
}

/// Recommend up to `top_n` titles similar to the seed, using the default
/// thresholds.
pub fn recommend<'a>(
    metadata: &SeedMetadata,
    dataset: &'a Dataset,
    seed_id: &str,
    top_n: usize,
) -> Vec<&'a TitleRecord> {
    FilterPipeline::default().recommend(metadata, dataset, seed_id, top_n)
}
