//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable stages to be
//! applied to the candidate working set, plus the `Seed` every stage reads.

use data_loader::{SeedMetadata, TitleRecord};

/// The title recommendations are based on: its id and resolved metadata.
#[derive(Debug, Clone, Copy)]
pub struct Seed<'s> {
    pub id: &'s str,
    pub metadata: &'s SeedMetadata,
}

impl<'s> Seed<'s> {
    pub fn new(id: &'s str, metadata: &'s SeedMetadata) -> Self {
        Self { id, metadata }
    }
}

/// Core trait for pipeline stages.
///
/// All stages must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows a pipeline to be shared across threads
/// - Stages take ownership of the working set and return the next one
/// - Records are borrowed from the dataset, never cloned
/// - A stage cannot fail: an empty working set is a valid outcome
pub trait Filter: Send + Sync {
    /// Returns the name of this stage (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this stage to the working set.
    ///
    /// # Arguments
    /// * `candidates` - The current working set (takes ownership)
    /// * `seed` - Seed id and metadata
    ///
    /// # Returns
    /// The working set handed to the next stage
    fn apply<'a>(&self, candidates: Vec<&'a TitleRecord>, seed: &Seed<'_>) -> Vec<&'a TitleRecord>;
}
