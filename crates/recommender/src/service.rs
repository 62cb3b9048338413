//! # Recommendation Service
//!
//! This module coordinates one recommendation request:
//! 1. Validate the seed id
//! 2. Resolve seed metadata (one async lookup)
//! 3. Run the filter pipeline on a blocking thread
//! 4. Report results, status and elapsed time
//!
//! Failures never escape: not-found, lookup errors and empty pipelines all
//! come back as an empty `RecommendationReport` plus a log line, so the
//! caller can go straight on to the next request.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use data_loader::{Dataset, SeedMetadata, TitleRecord};
use omdb_client::{MetadataResolver, OmdbClient, ResolveError};
use pipeline::{FilterPipeline, PipelineConfig};

use crate::config::Config;
use crate::report::{RecommendationReport, RecommendationStatus};

/// Main service tying the resolver, the dataset and the pipeline together
#[derive(Clone)]
pub struct RecommendationService {
    dataset: Arc<Dataset>,
    resolver: Arc<dyn MetadataResolver>,
    pipeline: Arc<FilterPipeline>,
    default_top_n: usize,
}

impl RecommendationService {
    /// Create a service from already-built parts
    ///
    /// # Arguments
    /// * `dataset` - Shared, read-only title dataset
    /// * `resolver` - Where seed metadata comes from
    /// * `config` - Pipeline thresholds and default result count
    pub fn new(
        dataset: Arc<Dataset>,
        resolver: Arc<dyn MetadataResolver>,
        config: &PipelineConfig,
    ) -> Self {
        let pipeline = FilterPipeline::standard(config);
        info!(
            "Recommendation stages: {} over {} titles",
            pipeline.stage_names().join(" -> "),
            dataset.len()
        );

        Self {
            dataset,
            resolver,
            pipeline: Arc::new(pipeline),
            default_top_n: config.top_n,
        }
    }

    /// Build the OMDb client from `config` and wrap an already loaded dataset
    pub fn from_config(config: &Config, dataset: Arc<Dataset>) -> Result<Self> {
        let settings = config.omdb_settings()?;
        let client = OmdbClient::new(settings).context("Failed to build OMDb client")?;
        Ok(Self::new(dataset, Arc::new(client), &config.pipeline_config()))
    }

    pub fn default_top_n(&self) -> usize {
        self.default_top_n
    }

    /// Main entry point: recommend up to `top_n` titles similar to `seed_id`
    pub async fn recommend(&self, seed_id: &str, top_n: usize) -> RecommendationReport {
        let start_time = Instant::now();
        let seed_id = seed_id.trim();

        if seed_id.is_empty() {
            warn!("Rejected empty seed id");
            return RecommendationReport::empty(
                seed_id,
                RecommendationStatus::InvalidSeed,
                start_time.elapsed(),
            );
        }

        let metadata = match self.resolver.resolve(seed_id).await {
            Ok(metadata) => metadata,
            Err(e) => {
                let status = match &e {
                    ResolveError::NotFound { .. } => {
                        warn!("Seed {} not found: {}", seed_id, e);
                        RecommendationStatus::NotFound
                    }
                    _ => {
                        error!("Failed to resolve seed {}: {}", seed_id, e);
                        RecommendationStatus::ResolutionFailed
                    }
                };
                return RecommendationReport::empty(seed_id, status, start_time.elapsed());
            }
        };
        info!(
            "Genres: {:?}, Directors: {:?}, Title Type: {}",
            metadata.genres, metadata.directors, metadata.title_type
        );

        let recommendations = match self.run_pipeline(&metadata, seed_id, top_n).await {
            Ok(recommendations) => recommendations,
            Err(e) => {
                error!("Recommendation pipeline failed for {}: {:#}", seed_id, e);
                let mut report = RecommendationReport::empty(
                    seed_id,
                    RecommendationStatus::PipelineFailed,
                    start_time.elapsed(),
                );
                report.metadata = Some(metadata);
                return report;
            }
        };

        let status = if recommendations.is_empty() {
            RecommendationStatus::NoMatches
        } else {
            RecommendationStatus::Found
        };

        let elapsed = start_time.elapsed();
        info!(
            "Total time to get {} recommendations for {}: {:.2?}",
            recommendations.len(),
            seed_id,
            elapsed
        );

        RecommendationReport {
            seed_id: seed_id.to_string(),
            status,
            metadata: Some(metadata),
            recommendations,
            elapsed,
        }
    }

    /// Run the CPU-bound pipeline off the async threads
    async fn run_pipeline(
        &self,
        metadata: &SeedMetadata,
        seed_id: &str,
        top_n: usize,
    ) -> Result<Vec<TitleRecord>> {
        let dataset = self.dataset.clone();
        let pipeline = self.pipeline.clone();
        let metadata = metadata.clone();
        let seed_id = seed_id.to_string();

        tokio::task::spawn_blocking(move || {
            pipeline
                .recommend(&metadata, &dataset, &seed_id, top_n)
                .into_iter()
                .cloned()
                .collect::<Vec<TitleRecord>>()
        })
        .await
        .context("Pipeline task panicked")
    }
}
