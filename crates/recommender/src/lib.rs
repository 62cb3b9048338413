//! Recommender crate for the ReelMatch similar-title engine.
//!
//! This crate contains the configuration and the service that runs one
//! request end to end: resolve the seed, filter the dataset, report.

pub mod config;
pub mod report;
pub mod service;

pub use config::{Config, ConfigError};
pub use report::{format_recommendation, RecommendationReport, RecommendationStatus};
pub use service::RecommendationService;
