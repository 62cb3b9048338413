//! Runtime configuration, read from environment variables (and an optional
//! `.env` file).

use std::path::PathBuf;
use std::time::Duration;

use omdb_client::{OmdbSettings, DEFAULT_OMDB_URL};
use pipeline::{PipelineConfig, DEFAULT_TOP_N, DIRECTOR_MATCH_THRESHOLD, TITLE_TYPE_MATCH_THRESHOLD};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Env(#[from] envy::Error),

    #[error("No API key found. Please set OMDB_API_KEY or pass --api-key.")]
    MissingApiKey,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OMDb API key; only needed by commands that look up a seed
    #[serde(default)]
    pub omdb_api_key: Option<String>,

    /// OMDb endpoint
    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    /// Request timeout for the metadata lookup, in seconds
    #[serde(default)]
    pub omdb_timeout_secs: Option<u64>,

    /// Path to the title dataset CSV
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,

    /// Number of recommendations returned when the caller doesn't say
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    #[serde(default = "default_director_match_threshold")]
    pub director_match_threshold: usize,

    #[serde(default = "default_title_type_match_threshold")]
    pub title_type_match_threshold: usize,
}

fn default_omdb_api_url() -> String {
    DEFAULT_OMDB_URL.to_string()
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("merged_file_cleaned_modified.csv")
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_director_match_threshold() -> usize {
    DIRECTOR_MATCH_THRESHOLD
}

fn default_title_type_match_threshold() -> usize {
    TITLE_TYPE_MATCH_THRESHOLD
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env::<Config>()?)
    }

    /// Load configuration from explicit `(NAME, value)` pairs
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter::<_, Config>(vars)?)
    }

    /// Settings for the OMDb client. Fails if no API key is configured.
    pub fn omdb_settings(&self) -> Result<OmdbSettings, ConfigError> {
        let api_key = self
            .omdb_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let mut settings = OmdbSettings::new(api_key).with_base_url(self.omdb_api_url.clone());
        if let Some(secs) = self.omdb_timeout_secs {
            settings = settings.with_timeout(Duration::from_secs(secs));
        }
        Ok(settings)
    }

    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            director_match_threshold: self.director_match_threshold,
            title_type_match_threshold: self.title_type_match_threshold,
            top_n: self.top_n,
        }
    }
}
