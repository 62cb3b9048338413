//! Metadata client for the OMDb title lookup service.
//!
//! This crate resolves a seed title id (an IMDb `tconst`) into the
//! `SeedMetadata` the recommendation pipeline needs. It handles:
//! - Building the HTTP client from explicit settings (API key, base URL)
//! - One GET request per lookup, no caching and no retries
//! - Mapping OMDb's in-body failure flag to `ResolveError::NotFound`
//!
//! The `MetadataResolver` trait is the seam the rest of the workspace
//! depends on, so tests and other front ends can plug in their own source.

use std::time::Duration;

use async_trait::async_trait;
use data_loader::SeedMetadata;
use thiserror::Error;
use tracing::{debug, error, info, warn};

pub mod response;

pub use response::{split_list, OmdbResponse};

/// Default OMDb endpoint
pub const DEFAULT_OMDB_URL: &str = "http://www.omdbapi.com/";

/// Errors that can occur when resolving seed metadata
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The service answered, but has no title for this id (or rejected the key)
    #[error("Title not found for {seed_id}: {message}")]
    NotFound { seed_id: String, message: String },

    /// The request never got a response (DNS, connect, timeout, ...)
    #[error("Failed to reach metadata service: {0}")]
    Request(#[source] reqwest::Error),

    /// A response came back but it is not the expected JSON shape
    #[error("Invalid response from metadata service: {0}")]
    InvalidResponse(String),
}

// The request URL carries the API key in its query string, so it is
// stripped before the error is stored or displayed.
impl From<reqwest::Error> for ResolveError {
    fn from(e: reqwest::Error) -> Self {
        ResolveError::Request(e.without_url())
    }
}

impl ResolveError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound { .. })
    }
}

/// Source of seed metadata.
///
/// `Send + Sync` so a resolver can be shared behind an `Arc` by an async
/// service.
#[async_trait]
pub trait MetadataResolver: Send + Sync {
    /// Look up the genres, directors and type of `seed_id`.
    async fn resolve(&self, seed_id: &str) -> Result<SeedMetadata, ResolveError>;
}

/// Connection settings for [`OmdbClient`]
#[derive(Debug, Clone)]
pub struct OmdbSettings {
    pub api_key: String,
    pub base_url: String,
    /// Whole-request timeout; `None` leaves reqwest's default (no timeout)
    pub timeout: Option<Duration>,
}

impl OmdbSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_OMDB_URL.to_string(),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// OMDb-backed [`MetadataResolver`].
#[derive(Clone)]
pub struct OmdbClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OmdbClient {
    /// Build a client from explicit settings.
    ///
    /// No request is made here; the first network call happens in `resolve`.
    pub fn new(settings: OmdbSettings) -> Result<Self, ResolveError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        info!("Using metadata service at {}", settings.base_url);
        Ok(Self {
            http,
            api_key: settings.api_key,
            base_url: settings.base_url,
        })
    }
}

#[async_trait]
impl MetadataResolver for OmdbClient {
    async fn resolve(&self, seed_id: &str) -> Result<SeedMetadata, ResolveError> {
        debug!("Looking up metadata for {}", seed_id);

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("i", seed_id),
                ("r", "json"),
            ])
            .send()
            .await
            .map_err(|e| {
                let e = ResolveError::from(e);
                error!("Error fetching data for {}: {}", seed_id, e);
                e
            })?;

        // OMDb reports failures (unknown id, bad key) in the body, sometimes
        // with a non-2xx status, so decode before looking at the status.
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            let e = ResolveError::from(e);
            error!("Error reading response for {}: {}", seed_id, e);
            e
        })?;

        let decoded: OmdbResponse = serde_json::from_str(&body).map_err(|e| {
            error!(
                "Undecodable metadata response for {} (status {}): {}",
                seed_id, status, e
            );
            ResolveError::InvalidResponse(format!("status {}: {}", status, e))
        })?;

        let title = decoded.title.clone();
        match decoded.into_metadata(seed_id) {
            Ok(metadata) => {
                info!(
                    "Resolved {} ({}): Genres: {:?}, Directors: {:?}, Title Type: {}",
                    seed_id,
                    title.as_deref().unwrap_or("untitled"),
                    metadata.genres,
                    metadata.directors,
                    metadata.title_type
                );
                Ok(metadata)
            }
            Err(e) => {
                warn!("OMDB API: Movie not found for tconst {} ({})", seed_id, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_builder() {
        let settings = OmdbSettings::new("key")
            .with_base_url("http://localhost:8080/")
            .with_timeout(Duration::from_secs(3));

        assert_eq!(settings.api_key, "key");
        assert_eq!(settings.base_url, "http://localhost:8080/");
        assert_eq!(settings.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_default_base_url() {
        let client = OmdbClient::new(OmdbSettings::new("key")).unwrap();
        assert_eq!(client.base_url, DEFAULT_OMDB_URL);
    }

    #[test]
    fn test_is_not_found() {
        let err = ResolveError::NotFound {
            seed_id: "tt0".into(),
            message: "Incorrect IMDb ID.".into(),
        };
        assert!(err.is_not_found());
        assert!(!ResolveError::InvalidResponse("x".into()).is_not_found());
    }
}
