//! OMDb response body and its conversion into `SeedMetadata`.

use data_loader::SeedMetadata;
use serde::Deserialize;

use crate::ResolveError;

/// Placeholder OMDb uses for fields it has no value for
const NOT_AVAILABLE: &str = "N/A";

/// The subset of an OMDb title lookup we care about.
///
/// OMDb answers `{"Response":"False","Error":"..."}` for unknown ids and bad
/// keys, so every field except `Response` is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbResponse {
    pub response: String,
    pub title: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    pub error: Option<String>,
}

impl OmdbResponse {
    pub fn is_success(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }

    /// Turn a decoded response into seed metadata, or `NotFound` when OMDb
    /// reported a failure.
    pub fn into_metadata(self, seed_id: &str) -> Result<SeedMetadata, ResolveError> {
        if !self.is_success() {
            return Err(ResolveError::NotFound {
                seed_id: seed_id.to_string(),
                message: self
                    .error
                    .unwrap_or_else(|| "Movie not found!".to_string()),
            });
        }

        Ok(SeedMetadata {
            genres: split_list(self.genre.as_deref().unwrap_or_default()),
            directors: split_list(self.director.as_deref().unwrap_or_default()),
            title_type: self.kind.unwrap_or_default(),
        })
    }
}

/// Split a comma-separated OMDb field into trimmed, non-empty entries.
///
/// "N/A" entries are dropped.
pub fn split_list(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty() && *item != NOT_AVAILABLE)
        .map(String::from)
        .collect()
}
