//! What a recommendation request hands back to its caller.

use std::fmt::Write;
use std::time::Duration;

use data_loader::{SeedMetadata, TitleRecord};
use serde::Serialize;

/// How a request ended. Every variant except `Found` comes with an empty
/// recommendation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecommendationStatus {
    /// At least one recommendation
    Found,
    /// Seed resolved, but no title survived the pipeline
    NoMatches,
    /// The metadata service doesn't know the seed id
    NotFound,
    /// Transport or decode failure while resolving the seed
    ResolutionFailed,
    /// Blank seed id, rejected before any lookup
    InvalidSeed,
    /// The filtering task died
    PipelineFailed,
}

/// Final result of one `RecommendationService::recommend` call
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationReport {
    pub seed_id: String,
    pub status: RecommendationStatus,
    pub metadata: Option<SeedMetadata>,
    /// Best first
    pub recommendations: Vec<TitleRecord>,
    /// Wall-clock time of the whole call, for display only
    #[serde(skip)]
    pub elapsed: Duration,
}

impl RecommendationReport {
    pub(crate) fn empty(seed_id: &str, status: RecommendationStatus, elapsed: Duration) -> Self {
        Self {
            seed_id: seed_id.to_string(),
            status,
            metadata: None,
            recommendations: Vec::new(),
            elapsed,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    /// One-line description of the outcome, suitable for showing to a user
    pub fn message(&self) -> String {
        match self.status {
            RecommendationStatus::Found => {
                format!("Found {} recommendations for {}", self.recommendations.len(), self.seed_id)
            }
            RecommendationStatus::NoMatches => "No recommendations found.".to_string(),
            RecommendationStatus::NotFound => format!("Movie not found for {}", self.seed_id),
            RecommendationStatus::ResolutionFailed => {
                format!("Could not fetch metadata for {}", self.seed_id)
            }
            RecommendationStatus::InvalidSeed => "Please enter a valid IMDb ID.".to_string(),
            RecommendationStatus::PipelineFailed => {
                format!("Failed to compute recommendations for {}", self.seed_id)
            }
        }
    }
}

/// Render one record as a text block:
///
/// ```text
/// Title: tt0111161
/// Genres: Drama
/// Directors: Frank Darabont
/// Title Type: movie
/// Average Rating: 9.3
/// ------------------------
/// ```
pub fn format_recommendation(record: &TitleRecord) -> String {
    let rating = record
        .average_rating
        .map(format_rating)
        .unwrap_or_else(|| "N/A".to_string());

    let mut text = String::new();
    let _ = writeln!(text, "Title: {}", record.id);
    let _ = writeln!(text, "Genres: {}", record.genres);
    let _ = writeln!(text, "Directors: {}", record.directors);
    let _ = writeln!(text, "Title Type: {}", record.title_type);
    let _ = writeln!(text, "Average Rating: {}", rating);
    text.push_str("------------------------\n");
    text
}

/// Whole numbers keep one decimal place, so 7.0 reads "7.0" and not "7"
fn format_rating(rating: f32) -> String {
    if rating.fract() == 0.0 {
        format!("{:.1}", rating)
    } else {
        rating.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_recommendation() {
        let record = TitleRecord::new("tt0111161", "Drama", "Frank Darabont", "movie", Some(9.3));

        assert_eq!(
            format_recommendation(&record),
            "Title: tt0111161\n\
             Genres: Drama\n\
             Directors: Frank Darabont\n\
             Title Type: movie\n\
             Average Rating: 9.3\n\
             ------------------------\n"
        );
    }

    #[test]
    fn test_format_whole_rating_keeps_decimal() {
        let record = TitleRecord::new("tt2", "Drama", "", "movie", Some(7.0));
        assert!(format_recommendation(&record).contains("Average Rating: 7.0\n"));

        let record = TitleRecord::new("tt3", "Drama", "", "movie", Some(10.0));
        assert!(format_recommendation(&record).contains("Average Rating: 10.0\n"));
    }

    #[test]
    fn test_format_missing_rating() {
        let record = TitleRecord::new("tt1", "Drama", "", "movie", None);
        assert!(format_recommendation(&record).contains("Average Rating: N/A\n"));
    }

    #[test]
    fn test_empty_report_message() {
        let report = RecommendationReport::empty("  ", RecommendationStatus::InvalidSeed, Duration::ZERO);
        assert!(report.is_empty());
        assert_eq!(report.message(), "Please enter a valid IMDb ID.");
    }
}
