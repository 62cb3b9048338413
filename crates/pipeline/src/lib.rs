//! Pipeline that turns seed metadata into ranked similar titles.
//!
//! This crate provides:
//! - Filter trait and the three relaxation stages
//! - FilterPipeline for composing stages
//! - `recommend`, the entry point used by the service layer
//!
//! ## Architecture
//! Stages run strictly in sequence, each on the previous stage's output:
//! 1. GenreMatchFilter keeps titles sharing a genre with the seed
//! 2. DirectorMatchFilter narrows to the seed's directors when there are
//!    enough of them, then sorts by rating
//! 3. TitleTypeFilter prefers titles of the seed's type when there are
//!    enough of them
//!
//! The first `top_n` records of the final working set are the result.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{recommend, DEFAULT_TOP_N};
//!
//! let results = recommend(&metadata, &dataset, "tt0468569", DEFAULT_TOP_N);
//! for record in results {
//!     println!("{} ({:?})", record.id, record.average_rating);
//! }
//! ```

pub mod config;
pub mod traits;
pub mod ranking;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use config::{
    PipelineConfig, DEFAULT_TOP_N, DIRECTOR_MATCH_THRESHOLD, TITLE_TYPE_MATCH_THRESHOLD,
};
pub use filter_pipeline::{recommend, FilterPipeline};
pub use traits::{Filter, Seed};
