//! Stage implementations for the recommendation pipeline.
//!
//! This module contains the concrete stages that are composed into a
//! FilterPipeline, in the order they run.

pub mod genre_match;
pub mod director_match;
pub mod title_type;

// Re-export for convenience
pub use genre_match::GenreMatchFilter;
pub use director_match::DirectorMatchFilter;
pub use title_type::TitleTypeFilter;
