//! # Data Loader Crate
//!
//! This crate handles loading and indexing the title dataset used for
//! similar-title recommendations.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (TitleRecord, SeedMetadata, Dataset)
//! - **parser**: Parse the dataset CSV into Rust structs
//! - **index**: Build the Dataset and compute statistics
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Dataset;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! let dataset = Arc::new(Dataset::load_from_file(Path::new("titles.csv"))?);
//!
//! let record = dataset.get("tt0111161").unwrap();
//! println!("{} is a {}", record.id, record.title_type);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{Dataset, DatasetStats, SeedMetadata, TitleId, TitleRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_creation() {
        let dataset = Dataset::new();

        assert_eq!(dataset.len(), 0);
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_insert_record() {
        let mut dataset = Dataset::new();

        let record = TitleRecord::new("tt0111161", "Drama", "Frank Darabont", "movie", Some(9.3));
        assert!(dataset.insert_record(record));

        let retrieved = dataset.get("tt0111161").unwrap();
        assert_eq!(retrieved.directors, "Frank Darabont");
        assert_eq!(retrieved.average_rating, Some(9.3));
    }

    #[test]
    fn test_duplicate_insert_is_rejected() {
        let mut dataset = Dataset::new();

        assert!(dataset.insert_record(TitleRecord::new("tt1", "Drama", "X", "movie", Some(5.0))));
        assert!(!dataset.insert_record(TitleRecord::new("tt1", "Comedy", "Y", "movie", Some(9.0))));

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.get("tt1").unwrap().genres, "Drama");
    }

    #[test]
    fn test_from_records_keeps_order() {
        let dataset = Dataset::from_records(vec![
            TitleRecord::new("b", "Drama", "", "movie", None),
            TitleRecord::new("a", "Drama", "", "movie", None),
        ]);

        assert_eq!(dataset.records()[0].id, "b");
        assert_eq!(dataset.records()[1].id, "a");
        assert_eq!(dataset.get("a").unwrap().id, "a");
    }

    #[test]
    fn test_genre_list_trims() {
        let record = TitleRecord::new("x", " Action , Sci-Fi,,", "", "movie", None);
        assert_eq!(record.genre_list().collect::<Vec<_>>(), vec!["Action", "Sci-Fi"]);
    }

    #[test]
    fn test_empty_queries() {
        let dataset = Dataset::new();
        assert!(dataset.get("tt0000001").is_none());
        assert!(dataset.records().is_empty());
    }
}
