//! Integration tests for the recommendation pipeline.
//!
//! These exercise the full genre → director → title type relaxation on
//! small hand-built datasets.

use data_loader::{Dataset, SeedMetadata, TitleRecord};
use pipeline::filters::GenreMatchFilter;
use pipeline::{recommend, Filter, FilterPipeline, PipelineConfig, Seed, DEFAULT_TOP_N};

fn ids(records: &[&TitleRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

fn seed(genres: &[&str], directors: &[&str], title_type: &str) -> SeedMetadata {
    SeedMetadata::new(
        genres.iter().map(|g| g.to_string()).collect(),
        directors.iter().map(|d| d.to_string()).collect(),
        title_type,
    )
}

/// `director_matches` Drama titles by "Ridley Scott" rated 6.x, followed by
/// higher rated Drama titles by other directors.
fn director_dataset(director_matches: usize) -> Dataset {
    let mut records = Vec::new();
    for i in 0..director_matches {
        records.push(TitleRecord::new(
            format!("rs{i}"),
            "Drama,History",
            "Ridley Scott",
            "movie",
            Some(6.0 + i as f32 / 10.0),
        ));
    }
    for i in 0..4 {
        records.push(TitleRecord::new(
            format!("other{i}"),
            "Drama",
            "Someone Else",
            "movie",
            Some(9.0 - i as f32 / 10.0),
        ));
    }
    Dataset::from_records(records)
}

#[test]
fn test_end_to_end_example() {
    let dataset = Dataset::from_records(vec![
        TitleRecord::new("A", "Comedy", "X", "movie", Some(8.0)),
        TitleRecord::new("B", "Comedy", "Y", "movie", Some(7.0)),
    ]);
    let metadata = seed(&["Comedy"], &[], "movie");

    let results = recommend(&metadata, &dataset, "tt_seed", 5);

    assert_eq!(ids(&results), vec!["A", "B"]);
}

#[test]
fn test_empty_genres_yield_nothing() {
    let dataset = director_dataset(8);
    let metadata = seed(&[], &["Ridley Scott"], "movie");

    assert!(recommend(&metadata, &dataset, "tt_seed", DEFAULT_TOP_N).is_empty());
}

#[test]
fn test_empty_dataset_yields_nothing() {
    let dataset = Dataset::new();
    let metadata = seed(&["Drama"], &["Ridley Scott"], "movie");

    assert!(recommend(&metadata, &dataset, "tt_seed", DEFAULT_TOP_N).is_empty());
}

#[test]
fn test_genre_stage_output_is_matching_subset() {
    let dataset = Dataset::from_records(vec![
        TitleRecord::new("1", "Horror", "", "movie", Some(5.0)),
        TitleRecord::new("2", "Sci-Fi,Thriller", "", "movie", Some(6.0)),
        TitleRecord::new("3", "Romance", "", "movie", Some(7.0)),
        TitleRecord::new("4", "Thriller", "", "short", Some(8.0)),
    ]);
    let metadata = seed(&["Thriller", "Mystery"], &[], "movie");
    let seed = Seed::new("tt_seed", &metadata);

    let stage = GenreMatchFilter.apply(dataset.records().iter().collect(), &seed);

    assert_eq!(ids(&stage), vec!["2", "4"]);
    for record in &stage {
        assert_eq!(dataset.get(&record.id), Some(*record));
        assert!(metadata.genres.iter().any(|g| record.genres.contains(g.as_str())));
    }
}

#[test]
fn test_five_director_matches_fall_back_to_genre_set() {
    let dataset = director_dataset(5);
    let metadata = seed(&["Drama"], &["Ridley Scott"], "movie");

    let results = recommend(&metadata, &dataset, "tt_seed", DEFAULT_TOP_N);

    // Genre set sorted by rating: the four "other" titles come first
    assert_eq!(
        ids(&results),
        vec!["other0", "other1", "other2", "other3", "rs4"]
    );
}

#[test]
fn test_six_director_matches_use_director_set() {
    let dataset = director_dataset(6);
    let metadata = seed(&["Drama"], &["Ridley Scott"], "movie");

    let results = recommend(&metadata, &dataset, "tt_seed", DEFAULT_TOP_N);

    assert_eq!(ids(&results), vec!["rs5", "rs4", "rs3", "rs2", "rs1"]);
}

#[test]
fn test_seed_never_in_director_subset() {
    let mut records: Vec<TitleRecord> = director_dataset(6).records().to_vec();
    records.push(TitleRecord::new("tt_seed", "Drama", "Ridley Scott", "movie", Some(9.9)));
    let dataset = Dataset::from_records(records);
    let metadata = seed(&["Drama"], &["Ridley Scott"], "movie");

    let results = recommend(&metadata, &dataset, "tt_seed", 10);

    assert_eq!(results.len(), 6);
    assert!(results.iter().all(|r| r.id != "tt_seed"));
}

#[test]
fn test_equal_ratings_keep_dataset_order() {
    let dataset = Dataset::from_records(vec![
        TitleRecord::new("first", "Drama", "", "movie", Some(7.0)),
        TitleRecord::new("top", "Drama", "", "movie", Some(9.0)),
        TitleRecord::new("second", "Drama", "", "movie", Some(7.0)),
        TitleRecord::new("third", "Drama", "", "movie", Some(7.0)),
        TitleRecord::new("unrated", "Drama", "", "movie", None),
    ]);
    let metadata = seed(&["Drama"], &[], "movie");

    let results = recommend(&metadata, &dataset, "tt_seed", 5);

    assert_eq!(ids(&results), vec!["top", "first", "second", "third", "unrated"]);
}

#[test]
fn test_title_type_preference() {
    let mut records = Vec::new();
    for i in 0..5 {
        records.push(TitleRecord::new(format!("series{i}"), "Drama", "", "tvSeries", Some(9.0)));
    }
    for i in 0..5 {
        records.push(TitleRecord::new(format!("movie{i}"), "Drama", "", "movie", Some(7.0)));
    }
    let dataset = Dataset::from_records(records);

    let movie_seed = seed(&["Drama"], &[], "movie");
    let results = recommend(&movie_seed, &dataset, "tt_seed", 3);
    assert_eq!(ids(&results), vec!["movie0", "movie1", "movie2"]);

    // No shorts at all: type is ignored and the best rated titles win
    let short_seed = seed(&["Drama"], &[], "short");
    let results = recommend(&short_seed, &dataset, "tt_seed", 3);
    assert_eq!(ids(&results), vec!["series0", "series1", "series2"]);
}

#[test]
fn test_recommend_is_idempotent() {
    let dataset = director_dataset(7);
    let metadata = seed(&["Drama", "History"], &["Ridley Scott", "Someone Else"], "movie");

    let first = ids(&recommend(&metadata, &dataset, "rs0", DEFAULT_TOP_N));
    let second = ids(&recommend(&metadata, &dataset, "rs0", DEFAULT_TOP_N));

    assert_eq!(first, second);
    assert!(!first.contains(&"rs0".to_string()));
}

#[test]
fn test_custom_thresholds() {
    let dataset = director_dataset(2);
    let metadata = seed(&["Drama"], &["Ridley Scott"], "movie");
    let config = PipelineConfig {
        director_match_threshold: 1,
        ..PipelineConfig::default()
    };

    let results = FilterPipeline::standard(&config).recommend(&metadata, &dataset, "tt_seed", 5);

    assert_eq!(ids(&results), vec!["rs1", "rs0"]);
}
