use data_loader::Dataset;
use std::path::PathBuf;
use std::time::Instant;

fn main() {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("merged_file_cleaned_modified.csv"));

    println!("Loading title dataset from {}...\n", path.display());

    let start = Instant::now();
    let dataset = Dataset::load_from_file(&path).expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let stats_start = Instant::now();
    let stats = dataset.compute_stats();
    let stats_elapsed = stats_start.elapsed();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Titles: {}", stats.total);
    println!("Rated: {}", stats.rated);
    println!("Stats computed in: {:?}", stats_elapsed);
    println!("\nPerformance: {:.0} rows/second",
             stats.total as f64 / elapsed.as_secs_f64());
}
