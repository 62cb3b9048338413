use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{Dataset, TitleRecord};
use recommender::{format_recommendation, Config, RecommendationReport, RecommendationService};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};

/// ReelMatch - similar-title recommendations
#[derive(Parser)]
#[command(name = "reel-match")]
#[command(about = "Recommend titles similar to an IMDb title", long_about = None)]
struct Cli {
    /// Path to the title dataset CSV (defaults to DATASET_PATH)
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// OMDb API key (defaults to OMDB_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get recommendations for one seed title
    Recommend {
        /// IMDb ID of the seed title (e.g. tt0468569)
        #[arg(long)]
        id: String,

        /// Number of recommendations to return (defaults to TOP_N)
        #[arg(long)]
        limit: Option<usize>,

        /// Print the recommendations as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read seed ids from stdin, one per line, until EOF or "quit"
    Interactive {
        /// Number of recommendations per seed (defaults to TOP_N)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show the dataset record for a title
    Show {
        /// IMDb ID to display
        #[arg(long)]
        id: String,
    },

    /// Summarize the loaded dataset
    Stats {
        /// Number of genres to list
        #[arg(long, default_value = "10")]
        top_genres: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(path) = cli.dataset {
        config.dataset_path = path;
    }
    if let Some(key) = cli.api_key {
        config.omdb_api_key = Some(key);
    }

    // Fail on a missing key before spending time on the dataset
    if matches!(cli.command, Commands::Recommend { .. } | Commands::Interactive { .. }) {
        config.omdb_settings()?;
    }

    // Load the dataset (this may take a moment)
    eprintln!("Loading title dataset from {}...", config.dataset_path.display());
    let start = Instant::now();
    let dataset = Arc::new(
        Dataset::load_from_file(&config.dataset_path).context("Failed to load title dataset")?,
    );
    eprintln!(
        "{} Loaded {} titles in {:?}",
        "✓".green(),
        dataset.len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend { id, limit, json } => {
            let service = RecommendationService::from_config(&config, dataset)?;
            let limit = limit.unwrap_or(service.default_top_n());
            handle_recommend(&service, &id, limit, json).await?
        }
        Commands::Interactive { limit } => {
            let service = RecommendationService::from_config(&config, dataset)?;
            let limit = limit.unwrap_or(service.default_top_n());
            handle_interactive(&service, limit).await?
        }
        Commands::Show { id } => handle_show(&dataset, &id)?,
        Commands::Stats { top_genres } => handle_stats(&dataset, top_genres),
    }

    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    service: &RecommendationService,
    seed_id: &str,
    limit: usize,
    json: bool,
) -> Result<()> {
    let report = service.recommend(seed_id, limit).await;

    if json {
        write_json(&mut std::io::stdout().lock(), &report.recommendations)?;
    } else {
        print_report(&report);
    }
    Ok(())
}

/// Write the records as one pretty-printed JSON array
fn write_json<W: Write>(out: &mut W, records: &[TitleRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, records)
        .context("Failed to serialize recommendations")?;
    writeln!(out).context("Failed to write recommendations")?;
    Ok(())
}

/// Handle the 'interactive' command
///
/// Every line is one request; a failed request just prints its message and
/// the loop goes on.
async fn handle_interactive(service: &RecommendationService, limit: usize) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{}", "Enter IMDb ID: ".bold());
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("Failed to read stdin")? else {
            break;
        };
        let seed_id = line.trim();

        if seed_id.eq_ignore_ascii_case("quit") || seed_id.eq_ignore_ascii_case("exit") {
            break;
        }
        if seed_id.is_empty() {
            println!("{}", "Please enter a valid IMDb ID.".red());
            continue;
        }

        let report = service.recommend(seed_id, limit).await;
        print_report(&report);
    }
    Ok(())
}

/// Handle the 'show' command
fn handle_show(dataset: &Dataset, id: &str) -> Result<()> {
    let record = dataset
        .get(id.trim())
        .ok_or_else(|| anyhow!("Title {} not found in dataset", id))?;

    print!("{}", format_recommendation(record));
    Ok(())
}

/// Handle the 'stats' command
fn handle_stats(dataset: &Dataset, top_genres: usize) {
    let stats = dataset.compute_stats();

    println!("{}", "Dataset summary:".bold().blue());
    println!("{}Titles: {}", "• ".green(), stats.total);
    println!("{}Rated titles: {}", "• ".green(), stats.rated);
    println!("{}Average rating: {:.2}", "• ".green(), stats.mean_rating);

    let mut by_type: Vec<(&String, &usize)> = stats.by_title_type.iter().collect();
    by_type.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    println!("Title types:");
    for (title_type, count) in by_type {
        println!("  - {}: {}", title_type, count);
    }

    println!("Most common genres:");
    for (genre, count) in stats.top_genres(top_genres) {
        println!("  - {}: {}", genre, count);
    }
}

/// Helper function to print a report the way a user reads it
fn print_report(report: &RecommendationReport) {
    if report.is_empty() {
        println!("{}", report.message().yellow());
    } else {
        println!("{}", "Movie recommendations:".bold().blue());
        for (rank, record) in report.recommendations.iter().enumerate() {
            print!("{} {}", format!("{}.", rank + 1).green(), format_recommendation(record));
        }
    }

    println!(
        "Time to find your results: {:.2} seconds",
        report.elapsed.as_secs_f64()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_json_is_only_the_array() {
        let records = vec![
            TitleRecord::new("tt1", "Drama", "Jane Roe", "movie", Some(7.0)),
            TitleRecord::new("tt2", "Comedy", "", "tvSeries", None),
        ];
        let mut out = Vec::new();

        write_json(&mut out, &records).unwrap();

        let parsed: Vec<TitleRecord> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, records);
        assert!(out.starts_with(b"["));
        assert!(out.ends_with(b"]\n"));
    }

    #[test]
    fn test_write_json_empty() {
        let mut out = Vec::new();
        write_json(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }
}
