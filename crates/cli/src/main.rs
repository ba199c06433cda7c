use anyhow::{Context, Result};
use catalog::{CatalogStore, Reel};
use clap::{Parser, Subcommand};
use colored::Colorize;
use session::{compact_count, download_action, DownloadAction, SearchSession, SearchState};
use std::sync::Arc;
use std::time::Instant;

/// Reel Reveal - browsable reel gallery engine
#[derive(Parser)]
#[command(name = "reel-reveal")]
#[command(about = "Search and browse a catalog of short vertical videos", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the full catalog (the empty search)
    Browse {
        /// Emit the result set as JSON instead of the formatted view
        #[arg(long)]
        json: bool,
    },

    /// Search reels by username or caption substring
    Search {
        /// Free-form query (case-insensitive substring match)
        query: String,

        /// Emit the result set as JSON instead of the formatted view
        #[arg(long)]
        json: bool,
    },

    /// Show a single reel with its player affordances
    Show {
        /// Reel id to display
        #[arg(long)]
        id: String,
    },

    /// Run concurrent searches and report latency percentiles
    Benchmark {
        /// Number of search requests to issue
        #[arg(long, default_value = "50")]
        requests: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let store = CatalogStore::with_sample_data().context("Failed to build the reel catalog")?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Browse { json } => handle_search(store, "", json).await?,
        Commands::Search { query, json } => handle_search(store, &query, json).await?,
        Commands::Show { id } => handle_show(store, &id).await?,
        Commands::Benchmark { requests } => handle_benchmark(store, requests).await?,
    }

    Ok(())
}

/// Handle the 'browse' and 'search' commands (browse is the empty search)
async fn handle_search(store: CatalogStore, query: &str, json: bool) -> Result<()> {
    let session = SearchSession::new(store);
    session.search(query).await;

    let view = session.view();
    match &view.state {
        SearchState::Results(results) => {
            if json {
                println!("{}", serde_json::to_string_pretty(results)?);
                return Ok(());
            }
            if query.is_empty() {
                println!("{}", "All reels:".bold().blue());
            } else {
                println!("{}", format!("Search results for '{query}':").bold().blue());
            }
            for (i, reel) in results.iter().enumerate() {
                print_reel_line(i + 1, reel);
            }
            if !view.recommendations.is_empty() {
                println!();
                println!("{}", "Recommended for you:".bold().magenta());
                for (i, reel) in view.recommendations.iter().enumerate() {
                    print_reel_line(i + 1, reel);
                }
            }
        }
        SearchState::Empty => {
            // The "no results" branch, distinct from the default prompt
            println!("{}", "No reels found".bold());
            println!("Try a different search term or browse all reels");
        }
        SearchState::Idle | SearchState::Loading => {
            unreachable!("search resolved, session cannot still be idle or loading")
        }
    }

    Ok(())
}

/// Handle the 'show' command
async fn handle_show(store: CatalogStore, id: &str) -> Result<()> {
    let Some(reel) = store.get_reel_by_id(id).await else {
        println!("{}", format!("No reel with id '{id}'").bold());
        return Ok(());
    };

    println!("{}", format!("Reel {}", reel.id).bold().blue());
    println!("{}@{}", "• ".green(), reel.username);
    println!("{}{}", "• ".green(), reel.caption);
    println!(
        "{}{} likes, {} views",
        "• ".cyan(),
        compact_count(reel.likes),
        compact_count(reel.views)
    );

    match &reel.source {
        catalog::ReelSource::Local { video_url } => {
            println!("{}Video: {}", "• ".cyan(), video_url);
        }
        catalog::ReelSource::Instagram {
            instagram_url,
            instagram_id,
        } => {
            println!("{}Instagram post: {}", "• ".cyan(), instagram_url);
            println!("{}Embed: {}", "• ".cyan(), embed::embed_url(instagram_id));
        }
    }

    match download_action(&reel) {
        DownloadAction::Save { file_name, .. } => {
            println!("{}Download: saves as {}", "• ".yellow(), file_name);
        }
        DownloadAction::Refused { notice } => {
            println!("{}Download: {}", "• ".yellow(), notice);
        }
    }

    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(store: CatalogStore, requests: usize) -> Result<()> {
    let store = Arc::new(store);

    // Sample queries that exercise the match, no-match, and full-catalog paths
    let pool = ["", "fitness", "travel", "coffee", "sketch", "zzz"];
    let queries: Vec<&str> = (0..requests)
        .map(|_| pool[rand::random::<u32>() as usize % pool.len()])
        .collect();

    let start = Instant::now();
    let mut handles = vec![];
    for query in queries {
        let store = store.clone();
        let handle = tokio::spawn(async move {
            let start = Instant::now();
            let results = store.search_reels(query).await;
            (start.elapsed(), results.len())
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings = vec![];
    for handle in handles {
        let (elapsed, _) = handle.await?;
        timings.push(elapsed);
    }

    let total_time = start.elapsed();
    let avg_latency = timings.iter().sum::<std::time::Duration>() / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[((timings.len() as f32 * 0.95) as usize).min(timings.len() - 1)];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("Benchmark results:");
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Helper to print one reel as a list row
fn print_reel_line(rank: usize, reel: &Reel) {
    let marker = if reel.is_instagram() { " [IG]" } else { "" };
    println!(
        "{}. @{}{} - {} ({} likes, {} views)",
        rank.to_string().green(),
        reel.username,
        marker.magenta(),
        reel.caption,
        compact_count(reel.likes),
        compact_count(reel.views)
    );
}
