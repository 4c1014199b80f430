use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use photo_search::{logging, Config, PhotoSearchStore, SearchState};

#[derive(Debug, Parser)]
#[command(name = "photo-search", version, about = "Search and page through Unsplash photos")]
struct Cli {
    /// Config file (defaults to ~/.config/photo-search/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Access key, overriding the config file and environment
    #[arg(long, global = true)]
    access_key: Option<String>,

    /// Print photos as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search photos, optionally loading further pages
    Search {
        query: String,
        /// Number of pages to load
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,
    },
    /// Fetch a batch of random photos
    Random,
    /// Reset to a query (or the configured default) and fetch page 1
    Reset { query: Option<String> },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if let Some(key) = cli.access_key.clone() {
        config.api.access_key = Some(key);
    }

    let store = PhotoSearchStore::from_config(&config).context("Failed to build HTTP client")?;
    let state = run(&store, &cli.command).await;

    print_photos(&state, cli.json)?;

    if let Some(err) = &state.last_error {
        anyhow::bail!("Fetch failed: {}", err);
    }
    Ok(())
}

async fn run(store: &PhotoSearchStore, command: &Command) -> SearchState {
    match command {
        Command::Search { query, pages } => {
            store.fetch_photos(query, 1).await;
            for _ in 1..*pages {
                if store.snapshot().last_error.is_some() {
                    break;
                }
                store.load_more_photos().await;
            }
            store.snapshot()
        }
        Command::Random => {
            store.fetch_photos("", 1).await;
            store.snapshot()
        }
        Command::Reset { query } => {
            // Detached; settled() observes the outcome
            let _fetch = match query {
                Some(query) => store.reset_search(query),
                None => store.reset_to_default(),
            };
            store.settled().await
        }
    }
}

fn print_photos(state: &SearchState, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&state.photos)?);
        return Ok(());
    }

    for photo in &state.photos {
        println!(
            "{}\t{}\t{}\t{}",
            photo.id,
            photo.alt_text(),
            photo.user.name,
            photo.urls.regular
        );
    }
    Ok(())
}
