//! gseb-papers CLI
//!
//! Local execution entry point for scraping and searching GSEB past papers.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use gseb_papers::{
    error::{AppError, Result},
    models::Config,
    pipeline,
    services::SearchFilter,
    storage::{LocalStorage, PaperStore},
};

/// gseb-papers - GSEB Past-Paper Scraper
#[derive(Parser, Debug)]
#[command(
    name = "gseb-papers",
    version,
    about = "Scrapes and classifies GSEB past exam question papers"
)]
struct Cli {
    /// Path to storage directory containing config files
    #[arg(short, long, default_value = "storage")]
    storage_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape the source page and write a classified snapshot
    Scrape,

    /// Search the latest snapshot
    Search {
        /// Substring to match against subject or title
        #[arg(short, long)]
        keyword: Option<String>,

        /// Exact year to match
        #[arg(short, long)]
        year: Option<String>,

        /// Substring to match against the board name
        #[arg(short, long)]
        board: Option<String>,
    },

    /// Validate configuration files
    Validate,

    /// Show current snapshot info
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.storage_dir.join("config.toml");
    let config = Arc::new(Config::load_or_default(&config_path));
    let storage = LocalStorage::new(&cli.storage_dir);

    match cli.command {
        Command::Scrape => {
            pipeline::run_scrape(Arc::clone(&config), &storage).await?;
            log::info!("Scrape complete!");
        }

        Command::Search {
            keyword,
            year,
            board,
        } => {
            let Some(snapshot) = storage.load_snapshot().await? else {
                log::error!(
                    "No snapshot found in {}. Run 'scrape' first.",
                    cli.storage_dir.display()
                );
                return Err(AppError::config("Snapshot not found"));
            };

            let filter = SearchFilter {
                keyword,
                year,
                board,
            };
            let results: Vec<_> = snapshot
                .papers
                .into_iter()
                .filter(|paper| filter.matches(&paper.record))
                .collect();

            log::info!("{} of {} papers match", results.len(), snapshot.count);
            println!("{}", serde_json::to_string_pretty(&results)?);
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }

            log::info!("All validations passed!");
        }

        Command::Info => {
            log::info!("Storage directory: {}", cli.storage_dir.display());

            match storage.load_snapshot().await? {
                Some(snapshot) => {
                    log::info!("Snapshot: {} papers", snapshot.count);
                    log::info!("Last updated: {}", snapshot.updated_at);
                }
                None => log::info!("No snapshot found yet."),
            }
        }
    }

    Ok(())
}
