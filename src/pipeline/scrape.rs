// src/pipeline/scrape.rs

//! Paper scraping pipeline.

use std::sync::Arc;

use chrono::Utc;

use crate::error::Result;
use crate::models::{Config, PaperOutput};
use crate::services::PaperScraper;
use crate::storage::{PaperStore, Snapshot, WriteMetadata};

/// Run the scrape pipeline: fetch, classify, stamp and persist.
pub async fn run_scrape(config: Arc<Config>, storage: &dyn PaperStore) -> Result<WriteMetadata> {
    log::info!("Scraping papers from {}", config.source.papers_url);

    let scraper = PaperScraper::new(Arc::clone(&config))?;
    let outcome = scraper.scrape().await?;

    log::info!(
        "Classified {} of {} listings ({} blank, {} parse failures)",
        outcome.papers.len(),
        outcome.listing_total,
        outcome.blank_skipped,
        outcome.parse_failures
    );

    let scraped_at = Utc::now();
    let papers: Vec<PaperOutput> = outcome
        .papers
        .into_iter()
        .map(|paper| PaperOutput::stamped(paper, scraped_at))
        .collect();

    let metadata = storage.write_snapshot(&Snapshot::new(papers)).await?;

    log::info!(
        "Snapshot written to {} ({} papers)",
        metadata.location,
        metadata.paper_count
    );

    Ok(metadata)
}
