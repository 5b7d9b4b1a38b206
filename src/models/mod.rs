// src/models/mod.rs

//! Domain models for the scraper application.

mod config;
mod listing;
mod paper;

// Re-export all public types
pub use config::{Config, ScraperConfig, SourceConfig};
pub use listing::RawListing;
pub use paper::{PaperOutput, PaperRecord};

/// Summary of a scrape run.
#[derive(Debug, Default)]
pub struct ScrapeOutcome {
    /// Successfully classified papers
    pub papers: Vec<PaperRecord>,

    /// Total anchors found on the source page
    pub listing_total: usize,

    /// Listings skipped because text or href was blank
    pub blank_skipped: usize,

    /// Listings dropped because classification failed
    pub parse_failures: usize,
}
