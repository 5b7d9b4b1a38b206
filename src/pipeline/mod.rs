//! Pipeline entry points for scraper operations.
//!
//! - `run_scrape`: Fetch, classify and persist the past-paper snapshot

pub mod scrape;

pub use scrape::run_scrape;
