// src/services/mod.rs

//! Services for scraping, classifying and searching past papers.

mod classifier;
mod scraper;
mod search;

pub use classifier::PaperClassifier;
pub use scraper::PaperScraper;
pub use search::SearchFilter;
