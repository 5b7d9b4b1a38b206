// src/services/scraper.rs

//! Paper scraper service.
//!
//! Fetches the past-paper listing page and classifies every anchor found
//! inside the configured container.

use std::sync::Arc;

use reqwest::Client;
use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{Config, RawListing, ScrapeOutcome};
use crate::services::PaperClassifier;
use crate::utils::http;

/// Service for scraping past papers from the source page.
pub struct PaperScraper {
    config: Arc<Config>,
    client: Client,
}

impl PaperScraper {
    /// Create a new scraper with the given configuration.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let client = http::create_client(&config.scraper)?;
        Ok(Self { config, client })
    }

    /// Fetch the listing page and return every anchor as a raw listing.
    pub async fn fetch_listings(&self) -> Result<Vec<RawListing>> {
        let document = http::fetch_page(&self.client, &self.config.source.papers_url).await?;
        let link_sel = Self::parse_selector(&self.config.source.link_selector)?;
        Ok(collect_listings(&document, &link_sel))
    }

    /// Fetch and classify all listings.
    ///
    /// Blank listings are skipped and listings that fail classification are
    /// dropped with a warning; neither aborts the batch.
    pub async fn scrape(&self) -> Result<ScrapeOutcome> {
        let listings = self.fetch_listings().await?;
        log::info!(
            "Found {} links at {}",
            listings.len(),
            self.config.source.papers_url
        );

        let classifier = PaperClassifier::new(self.config.source.base_url.clone());
        let mut outcome = ScrapeOutcome {
            listing_total: listings.len(),
            ..ScrapeOutcome::default()
        };

        for listing in &listings {
            if listing.is_blank() {
                outcome.blank_skipped += 1;
                continue;
            }

            match classifier.classify_listing(listing) {
                Ok(paper) => {
                    log::debug!(
                        "Classified '{}': year='{}' subject='{}' board='{}'",
                        paper.title,
                        paper.year,
                        paper.subject,
                        paper.board
                    );
                    outcome.papers.push(paper);
                }
                Err(error) => {
                    outcome.parse_failures += 1;
                    log::warn!("Failed to classify listing '{}': {}", listing.text, error);
                }
            }
        }

        Ok(outcome)
    }

    fn parse_selector(s: &str) -> Result<Selector> {
        Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
    }
}

/// Extract `(text, href)` pairs from the anchors a selector matches.
fn collect_listings(document: &Html, link_sel: &Selector) -> Vec<RawListing> {
    document
        .select(link_sel)
        .map(|anchor| {
            let text: String = anchor.text().collect();
            let href = anchor.value().attr("href").unwrap_or("");
            RawListing::new(text.trim(), href)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
            <div class="form-group quepaper">
                <a href="/Web/m2020.pdf">1) 10th ENG MED Mathematics (March 2020)</a>
                <a href="https://other.com/g.pdf">2) Gujarati (2021)</a>
                <a href="/Web/blank.pdf">   </a>
            </div>
            <div class="other"><a href="/nope.pdf">Unrelated</a></div>
        </body></html>
    "#;

    #[test]
    fn test_parse_selector_valid() {
        assert!(PaperScraper::parse_selector("div.quepaper a").is_ok());
    }

    #[test]
    fn test_parse_selector_invalid() {
        assert!(PaperScraper::parse_selector("[[invalid").is_err());
    }

    #[test]
    fn test_collect_listings_scopes_to_container() {
        let document = Html::parse_document(PAGE);
        let sel = PaperScraper::parse_selector("div.form-group.quepaper a").unwrap();
        let listings = collect_listings(&document, &sel);

        assert_eq!(listings.len(), 3);
        assert_eq!(
            listings[0],
            RawListing::new("1) 10th ENG MED Mathematics (March 2020)", "/Web/m2020.pdf")
        );
        assert_eq!(listings[1].href, "https://other.com/g.pdf");
        assert!(listings[2].is_blank());
    }

    #[test]
    fn test_collect_listings_missing_href_is_blank() {
        let document = Html::parse_document(r#"<div class="p"><a>No link</a></div>"#);
        let sel = PaperScraper::parse_selector("div.p a").unwrap();
        let listings = collect_listings(&document, &sel);

        assert_eq!(listings.len(), 1);
        assert!(listings[0].is_blank());
    }
}
