// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use scraper::Html;

use crate::error::Result;
use crate::models::ScraperConfig;

/// Create a configured HTTP client.
pub fn create_client(config: &ScraperConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch a page and parse it as HTML.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<Html> {
    let text = client.get(url).send().await?.text().await?;
    Ok(Html::parse_document(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_with_defaults() {
        assert!(create_client(&ScraperConfig::default()).is_ok());
    }
}
