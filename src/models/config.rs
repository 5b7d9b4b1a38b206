//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP fetching behavior settings
    #[serde(default)]
    pub scraper: ScraperConfig,

    /// Source page settings
    #[serde(default)]
    pub source: SourceConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.scraper.user_agent.trim().is_empty() {
            return Err(AppError::validation("scraper.user_agent is empty"));
        }
        if self.scraper.timeout_secs == 0 {
            return Err(AppError::validation("scraper.timeout_secs must be > 0"));
        }
        if self.source.link_selector.trim().is_empty() {
            return Err(AppError::validation("source.link_selector is empty"));
        }

        // Both URLs must be absolute
        url::Url::parse(&self.source.base_url)?;
        url::Url::parse(&self.source.papers_url)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scraper: ScraperConfig::default(),
            source: SourceConfig::default(),
        }
    }
}

/// HTTP client behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Source page settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base origin used to absolutize relative hrefs
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// URL of the past-paper listing page
    #[serde(default = "defaults::papers_url")]
    pub papers_url: String,

    /// CSS selector for the paper anchors on the listing page
    #[serde(default = "defaults::link_selector")]
    pub link_selector: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            papers_url: defaults::papers_url(),
            link_selector: defaults::link_selector(),
        }
    }
}

mod defaults {
    // Scraper defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; gseb-papers/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Source defaults
    pub fn base_url() -> String {
        "https://www.gsebeservice.com".into()
    }
    pub fn papers_url() -> String {
        "https://www.gsebeservice.com/Web/quePaper".into()
    }
    pub fn link_selector() -> String {
        "div.form-group.quepaper a".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.scraper.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.scraper.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_relative_base_url() {
        let mut config = Config::default();
        config.source.base_url = "/Web".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [scraper]
            timeout_secs = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.scraper.timeout_secs, 5);
        assert_eq!(config.source.base_url, "https://www.gsebeservice.com");
        assert_eq!(config.source.link_selector, "div.form-group.quepaper a");
    }
}
