//! Paper record data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A classified past-paper entry.
///
/// Every field is always populated: missing year/month/board are empty
/// strings, an unresolved subject is `"Unknown"` and grade defaults to
/// `"10"`. Records are value objects, built once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaperRecord {
    /// Cleaned label (ordinal prefix stripped)
    pub title: String,

    /// Absolute URL to the paper
    pub url: String,

    /// Four-digit year, or empty if none was found
    pub year: String,

    /// Month name or abbreviation as matched, or empty
    pub month: String,

    /// Canonical board name (Gujarat, English, Hindi), or empty
    pub board: String,

    /// Normalized subject name, `"Unknown"` when unresolved
    pub subject: String,

    /// Grade digits, defaults to `"10"`
    pub grade: String,
}

/// A paper record as written to snapshots and printed by the CLI.
///
/// Serializes with the camelCase field names the downstream consumers
/// expect: `title, url, year, month, board, subject, grade, scrapedAt`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaperOutput {
    #[serde(flatten)]
    pub record: PaperRecord,

    /// When the record was scraped. Stamped by the pipeline, not the
    /// classifier.
    #[serde(rename = "scrapedAt")]
    pub scraped_at: DateTime<Utc>,
}

impl PaperOutput {
    /// Wrap a record with its scrape timestamp.
    pub fn stamped(record: PaperRecord, scraped_at: DateTime<Utc>) -> Self {
        Self { record, scraped_at }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> PaperRecord {
        PaperRecord {
            title: "Maths Paper (March 2021)".to_string(),
            url: "https://www.gsebeservice.com/Web/paper.pdf".to_string(),
            year: "2021".to_string(),
            month: "Mar".to_string(),
            board: "Gujarat".to_string(),
            subject: "Mathematics".to_string(),
            grade: "10".to_string(),
        }
    }

    #[test]
    fn test_output_serializes_camel_case() {
        let output = PaperOutput::stamped(sample_record(), Utc::now());
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["title"], "Maths Paper (March 2021)");
        assert_eq!(json["subject"], "Mathematics");
        assert!(json.get("scrapedAt").is_some());
        assert!(json.get("scraped_at").is_none());
    }

    #[test]
    fn test_output_round_trip() {
        let output = PaperOutput::stamped(sample_record(), Utc::now());
        let json = serde_json::to_string(&output).unwrap();
        let back: PaperOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, output);
    }
}
