//! Storage abstractions for paper snapshot persistence.
//!
//! A scrape run produces one snapshot (`papers.json`) holding every
//! classified record with its scrape timestamp. Snapshots are replaced
//! wholesale on each run; the source page is small enough that there is
//! nothing to partition or archive.

pub mod local;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::PaperOutput;

// Re-export for convenience
pub use local::LocalStorage;

/// Metadata about a snapshot write.
#[derive(Debug, Clone)]
pub struct WriteMetadata {
    /// Number of papers written
    pub paper_count: usize,
    /// Where the snapshot landed
    pub location: String,
    /// Timestamp of the write
    pub timestamp: DateTime<Utc>,
}

/// Snapshot file header plus the paper list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// ISO 8601 timestamp of last update
    pub updated_at: DateTime<Utc>,
    /// Total paper count
    pub count: usize,
    /// The papers array
    pub papers: Vec<PaperOutput>,
}

impl Snapshot {
    pub fn new(papers: Vec<PaperOutput>) -> Self {
        Self {
            updated_at: Utc::now(),
            count: papers.len(),
            papers,
        }
    }
}

/// Trait for paper snapshot storage backends.
#[async_trait]
pub trait PaperStore: Send + Sync {
    /// Persist a snapshot, replacing any previous one.
    async fn write_snapshot(&self, snapshot: &Snapshot) -> Result<WriteMetadata>;

    /// Load the latest snapshot, or None if none exists yet.
    async fn load_snapshot(&self) -> Result<Option<Snapshot>>;
}
