//! Local filesystem storage implementation.
//!
//! ## Storage Layout
//!
//! ```text
//! {root}/
//! ├── config.toml           # Scraper configuration
//! └── papers.json           # Latest classified snapshot
//! ```

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::storage::{PaperStore, Snapshot, WriteMetadata};

const SNAPSHOT_KEY: &str = "papers.json";

/// Local filesystem storage backend.
#[derive(Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Get the full path for a relative key.
    fn path(&self, key: &str) -> PathBuf {
        self.root_dir.join(key)
    }

    /// Ensure parent directory exists.
    async fn ensure_dir(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path(key);
        self.ensure_dir(&path).await?;

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    /// Write JSON data.
    async fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.write_bytes(key, &bytes).await
    }

    /// Read bytes, returning None if file doesn't exist.
    async fn read_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    /// Read JSON data.
    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.read_bytes(key).await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl PaperStore for LocalStorage {
    async fn write_snapshot(&self, snapshot: &Snapshot) -> Result<WriteMetadata> {
        self.write_json(SNAPSHOT_KEY, snapshot).await?;
        log::info!(
            "Snapshot: {} papers written to {}",
            snapshot.count,
            self.path(SNAPSHOT_KEY).display()
        );

        Ok(WriteMetadata {
            paper_count: snapshot.count,
            location: self.path(SNAPSHOT_KEY).display().to_string(),
            timestamp: Utc::now(),
        })
    }

    async fn load_snapshot(&self) -> Result<Option<Snapshot>> {
        self.read_json(SNAPSHOT_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PaperOutput, PaperRecord};

    fn sample_output() -> PaperOutput {
        PaperOutput::stamped(
            PaperRecord {
                title: "10th Guj MED Science (2021)".to_string(),
                url: "https://www.gsebeservice.com/Web/s.pdf".to_string(),
                year: "2021".to_string(),
                month: String::new(),
                board: "Gujarat".to_string(),
                subject: "Science".to_string(),
                grade: "10".to_string(),
            },
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_snapshot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());

        let snapshot = Snapshot::new(vec![sample_output()]);
        let meta = storage.write_snapshot(&snapshot).await.unwrap();
        assert_eq!(meta.paper_count, 1);

        let loaded = storage.load_snapshot().await.unwrap().unwrap();
        assert_eq!(loaded.count, 1);
        assert_eq!(loaded.papers, snapshot.papers);
    }

    #[tokio::test]
    async fn test_load_missing_snapshot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());
        assert!(storage.load_snapshot().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_replaces_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());

        let first = Snapshot::new(vec![sample_output(), sample_output()]);
        storage.write_snapshot(&first).await.unwrap();

        let second = Snapshot::new(vec![sample_output()]);
        storage.write_snapshot(&second).await.unwrap();

        let loaded = storage.load_snapshot().await.unwrap().unwrap();
        assert_eq!(loaded.count, 1);
    }

    #[tokio::test]
    async fn test_no_tmp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage
            .write_snapshot(&Snapshot::new(vec![sample_output()]))
            .await
            .unwrap();

        assert!(dir.path().join("papers.json").exists());
        assert!(!dir.path().join("papers.tmp").exists());
    }
}
