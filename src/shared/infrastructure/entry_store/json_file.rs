// File backed implementation of the EntryStore port.
//
// The whole collection lives in one pretty printed JSON array. Reads are lenient:
// a missing, empty or corrupt file is served as an empty collection.

use crate::modules::time_entries::core::entry::TimeEntry;
use crate::shared::infrastructure::entry_store::{EntryStore, StoreError};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct JsonFileEntryStore {
    path: PathBuf,
}

impl JsonFileEntryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the data file holding an empty array when it does not exist yet.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }
        tracing::info!(path = %self.path.display(), "creating empty entry file");
        tokio::fs::write(&self.path, b"[]").await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl EntryStore for JsonFileEntryStore {
    async fn load(&self) -> Result<Vec<TimeEntry>, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "entry file absent");
                return Ok(Vec::new());
            }
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                tracing::warn!(path = %self.path.display(), error = %err, "entry file is not utf-8, serving empty list");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %self.path.display(), "entry file empty");
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Vec<Value>>(&content) {
            Ok(items) => {
                let entries: Vec<TimeEntry> = items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::Object(entry) => Some(entry),
                        other => {
                            tracing::warn!(item = %other, "dropping stored item that is not an object");
                            None
                        }
                    })
                    .collect();
                tracing::debug!(count = entries.len(), "loaded entries");
                Ok(entries)
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "entry file is malformed, serving empty list");
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, entries: &[TimeEntry]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(entries)?;
        tokio::fs::write(&self.path, bytes).await?;
        tracing::debug!(count = entries.len(), "saved entries");
        Ok(())
    }
}
