// Storage port for the persisted list of time entries.
//
// Responsibilities
// - Load the whole collection at once and save it back at once.
// - Keep use case handlers independent of where the list actually lives.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::time_entries::core::entry::TimeEntry;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not serialize entries: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn load(&self) -> Result<Vec<TimeEntry>, StoreError>;
    async fn save(&self, entries: &[TimeEntry]) -> Result<(), StoreError>;
}

pub mod in_memory;
pub mod json_file;
