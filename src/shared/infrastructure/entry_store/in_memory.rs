// In memory implementation of the EntryStore port.
//
// Purpose
// - Support handler tests and local development without touching the disk.

use crate::modules::time_entries::core::entry::TimeEntry;
use crate::shared::infrastructure::entry_store::{EntryStore, StoreError};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryEntryStore {
    entries: RwLock<Vec<TimeEntry>>,
    is_offline: bool,
}

impl InMemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<TimeEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl EntryStore for InMemoryEntryStore {
    async fn load(&self) -> Result<Vec<TimeEntry>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Entry store offline".into()));
        }
        Ok(self.entries.read().await.clone())
    }

    async fn save(&self, entries: &[TimeEntry]) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Entry store offline".into()));
        }
        *self.entries.write().await = entries.to_vec();
        Ok(())
    }
}
