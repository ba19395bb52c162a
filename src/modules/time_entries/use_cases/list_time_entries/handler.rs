use crate::modules::time_entries::core::entry::TimeEntry;
use crate::modules::time_entries::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::entry_store::EntryStore;
use std::sync::Arc;

pub struct ListTimeEntriesHandler<TStore>
where
    TStore: EntryStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListTimeEntriesHandler<TStore>
where
    TStore: EntryStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// All stored entries in insertion order, unreadable ones included.
    pub async fn handle(&self) -> Result<Vec<TimeEntry>, ApplicationError> {
        Ok(self.store.load().await?)
    }
}
