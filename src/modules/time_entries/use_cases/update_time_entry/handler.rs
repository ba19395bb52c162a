use crate::modules::time_entries::core::entry::{TimeEntry, assign_id, position_of, validate};
use crate::modules::time_entries::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::entry_store::EntryStore;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct UpdateTimeEntryHandler<TStore>
where
    TStore: EntryStore + ?Sized + 'static,
{
    store: Arc<TStore>,
    write_lock: Arc<Mutex<()>>,
}

impl<TStore> UpdateTimeEntryHandler<TStore>
where
    TStore: EntryStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>, write_lock: Arc<Mutex<()>>) -> Self {
        Self { store, write_lock }
    }

    /// Replaces the first entry with `id` by `body`. Fields absent from the body
    /// are dropped and the path id wins over any id in the body.
    pub async fn handle(&self, id: i64, body: Value) -> Result<TimeEntry, ApplicationError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.store.load().await?;
        let index = position_of(&entries, id).ok_or(ApplicationError::NotFound(id))?;

        let entry = assign_id(validate(body)?, id);
        entries[index] = entry.clone();
        self.store.save(&entries).await?;

        tracing::info!(id, "time entry updated");
        Ok(entry)
    }
}
