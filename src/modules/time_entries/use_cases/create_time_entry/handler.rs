use crate::modules::time_entries::core::entry::{TimeEntry, assign_id, validate};
use crate::modules::time_entries::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::entry_store::EntryStore;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct CreateTimeEntryHandler<TStore>
where
    TStore: EntryStore + ?Sized + 'static,
{
    store: Arc<TStore>,
    write_lock: Arc<Mutex<()>>,
}

impl<TStore> CreateTimeEntryHandler<TStore>
where
    TStore: EntryStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>, write_lock: Arc<Mutex<()>>) -> Self {
        Self { store, write_lock }
    }

    /// Appends the entry with id `collection length + 1`.
    ///
    /// The id is not derived from the highest stored id, so after a deletion from
    /// the middle of the list a new entry can share an id with an existing one.
    pub async fn handle(&self, body: Value) -> Result<TimeEntry, ApplicationError> {
        let entry = validate(body)?;

        let _guard = self.write_lock.lock().await;
        let mut entries = self.store.load().await?;
        let id = entries.len() as i64 + 1;
        let entry = assign_id(entry, id);
        entries.push(entry.clone());
        self.store.save(&entries).await?;

        tracing::info!(id, "time entry created");
        Ok(entry)
    }
}
