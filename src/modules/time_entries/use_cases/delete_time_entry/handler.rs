use crate::modules::time_entries::core::entry::{TimeEntry, position_of};
use crate::modules::time_entries::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::entry_store::EntryStore;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct DeleteTimeEntryHandler<TStore>
where
    TStore: EntryStore + ?Sized + 'static,
{
    store: Arc<TStore>,
    write_lock: Arc<Mutex<()>>,
}

impl<TStore> DeleteTimeEntryHandler<TStore>
where
    TStore: EntryStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>, write_lock: Arc<Mutex<()>>) -> Self {
        Self { store, write_lock }
    }

    pub async fn handle(&self, id: i64) -> Result<TimeEntry, ApplicationError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.store.load().await?;
        let index = position_of(&entries, id).ok_or(ApplicationError::NotFound(id))?;

        let removed = entries.remove(index);
        self.store.save(&entries).await?;

        tracing::info!(id, "time entry deleted");
        Ok(removed)
    }
}
