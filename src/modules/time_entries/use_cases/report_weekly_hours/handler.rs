use crate::modules::time_entries::core::aggregation::{WeeklyHours, weekly_hours};
use crate::modules::time_entries::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::entry_store::EntryStore;
use std::sync::Arc;

pub struct ReportWeeklyHoursHandler<TStore>
where
    TStore: EntryStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ReportWeeklyHoursHandler<TStore>
where
    TStore: EntryStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<WeeklyHours, ApplicationError> {
        let entries = self.store.load().await?;
        Ok(weekly_hours(&entries))
    }
}
