use crate::modules::time_entries::core::aggregation::{MonthlyHours, monthly_hours};
use crate::modules::time_entries::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::entry_store::EntryStore;
use std::sync::Arc;

pub struct ReportMonthlyHoursHandler<TStore>
where
    TStore: EntryStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ReportMonthlyHoursHandler<TStore>
where
    TStore: EntryStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<MonthlyHours, ApplicationError> {
        let entries = self.store.load().await?;
        Ok(monthly_hours(&entries))
    }
}
