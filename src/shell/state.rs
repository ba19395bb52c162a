use crate::modules::time_entries::use_cases::create_time_entry::handler::CreateTimeEntryHandler;
use crate::modules::time_entries::use_cases::delete_time_entry::handler::DeleteTimeEntryHandler;
use crate::modules::time_entries::use_cases::list_time_entries::handler::ListTimeEntriesHandler;
use crate::modules::time_entries::use_cases::report_monthly_hours::handler::ReportMonthlyHoursHandler;
use crate::modules::time_entries::use_cases::report_weekly_hours::handler::ReportWeeklyHoursHandler;
use crate::modules::time_entries::use_cases::update_time_entry::handler::UpdateTimeEntryHandler;
use crate::shared::infrastructure::entry_store::EntryStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub create_handler: Arc<CreateTimeEntryHandler<dyn EntryStore>>,
    pub update_handler: Arc<UpdateTimeEntryHandler<dyn EntryStore>>,
    pub delete_handler: Arc<DeleteTimeEntryHandler<dyn EntryStore>>,
    pub list_handler: Arc<ListTimeEntriesHandler<dyn EntryStore>>,
    pub monthly_handler: Arc<ReportMonthlyHoursHandler<dyn EntryStore>>,
    pub weekly_handler: Arc<ReportWeeklyHoursHandler<dyn EntryStore>>,
}

impl AppState {
    /// Wires every use case against one store. Mutating handlers share a single
    /// writer lock so their load, modify and save cycles never interleave.
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        let write_lock = Arc::new(Mutex::new(()));
        Self {
            create_handler: Arc::new(CreateTimeEntryHandler::new(
                store.clone(),
                write_lock.clone(),
            )),
            update_handler: Arc::new(UpdateTimeEntryHandler::new(
                store.clone(),
                write_lock.clone(),
            )),
            delete_handler: Arc::new(DeleteTimeEntryHandler::new(store.clone(), write_lock)),
            list_handler: Arc::new(ListTimeEntriesHandler::new(store.clone())),
            monthly_handler: Arc::new(ReportMonthlyHoursHandler::new(store.clone())),
            weekly_handler: Arc::new(ReportWeeklyHoursHandler::new(store)),
        }
    }
}
