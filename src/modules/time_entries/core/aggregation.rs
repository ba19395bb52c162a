//! Hour totals derived from the stored entries.
//!
//! Entries whose `date` or `hours` cannot be read are left out of every report;
//! they are logged and otherwise ignored.

use chrono::Datelike;
use std::collections::BTreeMap;

use crate::modules::time_entries::core::entry::{LoggedWork, TimeEntry, parse_logged_work};

/// Hours per `"{year}-{month}"`, month not zero padded.
pub type MonthlyHours = BTreeMap<String, f64>;

/// Hours per month number, then per `"week{n}"` slice of that month.
/// Months with the same number in different years share a bucket.
pub type WeeklyHours = BTreeMap<u32, BTreeMap<String, f64>>;

fn readable_work(entries: &[TimeEntry]) -> impl Iterator<Item = LoggedWork> + '_ {
    entries
        .iter()
        .filter_map(|entry| match parse_logged_work(entry) {
            Ok(work) => Some(work),
            Err(reason) => {
                tracing::warn!(?entry, %reason, "skipping entry in hours report");
                None
            }
        })
}

pub fn monthly_key(work: &LoggedWork) -> String {
    format!("{}-{}", work.date.year(), work.date.month())
}

/// Days 1-7 are week 1, 8-14 week 2 and so on.
pub fn week_of_month(work: &LoggedWork) -> u32 {
    (work.date.day() - 1) / 7 + 1
}

pub fn monthly_hours(entries: &[TimeEntry]) -> MonthlyHours {
    let mut monthly = MonthlyHours::new();
    for work in readable_work(entries) {
        *monthly.entry(monthly_key(&work)).or_insert(0.0) += work.hours;
    }
    monthly
}

pub fn weekly_hours(entries: &[TimeEntry]) -> WeeklyHours {
    let mut weekly = WeeklyHours::new();
    for work in readable_work(entries) {
        let week_key = format!("week{}", week_of_month(&work));
        *weekly
            .entry(work.date.month())
            .or_default()
            .entry(week_key)
            .or_insert(0.0) += work.hours;
    }
    weekly
}
