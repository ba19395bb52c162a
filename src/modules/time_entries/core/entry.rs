//! A logged piece of work.
//!
//! Entries are kept as plain JSON objects so that any field a client sends along
//! with `date`, `project` and `hours` is stored and returned untouched.

use chrono::{Datelike, NaiveDate};
use serde_json::{Map, Value};

use crate::modules::time_entries::core::errors::EntryError;

pub type TimeEntry = Map<String, Value>;

pub const REQUIRED_FIELDS: [&str; 3] = ["date", "project", "hours"];
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The parts of an entry the reports work with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoggedWork {
    pub date: NaiveDate,
    pub hours: f64,
}

/// Hours may arrive as a number, a numeric string or a boolean.
pub fn parse_hours(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// A four digit year, then month and day of one or two digits each.
fn has_date_shape(text: &str) -> bool {
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    let mut parts = text.split('-');
    matches!(
        (parts.next(), parts.next(), parts.next(), parts.next()),
        (Some(year), Some(month), Some(day), None)
            if digits(year, 4, 4) && digits(month, 1, 2) && digits(day, 1, 2)
    )
}

pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    value
        .as_str()
        .filter(|text| has_date_shape(text))
        .and_then(|text| NaiveDate::parse_from_str(text, DATE_FORMAT).ok())
        .filter(|date| date.year() >= 1)
}

pub fn parse_logged_work(entry: &TimeEntry) -> Result<LoggedWork, EntryError> {
    let (Some(hours), Some(date)) = (entry.get("hours"), entry.get("date")) else {
        return Err(EntryError::MissingFields);
    };
    let hours = parse_hours(hours).ok_or(EntryError::InvalidFormat)?;
    let date = parse_date(date).ok_or(EntryError::InvalidFormat)?;
    Ok(LoggedWork { date, hours })
}

/// Checks a request body and turns it into an entry without an assigned id.
pub fn validate(body: Value) -> Result<TimeEntry, EntryError> {
    let Value::Object(entry) = body else {
        return Err(EntryError::MissingFields);
    };
    if !REQUIRED_FIELDS.iter().all(|field| entry.contains_key(*field)) {
        return Err(EntryError::MissingFields);
    }
    parse_logged_work(&entry)?;
    Ok(entry)
}

pub fn entry_id(entry: &TimeEntry) -> Option<i64> {
    let Value::Number(id) = entry.get("id")? else {
        return None;
    };
    id.as_i64().or_else(|| {
        id.as_f64()
            .filter(|value| value.fract() == 0.0)
            .map(|value| value as i64)
    })
}

pub fn assign_id(mut entry: TimeEntry, id: i64) -> TimeEntry {
    entry.insert("id".to_string(), Value::from(id));
    entry
}

/// Index of the first entry carrying `id`.
pub fn position_of(entries: &[TimeEntry], id: i64) -> Option<usize> {
    entries
        .iter()
        .position(|entry| entry_id(entry) == Some(id))
}
