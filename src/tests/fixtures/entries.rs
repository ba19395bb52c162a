// Shared test fixture for time entries.
// Starts from the JSON document next to this file and lets tests override fields.

use crate::modules::time_entries::core::entry::{TimeEntry, assign_id};
use serde_json::Value;

const TIME_ENTRY_JSON: &str = include_str!("json/time_entry.json");

pub struct TimeEntryBuilder {
    inner: TimeEntry,
}

impl Default for TimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TimeEntryBuilder {
    pub fn new() -> Self {
        let inner: TimeEntry = serde_json::from_str(TIME_ENTRY_JSON).unwrap();
        Self { inner }
    }

    pub fn id(mut self, v: i64) -> Self {
        self.inner = assign_id(self.inner, v);
        self
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.insert("date".into(), Value::String(v.into()));
        self
    }

    pub fn project(mut self, v: impl Into<String>) -> Self {
        self.inner.insert("project".into(), Value::String(v.into()));
        self
    }

    pub fn hours(mut self, v: Value) -> Self {
        self.inner.insert("hours".into(), v);
        self
    }

    pub fn field(mut self, name: impl Into<String>, v: Value) -> Self {
        self.inner.insert(name.into(), v);
        self
    }

    pub fn build(self) -> TimeEntry {
        self.inner
    }

    pub fn build_value(self) -> Value {
        Value::Object(self.inner)
    }
}

#[cfg(test)]
mod time_entry_builder_tests {
    use super::*;
    use crate::modules::time_entries::core::entry::entry_id;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = TimeEntryBuilder::default().build();
        assert_eq!(built.get("date"), Some(&json!("2024-01-15")));
        assert_eq!(built.get("project"), Some(&json!("Alpha")));
        assert_eq!(built.get("hours"), Some(&json!(5)));
        assert_eq!(entry_id(&built), None);
    }

    #[rstest]
    fn setters_override_fields() {
        let built = TimeEntryBuilder::new()
            .id(4)
            .date("2024-06-30")
            .project("Beta")
            .hours(json!("1.25"))
            .field("billable", json!(true))
            .build_value();
        assert_eq!(
            built,
            json!({
                "id": 4,
                "date": "2024-06-30",
                "project": "Beta",
                "hours": "1.25",
                "billable": true
            })
        );
    }
}
