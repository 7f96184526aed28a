use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// One normalized (employee, date, task) observation.
///
/// Built once by the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskRecord {
    pub employee: String,
    pub location: String,
    /// Date label exactly as it appears in the sheet.
    pub date: String,
    /// Parsed `date`; `None` when the label does not follow the expected grammar.
    pub date_obj: Option<NaiveDate>,
    pub attendance: Option<String>,
    pub activity_category: Option<String>,
    pub task_priority: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub work_minutes: f64,
    pub description: String,
    pub is_billable: bool,
}

impl TaskRecord {
    /// Full month name, e.g. "November".
    pub fn month(&self) -> Option<String> {
        self.date_obj.map(|d| d.format("%B").to_string())
    }

    /// ISO week number.
    pub fn week(&self) -> Option<u32> {
        self.date_obj.map(|d| d.iso_week().week())
    }

    /// Full weekday name, e.g. "Saturday".
    pub fn day_of_week(&self) -> Option<String> {
        self.date_obj.map(|d| d.format("%A").to_string())
    }

    pub fn category_str(&self) -> &str {
        self.activity_category.as_deref().unwrap_or("")
    }
}
