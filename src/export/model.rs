// src/export/model.rs

use crate::models::TaskRecord;
use serde::Serialize;

/// Flat export row of a task record, derived grouping fields included.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordExport {
    #[serde(rename = "Employee Name")]
    pub employee: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Date_Obj")]
    pub date_obj: Option<String>,
    #[serde(rename = "Attendance")]
    pub attendance: Option<String>,
    #[serde(rename = "Activity Category")]
    pub activity_category: Option<String>,
    #[serde(rename = "Task Priority")]
    pub task_priority: Option<String>,
    #[serde(rename = "Start Time")]
    pub start_time: Option<String>,
    #[serde(rename = "End Time")]
    pub end_time: Option<String>,
    #[serde(rename = "Work Time (Mins)")]
    pub work_minutes: f64,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Is_Billable")]
    pub is_billable: bool,
    #[serde(rename = "Month")]
    pub month: Option<String>,
    #[serde(rename = "Week")]
    pub week: Option<u32>,
    #[serde(rename = "DayOfWeek")]
    pub day_of_week: Option<String>,
}

impl From<&TaskRecord> for RecordExport {
    fn from(r: &TaskRecord) -> Self {
        Self {
            employee: r.employee.clone(),
            location: r.location.clone(),
            date: r.date.clone(),
            date_obj: r.date_obj.map(|d| d.format("%Y-%m-%d").to_string()),
            attendance: r.attendance.clone(),
            activity_category: r.activity_category.clone(),
            task_priority: r.task_priority.clone(),
            start_time: r.start_time.clone(),
            end_time: r.end_time.clone(),
            work_minutes: r.work_minutes,
            description: r.description.clone(),
            is_billable: r.is_billable,
            month: r.month(),
            week: r.week(),
            day_of_week: r.day_of_week(),
        }
    }
}

pub fn to_exports(records: &[TaskRecord]) -> Vec<RecordExport> {
    records.iter().map(RecordExport::from).collect()
}

/// Column headers for CSV / XLSX, same order as the serde fields.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "Employee Name",
        "Location",
        "Date",
        "Date_Obj",
        "Attendance",
        "Activity Category",
        "Task Priority",
        "Start Time",
        "End Time",
        "Work Time (Mins)",
        "Description",
        "Is_Billable",
        "Month",
        "Week",
        "DayOfWeek",
    ]
}

/// Row of display strings (absent values become "").
pub(crate) fn record_to_row(e: &RecordExport) -> Vec<String> {
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();
    vec![
        e.employee.clone(),
        e.location.clone(),
        e.date.clone(),
        opt(&e.date_obj),
        opt(&e.attendance),
        opt(&e.activity_category),
        opt(&e.task_priority),
        opt(&e.start_time),
        opt(&e.end_time),
        e.work_minutes.to_string(),
        e.description.clone(),
        e.is_billable.to_string(),
        opt(&e.month),
        e.week.map(|w| w.to_string()).unwrap_or_default(),
        opt(&e.day_of_week),
    ]
}
