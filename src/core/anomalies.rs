//! Red flags over a record set.

use crate::models::TaskRecord;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Default threshold below which a logged day is "low productivity".
pub const LOW_PRODUCTIVITY_MINS: f64 = 180.0;

/// Descriptions longer than this on a zero-minute entry are flagged.
const MIN_DESCRIPTION_CHARS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnomalyKind {
    LowProductivity,
    ZeroMinutes,
}

impl AnomalyKind {
    pub fn label(&self, threshold: f64) -> String {
        match self {
            AnomalyKind::LowProductivity => {
                format!("Low Productivity (< {:.0} mins)", threshold)
            }
            AnomalyKind::ZeroMinutes => "Zero Mins Logged".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Anomaly {
    pub kind: AnomalyKind,
    pub employee: String,
    pub date: String,
    pub minutes: f64,
    pub description: Option<String>,
}

/// Days under `threshold` minutes per (employee, date label), then
/// zero-minute entries that still carry a description. Records without a
/// parsed date are left out of the per-day check.
pub fn detect(records: &[TaskRecord], threshold: f64) -> Vec<Anomaly> {
    // Keyed by label as well: two labels naming the same day stay apart.
    let mut daily: BTreeMap<(&str, NaiveDate, &str), f64> = BTreeMap::new();
    for r in records {
        if let Some(d) = r.date_obj {
            *daily
                .entry((r.employee.as_str(), d, r.date.as_str()))
                .or_insert(0.0) += r.work_minutes;
        }
    }

    let mut out: Vec<Anomaly> = daily
        .into_iter()
        .filter(|(_, mins)| *mins < threshold)
        .map(|((employee, _, date), mins)| Anomaly {
            kind: AnomalyKind::LowProductivity,
            employee: employee.to_string(),
            date: date.to_string(),
            minutes: mins,
            description: None,
        })
        .collect();

    out.extend(
        records
            .iter()
            .filter(|r| {
                r.work_minutes == 0.0 && r.description.chars().count() > MIN_DESCRIPTION_CHARS
            })
            .map(|r| Anomaly {
                kind: AnomalyKind::ZeroMinutes,
                employee: r.employee.clone(),
                date: r.date.clone(),
                minutes: r.work_minutes,
                description: Some(r.description.clone()),
            }),
    );

    out
}
