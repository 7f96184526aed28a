//! Per-employee productivity figures over a record set.

use crate::models::TaskRecord;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeSummary {
    pub employee: String,
    pub total_minutes: f64,
    pub billable_minutes: f64,
    /// Distinct dates with more than 0 minutes logged.
    pub active_days: usize,
    pub avg_daily_minutes: f64,
    /// Billable share of capacity (or of logged time when no capacity is set), in %.
    pub utilization_pct: f64,
    /// Days per attendance code, first non-blank code of each date.
    pub attendance: BTreeMap<String, usize>,
}

#[derive(Default)]
struct Acc<'r> {
    total: f64,
    billable: f64,
    active_dates: BTreeSet<&'r str>,
    attendance_by_date: BTreeMap<&'r str, &'r str>,
}

/// Summaries sorted by total minutes, highest first.
///
/// `capacity_minutes` is the expected working time of one employee over the
/// period (working days x daily hours x 60). With `None`, utilization is
/// billable time over logged time.
pub fn summarize(records: &[TaskRecord], capacity_minutes: Option<f64>) -> Vec<EmployeeSummary> {
    let mut by_employee: BTreeMap<&str, Acc<'_>> = BTreeMap::new();

    for r in records {
        let acc = by_employee.entry(r.employee.as_str()).or_default();
        acc.total += r.work_minutes;
        if r.is_billable {
            acc.billable += r.work_minutes;
        }
        if r.work_minutes > 0.0 {
            acc.active_dates.insert(r.date.as_str());
        }
        if let Some(code) = r.attendance.as_deref() {
            acc.attendance_by_date.entry(r.date.as_str()).or_insert(code);
        }
    }

    let mut out: Vec<EmployeeSummary> = by_employee
        .into_iter()
        .map(|(employee, acc)| {
            let active_days = acc.active_dates.len();
            let avg_daily_minutes = if active_days > 0 {
                acc.total / active_days as f64
            } else {
                0.0
            };

            let denominator = capacity_minutes.unwrap_or(acc.total);
            let utilization_pct = if denominator > 0.0 {
                acc.billable / denominator * 100.0
            } else {
                0.0
            };

            let mut attendance = BTreeMap::new();
            for code in acc.attendance_by_date.values() {
                *attendance.entry(code.to_string()).or_insert(0) += 1;
            }

            EmployeeSummary {
                employee: employee.to_string(),
                total_minutes: acc.total,
                billable_minutes: acc.billable,
                active_days,
                avg_daily_minutes,
                utilization_pct,
                attendance,
            }
        })
        .collect();

    out.sort_by(|a, b| b.total_minutes.total_cmp(&a.total_minutes));
    out
}

/// Leave share in % of the days with an attendance code.
pub fn leave_pct(summary: &EmployeeSummary) -> f64 {
    let days: usize = summary.attendance.values().sum();
    if days == 0 {
        return 0.0;
    }
    let leave = summary.attendance.get("L").copied().unwrap_or(0);
    leave as f64 / days as f64 * 100.0
}
