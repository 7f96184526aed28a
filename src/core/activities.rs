//! Time investment per activity category and priority mix per employee.

use crate::models::TaskRecord;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub minutes: f64,
    /// Share of all categorized minutes, in %.
    pub share_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeCategory {
    pub employee: String,
    pub category: String,
    pub minutes: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityCount {
    pub employee: String,
    pub priority: String,
    pub tasks: usize,
}

/// Minutes per activity category, largest first. Records without a category
/// are left out.
pub fn by_category(records: &[TaskRecord]) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for r in records {
        if let Some(cat) = r.activity_category.as_deref() {
            *totals.entry(cat).or_insert(0.0) += r.work_minutes;
        }
    }

    let grand: f64 = totals.values().sum();
    let mut out: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, minutes)| CategoryTotal {
            category: category.to_string(),
            minutes,
            share_pct: if grand > 0.0 { minutes / grand * 100.0 } else { 0.0 },
        })
        .collect();

    out.sort_by(|a, b| b.minutes.total_cmp(&a.minutes));
    out
}

/// Minutes per (employee, category), ordered by employee then category.
/// Only entries with logged time count.
pub fn by_employee_category(records: &[TaskRecord]) -> Vec<EmployeeCategory> {
    let mut totals: BTreeMap<(&str, &str), f64> = BTreeMap::new();
    for r in records.iter().filter(|r| r.work_minutes > 0.0) {
        if let Some(cat) = r.activity_category.as_deref() {
            *totals.entry((r.employee.as_str(), cat)).or_insert(0.0) += r.work_minutes;
        }
    }

    totals
        .into_iter()
        .map(|((employee, category), minutes)| EmployeeCategory {
            employee: employee.to_string(),
            category: category.to_string(),
            minutes,
        })
        .collect()
}

/// Rank of a priority label: High, Medium, Low, then anything else.
fn priority_rank(priority: &str) -> u8 {
    match priority {
        "High" => 0,
        "Medium" => 1,
        "Low" => 2,
        _ => 3,
    }
}

/// Task count per (employee, priority), High first.
pub fn priority_counts(records: &[TaskRecord]) -> Vec<PriorityCount> {
    let mut counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for r in records {
        if let Some(prio) = r.task_priority.as_deref() {
            *counts.entry((r.employee.as_str(), prio)).or_insert(0) += 1;
        }
    }

    let mut out: Vec<PriorityCount> = counts
        .into_iter()
        .map(|((employee, priority), tasks)| PriorityCount {
            employee: employee.to_string(),
            priority: priority.to_string(),
            tasks,
        })
        .collect();

    // stable: employee order is kept within a priority
    out.sort_by_key(|p| priority_rank(&p.priority));
    out
}
