//! Mobility efficiency: travel time against onsite delivery time.

use crate::core::category_matches;
use crate::core::training::is_training;
use crate::models::TaskRecord;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// "Travelling" is covered by "Travel".
pub const TRAVEL_KEYWORDS: [&str; 1] = ["Travel"];

pub fn is_travel(category: &str) -> bool {
    category_matches(category, &TRAVEL_KEYWORDS)
}

/// Training that is not delivered online.
pub fn is_onsite_delivery(category: &str) -> bool {
    is_training(category) && !category.to_lowercase().contains("online")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelEfficiency {
    pub employee: String,
    pub travel_minutes: f64,
    pub delivery_minutes: f64,
    /// Delivery share of travel + delivery time, in %; 0 when both are 0.
    pub efficiency_pct: f64,
    /// Distinct parsed dates with any record.
    pub worked_days: usize,
}

#[derive(Default)]
struct Acc {
    travel: f64,
    delivery: f64,
    days: BTreeSet<NaiveDate>,
}

/// One row per employee, in name order.
pub fn travel_efficiency(records: &[TaskRecord]) -> Vec<TravelEfficiency> {
    let mut by_employee: BTreeMap<&str, Acc> = BTreeMap::new();

    for r in records {
        let acc = by_employee.entry(r.employee.as_str()).or_default();
        if let Some(d) = r.date_obj {
            acc.days.insert(d);
        }
        let cat = r.category_str();
        if is_travel(cat) {
            acc.travel += r.work_minutes;
        }
        if is_onsite_delivery(cat) {
            acc.delivery += r.work_minutes;
        }
    }

    by_employee
        .into_iter()
        .map(|(employee, acc)| {
            let mobile = acc.travel + acc.delivery;
            TravelEfficiency {
                employee: employee.to_string(),
                travel_minutes: acc.travel,
                delivery_minutes: acc.delivery,
                efficiency_pct: if mobile > 0.0 {
                    acc.delivery / mobile * 100.0
                } else {
                    0.0
                },
                worked_days: acc.days.len(),
            }
        })
        .collect()
}
