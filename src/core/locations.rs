//! Regional view: minutes per location and broad activity class.

use crate::models::TaskRecord;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum BroadCategory {
    Travel,
    Training,
    ContentCreation,
    OtherAdmin,
}

impl BroadCategory {
    /// First match wins: travel, then training/session, then content.
    pub fn of(category: &str) -> Self {
        let cat = category.to_lowercase();
        if cat.contains("travel") {
            BroadCategory::Travel
        } else if cat.contains("training") || cat.contains("session") {
            BroadCategory::Training
        } else if cat.contains("content") {
            BroadCategory::ContentCreation
        } else {
            BroadCategory::OtherAdmin
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BroadCategory::Travel => "Travel",
            BroadCategory::Training => "Training",
            BroadCategory::ContentCreation => "Content Creation",
            BroadCategory::OtherAdmin => "Other/Admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationTotal {
    pub location: String,
    pub category: BroadCategory,
    pub minutes: f64,
}

/// Minutes per (location, broad category), ordered by location. Records
/// without a location are left out.
pub fn by_location(records: &[TaskRecord]) -> Vec<LocationTotal> {
    let mut totals: BTreeMap<(&str, BroadCategory), f64> = BTreeMap::new();
    for r in records.iter().filter(|r| !r.location.is_empty()) {
        let key = (r.location.as_str(), BroadCategory::of(r.category_str()));
        *totals.entry(key).or_insert(0.0) += r.work_minutes;
    }

    totals
        .into_iter()
        .map(|((location, category), minutes)| LocationTotal {
            location: location.to_string(),
            category,
            minutes,
        })
        .collect()
}
