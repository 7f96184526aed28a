//! Training delivery per trainer.

use crate::core::category_matches;
use crate::models::TaskRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Category keywords that mark a training activity.
pub const TRAINING_KEYWORDS: [&str; 3] = ["Training", "Session", "Class"];

pub fn is_training(category: &str) -> bool {
    category_matches(category, &TRAINING_KEYWORDS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeliveryMode {
    Online,
    Offline,
    Other,
}

impl DeliveryMode {
    /// "online" wins over "offline"/"onsite".
    pub fn of(category: &str) -> Self {
        let cat = category.to_lowercase();
        if cat.contains("online") {
            DeliveryMode::Online
        } else if cat.contains("offline") || cat.contains("onsite") {
            DeliveryMode::Offline
        } else {
            DeliveryMode::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainerMetrics {
    pub employee: String,
    pub training_minutes: f64,
    /// Training records, one per session.
    pub sessions: usize,
    pub online_minutes: f64,
    pub offline_minutes: f64,
}

/// Per-trainer training totals, most training minutes first. Employees
/// without any training record are not listed.
pub fn training_metrics(records: &[TaskRecord]) -> Vec<TrainerMetrics> {
    let mut by_trainer: BTreeMap<&str, TrainerMetrics> = BTreeMap::new();

    for r in records {
        let Some(cat) = r.activity_category.as_deref() else {
            continue;
        };
        if !is_training(cat) {
            continue;
        }

        let m = by_trainer
            .entry(r.employee.as_str())
            .or_insert_with(|| TrainerMetrics {
                employee: r.employee.clone(),
                training_minutes: 0.0,
                sessions: 0,
                online_minutes: 0.0,
                offline_minutes: 0.0,
            });
        m.training_minutes += r.work_minutes;
        m.sessions += 1;
        match DeliveryMode::of(cat) {
            DeliveryMode::Online => m.online_minutes += r.work_minutes,
            DeliveryMode::Offline => m.offline_minutes += r.work_minutes,
            DeliveryMode::Other => {}
        }
    }

    let mut out: Vec<TrainerMetrics> = by_trainer.into_values().collect();
    out.sort_by(|a, b| b.training_minutes.total_cmp(&a.training_minutes));
    out
}
