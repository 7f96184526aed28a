//! Weekly work distribution by activity family.

use crate::core::category_matches;
use crate::models::TaskRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Minutes per ISO week. The families are not exclusive: a category
/// matching two keywords counts in both.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeeklyTrend {
    pub week: u32,
    pub training: f64,
    pub travel: f64,
    pub content: f64,
    pub admin_other: f64,
}

/// One row per ISO week that has dated records, in week order.
pub fn weekly_trends(records: &[TaskRecord]) -> Vec<WeeklyTrend> {
    let mut weeks: BTreeMap<u32, WeeklyTrend> = BTreeMap::new();

    for r in records {
        let Some(week) = r.week() else {
            continue;
        };
        let t = weeks.entry(week).or_insert_with(|| WeeklyTrend {
            week,
            ..WeeklyTrend::default()
        });

        let cat = r.category_str();
        if category_matches(cat, &["Training"]) {
            t.training += r.work_minutes;
        }
        if category_matches(cat, &["Travel"]) {
            t.travel += r.work_minutes;
        }
        if category_matches(cat, &["Content"]) {
            t.content += r.work_minutes;
        }
        if category_matches(cat, &["Other", "MIS"]) {
            t.admin_other += r.work_minutes;
        }
    }

    weeks.into_values().collect()
}
