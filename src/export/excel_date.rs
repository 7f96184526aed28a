// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveTime, Timelike};
use std::sync::LazyLock;

/// 1899-12-30, which absorbs Excel's 1900 leap-year bug.
static EXCEL_EPOCH: LazyLock<NaiveDate> =
    LazyLock::new(|| NaiveDate::from_ymd_opt(1899, 12, 30).expect("valid Excel epoch"));

/// Interpret an ISO date (`YYYY-MM-DD`) or a clock time (`HH:MM[:SS]`) as an
/// Excel serial number, with the matching number format.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(("yyyy-mm-dd", date_to_excel_serial(d)));
    }

    for fmt in ["%H:%M:%S", "%H:%M"] {
        if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
            let seconds = t.num_seconds_from_midnight() as f64;
            return Some(("hh:mm", seconds / 86400.0));
        }
    }

    None
}

/// Days since the Excel epoch.
fn date_to_excel_serial(d: NaiveDate) -> f64 {
    (d - *EXCEL_EPOCH).num_days() as f64
}
