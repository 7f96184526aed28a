//! Total cell coercions. None of these can fail: bad input maps to a default.

use serde::{Deserialize, Serialize};

/// Keywords marking a billable (revenue-generating) activity category.
pub const DEFAULT_BILLABLE_KEYWORDS: [&str; 4] = ["training", "assessment", "content", "development"];

/// Result of reading a work-time cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Minutes {
    /// Blank or missing cell.
    Blank,
    Value(f64),
    /// Non-blank text that is not a finite number.
    Invalid,
}

impl Minutes {
    /// Value with blank/invalid collapsed to 0.
    pub fn or_zero(self) -> f64 {
        match self {
            Minutes::Value(v) => v,
            Minutes::Blank | Minutes::Invalid => 0.0,
        }
    }
}

/// Read a raw work-time cell. Thousands separators are ignored.
pub fn read_minutes(raw: Option<&str>) -> Minutes {
    let Some(raw) = raw else {
        return Minutes::Blank;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Minutes::Blank;
    }

    match trimmed.replace(',', "").parse::<f64>() {
        Ok(v) if v.is_finite() => Minutes::Value(v),
        _ => Minutes::Invalid,
    }
}

/// Work time in minutes; blank, missing or unparsable cells are 0.
pub fn coerce_minutes(raw: Option<&str>) -> f64 {
    read_minutes(raw).or_zero()
}

/// What to do with a negative work time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NegativeMinutes {
    /// Store the value as read.
    #[default]
    Keep,
    /// Treat the sign as a data-entry error and store the absolute value.
    Flip,
    /// Store 0.
    Zero,
}

impl NegativeMinutes {
    pub fn apply(self, minutes: f64) -> f64 {
        if minutes >= 0.0 {
            return minutes;
        }
        match self {
            NegativeMinutes::Keep => minutes,
            NegativeMinutes::Flip => minutes.abs(),
            NegativeMinutes::Zero => 0.0,
        }
    }
}

/// True when the lower-cased category contains any of `keywords`.
pub fn is_billable_with<S: AsRef<str>>(category: &str, keywords: &[S]) -> bool {
    let cat = category.to_lowercase();
    keywords
        .iter()
        .map(|k| k.as_ref().trim().to_lowercase())
        .any(|k| !k.is_empty() && cat.contains(&k))
}

/// Billing class with the default keyword set.
pub fn is_billable(category: &str) -> bool {
    is_billable_with(category, &DEFAULT_BILLABLE_KEYWORDS)
}
