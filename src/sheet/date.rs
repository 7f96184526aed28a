//! Date-label grammar of the sheet's date axis: `Sat, Nov 01, 25`.

use chrono::{NaiveDate, Weekday};
use regex::Regex;
use std::sync::LazyLock;

static ORDINAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)(st|nd|rd|th)").expect("valid ordinal regex"));

static LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)([a-z]{3}),\s+([a-z]{3})\s+(\d{1,2}),\s+(\d{2})$")
        .expect("valid label regex")
});

/// Remove ordinal suffixes: "Nov 1st" -> "Nov 1".
pub fn strip_ordinals(label: &str) -> String {
    ORDINAL_RE.replace_all(label, "$1").into_owned()
}

/// Parse a date-axis label. Returns `None` on anything that does not follow
/// `<Www>, <Mmm> <day>, <yy>` (three-letter weekday and month, whitespace
/// after each comma), or names an impossible date.
///
/// The weekday must be a weekday abbreviation but is not cross-checked
/// against the resulting date.
pub fn parse_sheet_date(label: &str) -> Option<NaiveDate> {
    let clean = strip_ordinals(label.trim());
    let caps = LABEL_RE.captures(&clean)?;

    caps[1].parse::<Weekday>().ok()?;
    let month = month_from_abbrev(&caps[2])?;
    let day: u32 = caps[3].parse().ok()?;
    let yy: i32 = caps[4].parse().ok()?;

    NaiveDate::from_ymd_opt(expand_two_digit_year(yy), month, day)
}

/// POSIX `%y` pivot: 69-99 -> 19xx, 00-68 -> 20xx.
fn expand_two_digit_year(yy: i32) -> i32 {
    if yy >= 69 { 1900 + yy } else { 2000 + yy }
}

fn month_from_abbrev(s: &str) -> Option<u32> {
    let m = match s.to_ascii_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(m)
}
