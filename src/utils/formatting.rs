//! Formatting utilities used for CLI and report outputs.

use unicode_width::UnicodeWidthStr;

/// Minutes as hours and minutes, e.g. `1250.0` -> `20h 50m` (or `20:50` with `short`).
pub fn mins2readable(mins: f64, short: bool) -> String {
    let total = mins.round() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let abs_m = total.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Minutes to hours rounded to one decimal.
pub fn mins2hours(mins: f64) -> f64 {
    (mins / 60.0 * 10.0).round() / 10.0
}

pub fn pct(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Cut `s` to at most `width` display columns, ending with "…" when cut.
pub fn truncate(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
