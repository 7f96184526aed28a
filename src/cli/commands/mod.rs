pub mod activities;
pub mod anomalies;
pub mod config;
pub mod export;
pub mod locations;
pub mod parse;
pub mod summary;
pub mod training;
pub mod travel;
pub mod trends;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::TaskRecord;
use crate::sheet::{ParsedSheet, TimesheetParser};
use crate::ui::messages::{info, warning};
use std::path::Path;

/// Parse `file` with the configured options and report the outcome.
///
/// An empty sheet is an error for every command that consumes records.
pub(crate) fn load_records(file: &str, cfg: &Config, list_flags: bool) -> AppResult<ParsedSheet> {
    let parser = TimesheetParser::new(cfg.parse_options()?);
    info(format!("Parsing {file}"));

    let sheet = parser.parse_path(Path::new(file))?;
    report_flags(&sheet, list_flags);
    info(format!(
        "{} task records from {} employees",
        sheet.records.len(),
        employee_count(&sheet.records)
    ));

    Ok(sheet)
}

/// Warn about data-quality flags: a one-line count, or every flag with `verbose`.
fn report_flags(sheet: &ParsedSheet, verbose: bool) {
    if sheet.flags.is_empty() {
        return;
    }
    if verbose {
        for flag in &sheet.flags {
            warning(format!("[{}] {}", flag.kind(), flag));
        }
    } else {
        warning(format!(
            "{} data-quality flags (use `parse --flags` to list them)",
            sheet.flags.len()
        ));
    }
}

fn employee_count(records: &[TaskRecord]) -> usize {
    let mut names: Vec<&str> = records.iter().map(|r| r.employee.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    names.len()
}
