//! Wide-to-long reshaping: forward-filled data rows -> task records.

use crate::models::{Field, QualityFlag, TaskRecord};
use crate::sheet::ParseOptions;
use crate::sheet::coerce::{Minutes, is_billable_with, read_minutes};
use crate::sheet::date::parse_sheet_date;
use crate::sheet::loader::Grid;
use crate::sheet::roles::ColumnRoleMap;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How to resolve several columns mapping to the same (date, field) in a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// The rightmost column overwrites earlier ones, blank or not.
    #[default]
    LastWins,
    /// The leftmost column is kept.
    FirstWins,
    /// Non-blank values are joined with "; ".
    Concat,
}

/// A data row with its identity columns resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledRow<'g> {
    /// 1-based row number in the source sheet.
    pub line: usize,
    pub employee: String,
    pub location: String,
    pub cells: &'g [String],
}

fn non_blank(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(t.to_string()) }
}

/// Forward-fill employee and location down the data rows.
///
/// Blank or whitespace-only cells count as absent. Rows that still have no
/// employee afterwards (leading junk above the first employee) are dropped.
pub fn forward_fill<'g>(grid: &'g Grid, options: &ParseOptions) -> Vec<FilledRow<'g>> {
    let layout = &options.layout;
    let mut last_employee: Option<String> = None;
    let mut last_location: Option<String> = None;
    let mut out = Vec::new();

    for (idx, cells) in grid.rows().enumerate().skip(layout.data_start_row) {
        if let Some(name) = cells.get(layout.employee_col).and_then(|c| non_blank(c)) {
            last_employee = Some(name);
        }
        if let Some(loc) = cells.get(layout.location_col).and_then(|c| non_blank(c)) {
            last_location = Some(loc);
        }

        let Some(employee) = &last_employee else {
            continue;
        };

        out.push(FilledRow {
            line: idx + 1,
            employee: employee.clone(),
            location: last_location.clone().unwrap_or_default(),
            cells,
        });
    }

    out
}

/// Cells of one (row, date) group, indexed by `Field::index`.
#[derive(Debug, Default)]
struct Bundle {
    values: [Option<String>; Field::COUNT],
    written: [bool; Field::COUNT],
}

impl Bundle {
    fn get(&self, field: Field) -> Option<&str> {
        self.values[field.index()].as_deref()
    }

    /// Store a cell; returns true when a non-blank value collided with
    /// another non-blank value.
    fn put(&mut self, field: Field, value: Option<String>, policy: DuplicatePolicy) -> bool {
        let i = field.index();
        if !self.written[i] {
            self.written[i] = true;
            self.values[i] = value;
            return false;
        }

        let collided = self.values[i].is_some() && value.is_some();
        match policy {
            DuplicatePolicy::LastWins => self.values[i] = value,
            DuplicatePolicy::FirstWins => {}
            DuplicatePolicy::Concat => {
                if let Some(v) = value {
                    self.values[i] = Some(match self.values[i].take() {
                        Some(prev) => format!("{prev}; {v}"),
                        None => v,
                    });
                }
            }
        }
        collided
    }

    /// A group is a task only if it names an activity or describes one.
    fn is_task(&self) -> bool {
        self.get(Field::ActivityCategory).is_some() || self.get(Field::Description).is_some()
    }
}

/// Turns filled rows into task records using a fixed role map.
pub struct RowReconstructor<'a> {
    roles: &'a ColumnRoleMap,
    options: &'a ParseOptions,
    dates: HashMap<String, Option<NaiveDate>>,
    flags: Vec<QualityFlag>,
}

impl<'a> RowReconstructor<'a> {
    pub fn new(roles: &'a ColumnRoleMap, options: &'a ParseOptions) -> Self {
        Self {
            roles,
            options,
            dates: HashMap::new(),
            flags: Vec::new(),
        }
    }

    /// Records for one row, in date discovery order.
    pub fn reconstruct(&mut self, row: &FilledRow<'_>) -> Vec<TaskRecord> {
        let roles = self.roles;
        let mut bundles: Vec<(&str, Bundle)> = Vec::new();

        for (col, role) in roles.iter() {
            let value = row.cells.get(col).and_then(|c| non_blank(c));

            let pos = match bundles.iter().position(|(d, _)| *d == role.date) {
                Some(pos) => pos,
                None => {
                    bundles.push((role.date.as_str(), Bundle::default()));
                    bundles.len() - 1
                }
            };

            let collided = bundles[pos]
                .1
                .put(role.field, value, self.options.duplicate_policy);
            if collided {
                self.flags.push(QualityFlag::DuplicateField {
                    row: row.line,
                    date: role.date.clone(),
                    field: role.field.as_str(),
                });
            }
        }

        bundles
            .into_iter()
            .filter(|(_, bundle)| bundle.is_task())
            .map(|(date, bundle)| self.build_record(row, date, &bundle))
            .collect()
    }

    fn build_record(&mut self, row: &FilledRow<'_>, date: &str, bundle: &Bundle) -> TaskRecord {
        let date_obj = self.resolve_date(date);
        let work_minutes = self.resolve_minutes(row.line, date, bundle.get(Field::WorkTime));
        let activity_category = bundle.get(Field::ActivityCategory).map(str::to_string);
        let is_billable = activity_category
            .as_deref()
            .is_some_and(|c| is_billable_with(c, &self.options.billable_keywords));

        TaskRecord {
            employee: row.employee.clone(),
            location: row.location.clone(),
            date: date.to_string(),
            date_obj,
            attendance: bundle.get(Field::Attendance).map(str::to_string),
            activity_category,
            task_priority: bundle.get(Field::TaskPriority).map(str::to_string),
            start_time: bundle.get(Field::StartTime).map(str::to_string),
            end_time: bundle.get(Field::EndTime).map(str::to_string),
            work_minutes,
            description: bundle.get(Field::Description).unwrap_or_default().to_string(),
            is_billable,
        }
    }

    fn resolve_date(&mut self, label: &str) -> Option<NaiveDate> {
        if let Some(parsed) = self.dates.get(label) {
            return *parsed;
        }
        let parsed = parse_sheet_date(label);
        if parsed.is_none() {
            self.flags.push(QualityFlag::UnparsableDate {
                label: label.to_string(),
            });
        }
        self.dates.insert(label.to_string(), parsed);
        parsed
    }

    fn resolve_minutes(&mut self, line: usize, date: &str, raw: Option<&str>) -> f64 {
        match read_minutes(raw) {
            Minutes::Blank => 0.0,
            Minutes::Invalid => {
                self.flags.push(QualityFlag::UnparsableMinutes {
                    row: line,
                    date: date.to_string(),
                    raw: raw.unwrap_or_default().to_string(),
                });
                0.0
            }
            Minutes::Value(v) => {
                let stored = self.options.negative_minutes.apply(v);
                if v < 0.0 {
                    self.flags.push(QualityFlag::NegativeMinutes {
                        row: line,
                        date: date.to_string(),
                        raw: v,
                        stored,
                    });
                }
                stored
            }
        }
    }

    pub fn into_flags(self) -> Vec<QualityFlag> {
        self.flags
    }
}
