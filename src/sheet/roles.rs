//! Column role resolution: which (date, field) each day-block column holds.

use crate::models::Field;
use crate::sheet::layout::SheetLayout;
use crate::sheet::loader::Grid;
use std::collections::BTreeMap;

/// Sub-header markers in precedence order. First substring hit wins, so
/// "Activity Category" must be tested before anything that could also
/// occur inside it, and "Start"/"End" only after the more specific markers.
pub const ROLE_MARKERS: &[(&str, Field)] = &[
    ("Attendance", Field::Attendance),
    ("Activity Category", Field::ActivityCategory),
    ("Task Priority", Field::TaskPriority),
    ("Start", Field::StartTime),
    ("End", Field::EndTime),
    ("Work Time", Field::WorkTime),
    ("Mins", Field::WorkTime),
    ("Description", Field::Description),
];

/// Case-sensitive substring classification of a field-axis header.
pub fn classify_header(header: &str) -> Option<Field> {
    let header = header.trim();
    ROLE_MARKERS
        .iter()
        .find(|(marker, _)| header.contains(marker))
        .map(|(_, field)| *field)
}

/// Role of one mapped column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRole {
    pub date: String,
    pub field: Field,
}

/// Column index -> (date label, field). Built once per grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnRoleMap {
    roles: BTreeMap<usize, ColumnRole>,
}

impl ColumnRoleMap {
    pub fn get(&self, col: usize) -> Option<&ColumnRole> {
        self.roles.get(&col)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Mapped columns in ascending column order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &ColumnRole)> {
        self.roles.iter().map(|(col, role)| (*col, role))
    }

    /// Distinct date labels in discovery order.
    pub fn dates(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for role in self.roles.values() {
            if !out.contains(&role.date.as_str()) {
                out.push(&role.date);
            }
        }
        out
    }
}

/// Scan the header rows left to right and build the role map.
///
/// A blank date-axis cell inherits the last label seen. Columns before the
/// first label are never mapped, which drops the identity columns even if
/// their sub-header happens to match a marker.
pub fn resolve_roles(grid: &Grid, layout: &SheetLayout) -> ColumnRoleMap {
    let mut roles = BTreeMap::new();
    let mut current_date: Option<String> = None;

    for col in layout.day_block_start..grid.width() {
        let date_cell = grid.cell(layout.date_row, col).trim();
        if !date_cell.is_empty() {
            current_date = Some(date_cell.to_string());
        }

        let field = classify_header(grid.cell(layout.field_row, col));

        if let (Some(date), Some(field)) = (&current_date, field) {
            roles.insert(
                col,
                ColumnRole {
                    date: date.clone(),
                    field,
                },
            );
        }
    }

    ColumnRoleMap { roles }
}
