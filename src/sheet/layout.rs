//! Positional layout of the day-blocked timesheet export.
//!
//! The sheet has no named schema: every role is addressed by a fixed row or
//! column offset. All of those offsets live here.
//!
//! ```text
//! row 0   | metadata / blank
//! row 1   |                                     | Sat, Nov 01, 25 |     |     | Sun, Nov 02, 25 | ...
//! row 2   | Sl. | Name | Loc | P | L | A | WO/H | Attendance | Activity Category | ... | Attendance | ...
//! row 3.. | 1   | Ann  | HQ  |   |   |   |      | P          | Training          | ... | WO         | ...
//! ```

use serde::{Deserialize, Serialize};

/// Row holding the sparse date labels.
pub const DATE_ROW: usize = 1;
/// Row holding the per-column field sub-headers.
pub const FIELD_ROW: usize = 2;
/// First data row.
pub const DATA_START_ROW: usize = 3;

pub const EMPLOYEE_COL: usize = 1;
pub const LOCATION_COL: usize = 2;
/// First column of the first day block.
pub const DAY_BLOCK_START: usize = 7;

/// Runtime view of the layout, overridable from the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetLayout {
    pub date_row: usize,
    pub field_row: usize,
    pub data_start_row: usize,
    pub employee_col: usize,
    pub location_col: usize,
    pub day_block_start: usize,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            date_row: DATE_ROW,
            field_row: FIELD_ROW,
            data_start_row: DATA_START_ROW,
            employee_col: EMPLOYEE_COL,
            location_col: LOCATION_COL,
            day_block_start: DAY_BLOCK_START,
        }
    }
}

impl SheetLayout {
    /// Minimum number of grid rows for the layout to be usable.
    pub fn min_rows(&self) -> usize {
        self.date_row
            .max(self.field_row)
            .max(self.data_start_row)
            .saturating_add(1)
    }
}
