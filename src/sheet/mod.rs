//! Day-blocked timesheet parser.
//!
//! Pipeline: load grid -> resolve column roles -> forward-fill identity
//! columns -> reconstruct one record per (employee, date) task bundle.
//!
//! [`TimesheetParser`] is the typed API and returns [`AppResult`].
//! [`parse`] / [`parse_path`] wrap it in the never-failing
//! `(records, message)` contract used by the CLI and other consumers.

pub mod coerce;
pub mod date;
pub mod layout;
pub mod loader;
pub mod reconstruct;
pub mod roles;

use crate::errors::{AppError, AppResult};
use crate::models::{QualityFlag, TaskRecord};
use coerce::{DEFAULT_BILLABLE_KEYWORDS, NegativeMinutes};
use layout::SheetLayout;
use loader::{Grid, load_grid, load_grid_from_path};
use reconstruct::{DuplicatePolicy, RowReconstructor, forward_fill};
use roles::resolve_roles;
use std::io::Read;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::Path;

/// Knobs of the parser. `Default` matches the stock export layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOptions {
    pub layout: SheetLayout,
    pub delimiter: u8,
    pub billable_keywords: Vec<String>,
    pub duplicate_policy: DuplicatePolicy,
    pub negative_minutes: NegativeMinutes,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            layout: SheetLayout::default(),
            delimiter: b',',
            billable_keywords: DEFAULT_BILLABLE_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            duplicate_policy: DuplicatePolicy::default(),
            negative_minutes: NegativeMinutes::default(),
        }
    }
}

/// Successful parse: records plus the data-quality side channel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSheet {
    pub records: Vec<TaskRecord>,
    pub flags: Vec<QualityFlag>,
}

/// Result of the boundary functions. `message` is `Some` whenever
/// `records` is empty, and says whether that is a failure or simply
/// "No data found.".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutcome {
    pub records: Vec<TaskRecord>,
    pub flags: Vec<QualityFlag>,
    pub message: Option<String>,
}

impl ParseOutcome {
    pub fn is_ok(&self) -> bool {
        self.message.is_none()
    }

    fn failed(err: AppError) -> Self {
        Self {
            records: Vec::new(),
            flags: Vec::new(),
            message: Some(err.to_string()),
        }
    }
}

impl From<AppResult<ParsedSheet>> for ParseOutcome {
    fn from(result: AppResult<ParsedSheet>) -> Self {
        match result {
            Ok(sheet) => Self {
                records: sheet.records,
                flags: sheet.flags,
                message: None,
            },
            Err(err) => Self::failed(err),
        }
    }
}

pub struct TimesheetParser {
    options: ParseOptions,
}

impl Default for TimesheetParser {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

impl TimesheetParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn parse_reader<R: Read>(&self, reader: R) -> AppResult<ParsedSheet> {
        let grid = load_grid(reader, self.options.delimiter)?;
        self.parse_grid(&grid)
    }

    pub fn parse_path(&self, path: &Path) -> AppResult<ParsedSheet> {
        let grid = load_grid_from_path(path, self.options.delimiter)?;
        self.parse_grid(&grid)
    }

    /// Reshape an already-loaded grid.
    ///
    /// Errors with `Structural` when the grid is shorter than the header
    /// rows plus one data row, and with `NoData` when no row yields a task.
    pub fn parse_grid(&self, grid: &Grid) -> AppResult<ParsedSheet> {
        let layout = &self.options.layout;
        if grid.height() < layout.min_rows() {
            return Err(AppError::Structural(format!(
                "expected at least {} rows (header rows plus one data row), found {}",
                layout.min_rows(),
                grid.height()
            )));
        }

        let roles = resolve_roles(grid, layout);
        let rows = forward_fill(grid, &self.options);

        let mut reconstructor = RowReconstructor::new(&roles, &self.options);
        let mut records = Vec::new();
        for row in &rows {
            records.extend(reconstructor.reconstruct(row));
        }

        if records.is_empty() {
            return Err(AppError::NoData);
        }

        Ok(ParsedSheet {
            records,
            flags: reconstructor.into_flags(),
        })
    }

    /// Boundary version of [`parse_reader`](Self::parse_reader): never fails,
    /// never panics past this call.
    pub fn parse<R: Read>(&self, reader: R) -> ParseOutcome {
        guarded(|| self.parse_reader(reader))
    }
}

/// Run a parse step, turning a panic into an `Other` error.
fn guarded<F>(f: F) -> ParseOutcome
where
    F: FnOnce() -> AppResult<ParsedSheet>,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => ParseOutcome::from(result),
        Err(payload) => {
            let cause = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            ParseOutcome::failed(AppError::Other(cause))
        }
    }
}

/// Parse any reader with default options.
pub fn parse<R: Read>(source: R) -> ParseOutcome {
    TimesheetParser::default().parse(source)
}

/// Parse a file with the given options.
pub fn parse_path(path: &Path, options: ParseOptions) -> ParseOutcome {
    let parser = TimesheetParser::new(options);
    guarded(|| parser.parse_path(path))
}
