//! Raw grid loading: delimited text in, rectangular matrix of strings out.

use crate::errors::{AppError, AppResult};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Untyped cell matrix, rows and columns kept in source order.
///
/// Rows are padded with empty cells up to the widest row, so every row has
/// `width()` cells. A blank cell and a cell past the end of a short source
/// row are the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
    width: usize,
}

impl Grid {
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, String::new());
        }
        Self { rows, width }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Cell text, `""` when the position is outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

/// Read a delimited grid with no header interpretation.
pub fn load_grid<R: Read>(reader: R, delimiter: u8) -> AppResult<Grid> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Grid::from_rows(rows))
}

pub fn load_grid_from_path(path: &Path, delimiter: u8) -> AppResult<Grid> {
    let file = File::open(path).map_err(|e| AppError::Load(csv::Error::from(e)))?;
    load_grid(file, delimiter)
}
