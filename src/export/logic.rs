// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_absolute, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::to_exports;
use crate::export::xlsx::export_xlsx;
use crate::models::TaskRecord;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of a parsed record set.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `records` to `file`.
    ///
    /// - `format`: explicit format, or `None` to infer it from the extension
    /// - `file`: absolute output path
    /// - `force`: overwrite without asking
    pub fn export(
        records: &[TaskRecord],
        format: Option<ExportFormat>,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_absolute(path)?;

        let format = format
            .or_else(|| ExportFormat::from_extension(path))
            .ok_or_else(|| AppError::InvalidExportFormat(file.to_string()))?;

        if records.is_empty() {
            warning("No records to export.");
            return Ok(());
        }

        ensure_writable(path, force)?;

        let rows = to_exports(records);
        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(())
    }
}
