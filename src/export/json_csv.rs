// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{RecordExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(records: &[RecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let mut file = File::create(path)?;
    write_json(records, &mut file)?;

    notify_export_success("JSON", path);
    Ok(())
}

pub fn write_json<W: Write>(records: &[RecordExport], out: &mut W) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
    out.write_all(json_data.as_bytes())?;
    Ok(())
}

/// Export CSV, header row derived from the serde field names.
pub(crate) fn export_csv(records: &[RecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = File::create(path)?;
    write_csv(records, file)?;

    notify_export_success("CSV", path);
    Ok(())
}

pub fn write_csv<W: Write>(records: &[RecordExport], out: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);

    for item in records {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;
    Ok(())
}
