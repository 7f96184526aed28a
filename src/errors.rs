//! Unified application error type.
//! All modules (sheet, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Sheet loading / structure
    // ---------------------------
    #[error("Error loading CSV: {0}")]
    Load(#[from] csv::Error),

    #[error("Invalid sheet structure: {0}")]
    Structural(String),

    #[error("No data found.")]
    NoData,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Error processing data: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
