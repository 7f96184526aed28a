use serde::Serialize;

/// Data-quality note raised while coercing a cell.
///
/// Coercion never fails a record; whatever was defaulted or rewritten is
/// reported here instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum QualityFlag {
    /// Date label that does not follow the `Sat, Nov 01, 25` grammar.
    UnparsableDate { label: String },
    /// Non-blank work time cell that is not a number; counted as 0.
    UnparsableMinutes { row: usize, date: String, raw: String },
    /// Negative work time, with the value actually stored.
    NegativeMinutes {
        row: usize,
        date: String,
        raw: f64,
        stored: f64,
    },
    /// More than one column mapped to the same (date, field) in a row.
    DuplicateField {
        row: usize,
        date: String,
        field: &'static str,
    },
}

impl QualityFlag {
    pub fn kind(&self) -> &'static str {
        match self {
            QualityFlag::UnparsableDate { .. } => "unparsable-date",
            QualityFlag::UnparsableMinutes { .. } => "unparsable-minutes",
            QualityFlag::NegativeMinutes { .. } => "negative-minutes",
            QualityFlag::DuplicateField { .. } => "duplicate-field",
        }
    }
}

impl std::fmt::Display for QualityFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityFlag::UnparsableDate { label } => {
                write!(f, "date label '{label}' could not be parsed")
            }
            QualityFlag::UnparsableMinutes { row, date, raw } => {
                write!(f, "row {row}, {date}: work time '{raw}' is not a number, using 0")
            }
            QualityFlag::NegativeMinutes {
                row,
                date,
                raw,
                stored,
            } => write!(
                f,
                "row {row}, {date}: negative work time {raw}, stored as {stored}"
            ),
            QualityFlag::DuplicateField { row, date, field } => {
                write!(f, "row {row}, {date}: several columns map to '{field}'")
            }
        }
    }
}
