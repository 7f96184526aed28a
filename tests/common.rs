#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Sub-headers of one day block, in the stock export order.
pub const BLOCK_FIELDS: [&str; 7] = [
    "Attendance",
    "Activity Category",
    "Task Priority",
    "Start Time",
    "End Time",
    "Work Time (Mins)",
    "Description",
];

/// A day block with every sub-cell blank.
pub const EMPTY_BLOCK: [&str; 7] = ["", "", "", "", "", "", ""];

/// Fixed identity/summary header cells (columns 0..=6).
const IDENTITY_HEADERS: [&str; 7] = [
    "Sl. No.",
    "Employee Name",
    "Location",
    "P",
    "L",
    "A",
    "WO/H",
];

/// Data row: serial, employee, location, four summary cells, then one
/// 7-cell block per date.
pub fn data_row(serial: &str, employee: &str, location: &str, blocks: &[[&str; 7]]) -> Vec<String> {
    let mut row: Vec<String> = [serial, employee, location, "", "", "", ""]
        .iter()
        .map(|s| s.to_string())
        .collect();
    for block in blocks {
        row.extend(block.iter().map(|s| s.to_string()));
    }
    row
}

/// Three header rows for the given date labels, stock block layout.
pub fn header_rows(dates: &[&str]) -> Vec<Vec<String>> {
    let mut date_row: Vec<String> = vec![String::new(); 7];
    let mut field_row: Vec<String> = IDENTITY_HEADERS.iter().map(|s| s.to_string()).collect();

    for date in dates {
        date_row.push(date.to_string());
        date_row.extend(std::iter::repeat_n(String::new(), BLOCK_FIELDS.len() - 1));
        field_row.extend(BLOCK_FIELDS.iter().map(|s| s.to_string()));
    }

    vec![vec!["Timesheet NOV'25".to_string()], date_row, field_row]
}

/// Serialize rows as CSV text (jagged rows allowed).
pub fn to_csv(rows: &[Vec<String>]) -> String {
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());
    for row in rows {
        wtr.write_record(row).expect("write csv row");
    }
    String::from_utf8(wtr.into_inner().expect("flush csv")).expect("utf8 csv")
}

/// Full sheet: headers for `dates` followed by `data`.
pub fn sheet(dates: &[&str], data: Vec<Vec<String>>) -> String {
    let mut rows = header_rows(dates);
    rows.extend(data);
    to_csv(&rows)
}

/// Two employees over two days; Bob's second line is a continuation row.
pub fn sample_sheet() -> String {
    sheet(
        &["Sat, Nov 01, 25", "Sun, Nov 02, 25"],
        vec![
            data_row(
                "1",
                "Alice",
                "Pune",
                &[
                    ["P", "Online Training Session", "High", "09:00", "13:00", "240", "Batch A"],
                    ["P", "Travel", "Low", "14:00", "15:00", "60", "To client site"],
                ],
            ),
            data_row(
                "2",
                "Bob",
                "Delhi",
                &[
                    ["P", "Content Development", "Medium", "10:00", "20:50", "1,250", "Module 3"],
                    ["L", "", "", "", "", "", ""],
                ],
            ),
            data_row(
                "",
                "",
                "",
                &[
                    ["P", "Admin Sync-up", "Low", "", "", "", "Weekly sync with leads"],
                    EMPTY_BLOCK,
                ],
            ),
        ],
    )
}

/// Write `content` to a unique file in the temp dir and return its path.
pub fn write_temp(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.csv", name));
    fs::write(&path, content).expect("write temp sheet");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Path for a config file that does not exist yet
pub fn temp_config(name: &str) -> String {
    temp_out(&format!("{name}_config"), "conf")
}
