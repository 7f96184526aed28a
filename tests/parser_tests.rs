mod common;
use chrono::NaiveDate;
use common::{EMPTY_BLOCK, data_row, header_rows, sample_sheet, sheet, to_csv, write_temp};
use rtimesheet::models::QualityFlag;
use rtimesheet::sheet::coerce::NegativeMinutes;
use rtimesheet::sheet::reconstruct::DuplicatePolicy;
use rtimesheet::{ParseOptions, TimesheetParser, parse, parse_path};
use std::path::Path;

fn parse_str(csv: &str) -> rtimesheet::ParseOutcome {
    parse(csv.as_bytes())
}

#[test]
fn test_one_populated_block_yields_one_record() {
    let csv = sheet(
        &["Sat, Nov 01, 25", "Sun, Nov 02, 25"],
        vec![data_row(
            "1",
            "Alice",
            "Pune",
            &[
                ["P", "Content Development", "High", "09:00", "17:00", "1,250", "Module 3"],
                EMPTY_BLOCK,
            ],
        )],
    );

    let outcome = parse_str(&csv);
    assert!(outcome.message.is_none(), "unexpected message: {:?}", outcome.message);
    assert_eq!(outcome.records.len(), 1);

    let r = &outcome.records[0];
    assert_eq!(r.employee, "Alice");
    assert_eq!(r.location, "Pune");
    assert_eq!(r.date, "Sat, Nov 01, 25");
    assert_eq!(r.date_obj, NaiveDate::from_ymd_opt(2025, 11, 1));
    assert_eq!(r.attendance.as_deref(), Some("P"));
    assert_eq!(r.activity_category.as_deref(), Some("Content Development"));
    assert_eq!(r.task_priority.as_deref(), Some("High"));
    assert_eq!(r.start_time.as_deref(), Some("09:00"));
    assert_eq!(r.end_time.as_deref(), Some("17:00"));
    assert_eq!(r.work_minutes, 1250.0);
    assert_eq!(r.description, "Module 3");
    assert!(r.is_billable);
}

#[test]
fn test_sample_sheet_records_in_row_then_date_order() {
    let outcome = parse_str(&sample_sheet());
    assert!(outcome.is_ok());

    let keys: Vec<(&str, &str, &str)> = outcome
        .records
        .iter()
        .map(|r| (r.employee.as_str(), r.date.as_str(), r.category_str()))
        .collect();

    assert_eq!(
        keys,
        vec![
            ("Alice", "Sat, Nov 01, 25", "Online Training Session"),
            ("Alice", "Sun, Nov 02, 25", "Travel"),
            ("Bob", "Sat, Nov 01, 25", "Content Development"),
            ("Bob", "Sat, Nov 01, 25", "Admin Sync-up"),
        ]
    );

    let billable: Vec<bool> = outcome.records.iter().map(|r| r.is_billable).collect();
    assert_eq!(billable, vec![true, false, true, false]);
}

#[test]
fn test_continuation_rows_inherit_employee_and_location() {
    let outcome = parse_str(&sample_sheet());
    let admin = outcome
        .records
        .iter()
        .find(|r| r.category_str() == "Admin Sync-up")
        .expect("admin record");

    assert_eq!(admin.employee, "Bob");
    assert_eq!(admin.location, "Delhi");
    assert_eq!(admin.work_minutes, 0.0);
}

#[test]
fn test_attendance_only_block_is_dropped() {
    // Bob's Sunday block only has "L" in Attendance.
    let outcome = parse_str(&sample_sheet());
    assert!(
        !outcome
            .records
            .iter()
            .any(|r| r.employee == "Bob" && r.date == "Sun, Nov 02, 25")
    );
}

#[test]
fn test_description_alone_makes_a_record() {
    let csv = sheet(
        &["Mon, Nov 03, 25"],
        vec![data_row(
            "1",
            "Alice",
            "Pune",
            &[["", "   ", "", "", "", "30", "Prep notes"]],
        )],
    );

    let outcome = parse_str(&csv);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].activity_category, None);
    assert!(!outcome.records[0].is_billable);
}

#[test]
fn test_whitespace_only_group_is_dropped() {
    let csv = sheet(
        &["Mon, Nov 03, 25", "Tue, Nov 04, 25"],
        vec![data_row(
            "1",
            "Alice",
            "Pune",
            &[
                ["P", "  ", "High", "09:00", "10:00", "60", " \t "],
                ["P", "Training", "", "", "", "60", ""],
            ],
        )],
    );

    let outcome = parse_str(&csv);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].date, "Tue, Nov 04, 25");
}

#[test]
fn test_leading_rows_without_employee_are_discarded() {
    let mut rows = header_rows(&["Sat, Nov 01, 25"]);
    rows.push(data_row("", "", "", &[["P", "Training", "", "", "", "60", "orphan"]]));
    rows.push(data_row("1", "Alice", "Pune", &[["P", "Training", "", "", "", "90", "x"]]));

    let outcome = parse_str(&to_csv(&rows));
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].employee, "Alice");
    assert_eq!(outcome.records[0].work_minutes, 90.0);
}

#[test]
fn test_unparsable_date_keeps_record_with_null_date() {
    let csv = sheet(
        &["Nov 1st, 25"],
        vec![data_row("1", "Alice", "Pune", &[["P", "Training", "", "", "", "60", ""]])],
    );

    let outcome = parse_str(&csv);
    assert!(outcome.is_ok());
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].date, "Nov 1st, 25");
    assert_eq!(outcome.records[0].date_obj, None);
    assert_eq!(outcome.records[0].month(), None);
    assert!(outcome.flags.contains(&QualityFlag::UnparsableDate {
        label: "Nov 1st, 25".to_string()
    }));
}

#[test]
fn test_derived_grouping_fields() {
    let outcome = parse_str(&sample_sheet());
    let r = &outcome.records[0];
    assert_eq!(r.month().as_deref(), Some("November"));
    assert_eq!(r.day_of_week().as_deref(), Some("Saturday"));
    assert_eq!(r.week(), Some(44));
}

#[test]
fn test_fewer_than_four_rows_is_structural_error() {
    let rows = header_rows(&["Sat, Nov 01, 25"]);
    let outcome = parse_str(&to_csv(&rows));

    assert!(outcome.records.is_empty());
    let msg = outcome.message.expect("structural message");
    assert!(msg.contains("Invalid sheet structure"), "{msg}");
}

#[test]
fn test_empty_input_is_structural_error() {
    let outcome = parse_str("");
    assert!(outcome.records.is_empty());
    assert!(outcome.message.is_some());
}

#[test]
fn test_no_valid_task_is_no_data_condition() {
    let csv = sheet(
        &["Sat, Nov 01, 25"],
        vec![data_row("1", "Alice", "Pune", &[["P", "", "", "", "", "", ""]])],
    );

    let outcome = parse_str(&csv);
    assert!(outcome.records.is_empty());
    assert_eq!(outcome.message.as_deref(), Some("No data found."));
}

#[test]
fn test_invalid_utf8_is_load_error() {
    let mut bytes = sample_sheet().into_bytes();
    bytes.extend_from_slice(&[0xff, 0xfe, b',', 0xc3, b'\n']);

    let outcome = parse(bytes.as_slice());
    assert!(outcome.records.is_empty());
    let msg = outcome.message.expect("load message");
    assert!(msg.starts_with("Error loading CSV"), "{msg}");
}

#[test]
fn test_missing_file_is_load_error() {
    let outcome = parse_path(
        Path::new("/definitely/not/here/timesheet.csv"),
        ParseOptions::default(),
    );
    assert!(outcome.records.is_empty());
    assert!(outcome.message.expect("message").starts_with("Error loading CSV"));
}

#[test]
fn test_parse_path_reads_file() {
    let path = write_temp("parse_path_reads_file", &sample_sheet());
    let outcome = parse_path(Path::new(&path), ParseOptions::default());
    assert!(outcome.is_ok());
    assert_eq!(outcome.records.len(), 4);
}

#[test]
fn test_parsing_is_idempotent() {
    let csv = sample_sheet();
    let first = parse_str(&csv);
    let second = parse_str(&csv);
    assert_eq!(first, second);
}

#[test]
fn test_jagged_short_rows_are_padded() {
    let mut rows = header_rows(&["Sat, Nov 01, 25", "Sun, Nov 02, 25"]);
    // Row stops right after the first block's Activity Category.
    let mut short = data_row("1", "Alice", "Pune", &[]);
    short.extend(["P".to_string(), "Training".to_string()]);
    rows.push(short);

    let outcome = parse_str(&to_csv(&rows));
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].work_minutes, 0.0);
    assert_eq!(outcome.records[0].description, "");
    assert_eq!(outcome.records[0].end_time, None);
}

#[test]
fn test_identity_columns_never_mapped() {
    // A marker in the identity header area must not become a role.
    let mut rows = header_rows(&["Sat, Nov 01, 25"]);
    rows[2][3] = "Description".to_string();
    rows.push(data_row("1", "Alice", "Pune", &[EMPTY_BLOCK]));
    rows[3][3] = "should be ignored".to_string();

    let outcome = parse_str(&to_csv(&rows));
    assert_eq!(outcome.message.as_deref(), Some("No data found."));
}

fn duplicate_description_sheet() -> String {
    let mut rows = header_rows(&["Sat, Nov 01, 25"]);
    rows[1].push(String::new());
    rows[2].push("Description (extra)".to_string());
    let mut row = data_row(
        "1",
        "Alice",
        "Pune",
        &[["P", "Training", "", "", "", "60", "first"]],
    );
    row.push("second".to_string());
    rows.push(row);
    to_csv(&rows)
}

fn parse_with(csv: &str, options: ParseOptions) -> rtimesheet::ParsedSheet {
    TimesheetParser::new(options)
        .parse_reader(csv.as_bytes())
        .expect("parse")
}

#[test]
fn test_duplicate_field_last_write_wins_by_default() {
    let sheet = parse_with(&duplicate_description_sheet(), ParseOptions::default());
    assert_eq!(sheet.records[0].description, "second");
    assert!(sheet.flags.iter().any(|f| f.kind() == "duplicate-field"));
}

#[test]
fn test_duplicate_field_first_wins() {
    let options = ParseOptions {
        duplicate_policy: DuplicatePolicy::FirstWins,
        ..ParseOptions::default()
    };
    let sheet = parse_with(&duplicate_description_sheet(), options);
    assert_eq!(sheet.records[0].description, "first");
}

#[test]
fn test_duplicate_field_concat() {
    let options = ParseOptions {
        duplicate_policy: DuplicatePolicy::Concat,
        ..ParseOptions::default()
    };
    let sheet = parse_with(&duplicate_description_sheet(), options);
    assert_eq!(sheet.records[0].description, "first; second");
}

fn negative_sheet() -> String {
    sheet(
        &["Sat, Nov 01, 25"],
        vec![data_row(
            "1",
            "Alice",
            "Pune",
            &[["P", "Training", "", "", "", "-45", ""]],
        )],
    )
}

#[test]
fn test_negative_minutes_pass_through_by_default() {
    let sheet = parse_with(&negative_sheet(), ParseOptions::default());
    assert_eq!(sheet.records[0].work_minutes, -45.0);
    assert!(sheet.flags.iter().any(|f| matches!(
        f,
        QualityFlag::NegativeMinutes { raw, stored, .. } if *raw == -45.0 && *stored == -45.0
    )));
}

#[test]
fn test_negative_minutes_flip_and_zero() {
    let flip = ParseOptions {
        negative_minutes: NegativeMinutes::Flip,
        ..ParseOptions::default()
    };
    assert_eq!(parse_with(&negative_sheet(), flip).records[0].work_minutes, 45.0);

    let zero = ParseOptions {
        negative_minutes: NegativeMinutes::Zero,
        ..ParseOptions::default()
    };
    assert_eq!(parse_with(&negative_sheet(), zero).records[0].work_minutes, 0.0);
}

#[test]
fn test_unparsable_minutes_default_to_zero_and_flag() {
    let csv = sheet(
        &["Sat, Nov 01, 25"],
        vec![data_row(
            "1",
            "Alice",
            "Pune",
            &[["P", "Training", "", "", "", "abc", ""]],
        )],
    );

    let sheet = parse_with(&csv, ParseOptions::default());
    assert_eq!(sheet.records[0].work_minutes, 0.0);
    assert_eq!(
        sheet.flags,
        vec![QualityFlag::UnparsableMinutes {
            row: 4,
            date: "Sat, Nov 01, 25".to_string(),
            raw: "abc".to_string(),
        }]
    );
}

#[test]
fn test_custom_billable_keywords() {
    let options = ParseOptions {
        billable_keywords: vec!["travel".to_string()],
        ..ParseOptions::default()
    };
    let sheet = parse_with(&sample_sheet(), options);
    let billable: Vec<bool> = sheet.records.iter().map(|r| r.is_billable).collect();
    assert_eq!(billable, vec![false, true, false, false]);
}

#[test]
fn test_semicolon_delimiter() {
    let csv = sample_sheet().replace(',', ";");
    // Date labels lose their commas too, so they stop parsing but still group.
    let options = ParseOptions {
        delimiter: b';',
        ..ParseOptions::default()
    };
    let sheet = parse_with(&csv, options);
    assert_eq!(sheet.records.len(), 4);
}

#[test]
fn test_utf8_bom_is_tolerated() {
    let csv = format!("\u{feff}{}", sample_sheet());
    let outcome = parse_str(&csv);
    assert!(outcome.is_ok());
    assert_eq!(outcome.records.len(), 4);
}

struct PanickingReader;

impl std::io::Read for PanickingReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        panic!("reader exploded");
    }
}

#[test]
fn test_panic_inside_pipeline_becomes_message() {
    let outcome = parse(PanickingReader);
    assert!(outcome.records.is_empty());
    assert!(outcome.flags.is_empty());
    let msg = outcome.message.expect("failure message");
    assert!(msg.starts_with("Error processing data"), "{msg}");
    assert!(msg.contains("reader exploded"), "{msg}");
}

#[test]
fn test_huge_layout_offset_does_not_overflow() {
    let mut options = ParseOptions::default();
    options.layout.data_start_row = usize::MAX;

    let err = TimesheetParser::new(options)
        .parse_reader(sample_sheet().as_bytes())
        .expect_err("layout beyond the sheet");
    assert!(err.to_string().starts_with("Invalid sheet structure"), "{err}");
}
