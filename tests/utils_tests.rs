use rtimesheet::utils::formatting::{mins2hours, mins2readable, pct, truncate};
use rtimesheet::utils::table::{Column, Table};

#[test]
fn test_mins2readable() {
    assert_eq!(mins2readable(1250.0, false), "20h 50m");
    assert_eq!(mins2readable(1250.0, true), "20:50");
    assert_eq!(mins2readable(-45.0, true), "-00:45");
    assert_eq!(mins2readable(0.0, false), "00h 00m");
}

#[test]
fn test_hours_and_percent() {
    assert_eq!(mins2hours(90.0), 1.5);
    assert_eq!(mins2hours(100.0), 1.7);
    assert_eq!(pct(80.0), "80.0%");
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("Weekly sync with leads", 8), "Weekly …");
}

#[test]
fn test_table_render() {
    let mut table = Table::new(vec![Column::new("Name", 10), Column::new("Mins", 6).right()]);
    table.add_row(vec!["Alice".to_string(), "240".to_string()]);
    table.add_row(vec!["Bob".to_string(), "1250".to_string()]);

    let rendered = table.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines, vec!["Name  Mins", "----- ----", "Alice  240", "Bob   1250"]);
}
