use crate::cli::commands::load_records;
use crate::cli::parser::{Commands, OutputStyle};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{to_exports, write_csv, write_json};
use crate::models::TaskRecord;
use crate::ui::messages::header;
use crate::utils::table::{Column, Table};
use std::io::{self, Write};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Parse {
        file,
        output,
        limit,
        show_flags,
    } = cmd
    {
        let sheet = load_records(file, cfg, *show_flags)?;

        let shown = match limit {
            Some(n) => &sheet.records[..(*n).min(sheet.records.len())],
            None => &sheet.records[..],
        };

        let stdout = io::stdout();
        let mut out = stdout.lock();

        match output {
            OutputStyle::Table => {
                header(format!("{} records", shown.len()));
                write!(out, "{}", records_table(shown).render())?;
            }
            OutputStyle::Csv => write_csv(&to_exports(shown), &mut out)?,
            OutputStyle::Json => {
                write_json(&to_exports(shown), &mut out)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
    }
    Ok(())
}

fn records_table(records: &[TaskRecord]) -> Table {
    let mut table = Table::new(vec![
        Column::new("Employee", 24),
        Column::new("Location", 14),
        Column::new("Date", 16),
        Column::new("Att", 4),
        Column::new("Category", 28),
        Column::new("Mins", 7).right(),
        Column::new("Bill", 4),
        Column::new("Description", 40),
    ]);

    for r in records {
        table.add_row(vec![
            r.employee.clone(),
            r.location.clone(),
            r.date_obj
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| r.date.clone()),
            r.attendance.clone().unwrap_or_default(),
            r.category_str().to_string(),
            format!("{}", r.work_minutes),
            if r.is_billable { "yes" } else { "no" }.to_string(),
            r.description.clone(),
        ]);
    }

    table
}
