use crate::cli::commands::load_records;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::anomalies::{Anomaly, detect};
use crate::errors::AppResult;
use crate::ui::messages::{header, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Anomalies { file, threshold } = cmd {
        let sheet = load_records(file, cfg, false)?;
        let threshold = threshold.unwrap_or(cfg.low_productivity_mins);

        let anomalies = detect(&sheet.records, threshold);
        if anomalies.is_empty() {
            success("No major data anomalies detected.");
            return Ok(());
        }

        header(format!("{} red flags", anomalies.len()));
        print!("{}", anomalies_table(&anomalies, threshold).render());
    }
    Ok(())
}

fn anomalies_table(anomalies: &[Anomaly], threshold: f64) -> Table {
    let mut table = Table::new(vec![
        Column::new("Date", 16),
        Column::new("Employee", 28),
        Column::new("Mins", 7).right(),
        Column::new("Flag", 32),
        Column::new("Description", 48),
    ]);

    for a in anomalies {
        table.add_row(vec![
            a.date.clone(),
            a.employee.clone(),
            format!("{}", a.minutes),
            a.kind.label(threshold),
            a.description.clone().unwrap_or_default(),
        ]);
    }

    table
}
