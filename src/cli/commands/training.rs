use crate::cli::commands::load_records;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::training::training_metrics;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::mins2hours;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Training { file } = cmd {
        let sheet = load_records(file, cfg, false)?;
        let metrics = training_metrics(&sheet.records);

        if metrics.is_empty() {
            info("No training activity found.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("Trainer", 28),
            Column::new("Hours", 8).right(),
            Column::new("Sessions", 9).right(),
            Column::new("Online", 8).right(),
            Column::new("Offline", 8).right(),
        ]);
        for m in &metrics {
            table.add_row(vec![
                m.employee.clone(),
                format!("{:.1}", mins2hours(m.training_minutes)),
                m.sessions.to_string(),
                format!("{:.1}", mins2hours(m.online_minutes)),
                format!("{:.1}", mins2hours(m.offline_minutes)),
            ]);
        }

        header("Training delivered");
        print!("{}", table.render());
    }
    Ok(())
}
