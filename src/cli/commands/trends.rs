use crate::cli::commands::load_records;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::trends::weekly_trends;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::mins2hours;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Trends { file } = cmd {
        let sheet = load_records(file, cfg, false)?;
        let weeks = weekly_trends(&sheet.records);

        if weeks.is_empty() {
            info("No dated records to group by week.");
            return Ok(());
        }

        let hours = |mins: f64| format!("{:.1}", mins2hours(mins));
        let mut table = Table::new(vec![
            Column::new("Week", 5).right(),
            Column::new("Training", 9).right(),
            Column::new("Travel", 7).right(),
            Column::new("Content", 8).right(),
            Column::new("Admin/Other", 11).right(),
        ]);
        for w in &weeks {
            table.add_row(vec![
                w.week.to_string(),
                hours(w.training),
                hours(w.travel),
                hours(w.content),
                hours(w.admin_other),
            ]);
        }

        header("Weekly work distribution (hours)");
        print!("{}", table.render());
    }
    Ok(())
}
