use crate::cli::commands::load_records;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::travel::travel_efficiency;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::{mins2hours, pct};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Travel { file } = cmd {
        let sheet = load_records(file, cfg, false)?;

        let mut table = Table::new(vec![
            Column::new("Employee", 28),
            Column::new("Travel h", 9).right(),
            Column::new("Onsite h", 9).right(),
            Column::new("Efficiency", 10).right(),
            Column::new("Days", 5).right(),
        ]);
        for t in travel_efficiency(&sheet.records) {
            table.add_row(vec![
                t.employee,
                format!("{:.1}", mins2hours(t.travel_minutes)),
                format!("{:.1}", mins2hours(t.delivery_minutes)),
                pct(t.efficiency_pct),
                t.worked_days.to_string(),
            ]);
        }

        header("Onsite mobility efficiency");
        print!("{}", table.render());
    }
    Ok(())
}
