use crate::cli::commands::load_records;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::locations::by_location;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::mins2hours;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Locations { file } = cmd {
        let sheet = load_records(file, cfg, false)?;

        let mut table = Table::new(vec![
            Column::new("Location", 24),
            Column::new("Activity", 18),
            Column::new("Hours", 8).right(),
        ]);
        for l in by_location(&sheet.records) {
            table.add_row(vec![
                l.location,
                l.category.label().to_string(),
                format!("{:.1}", mins2hours(l.minutes)),
            ]);
        }

        header("Regional performance");
        print!("{}", table.render());
    }
    Ok(())
}
