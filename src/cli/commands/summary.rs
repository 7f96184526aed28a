use crate::cli::commands::load_records;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::{EmployeeSummary, leave_pct, summarize};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::{mins2hours, mins2readable, pct};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { file, no_capacity } = cmd {
        let sheet = load_records(file, cfg, false)?;

        let capacity = if *no_capacity {
            None
        } else {
            cfg.capacity_minutes()
        };
        let summaries = summarize(&sheet.records, capacity);

        match capacity {
            Some(c) => header(format!(
                "Productivity (capacity {} h per employee)",
                mins2hours(c)
            )),
            None => header("Productivity (billable share of logged time)"),
        }
        print!("{}", summary_table(&summaries).render());
    }
    Ok(())
}

fn summary_table(summaries: &[EmployeeSummary]) -> Table {
    let mut table = Table::new(vec![
        Column::new("Employee", 28),
        Column::new("Logged", 10).right(),
        Column::new("Hours", 7).right(),
        Column::new("Days", 5).right(),
        Column::new("Avg/day", 9).right(),
        Column::new("Billable", 10).right(),
        Column::new("Util", 7).right(),
        Column::new("Leave", 7).right(),
    ]);

    for s in summaries {
        table.add_row(vec![
            s.employee.clone(),
            mins2readable(s.total_minutes, false),
            format!("{:.1}", mins2hours(s.total_minutes)),
            s.active_days.to_string(),
            mins2readable(s.avg_daily_minutes, true),
            mins2readable(s.billable_minutes, false),
            pct(s.utilization_pct),
            pct(leave_pct(s)),
        ]);
    }

    table
}
