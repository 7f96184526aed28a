use crate::cli::commands::load_records;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::activities::{by_category, by_employee_category, priority_counts};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::{mins2hours, pct};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Activities { file } = cmd {
        let sheet = load_records(file, cfg, false)?;

        // ---- CATEGORIES ----
        let mut categories = Table::new(vec![
            Column::new("Activity", 36),
            Column::new("Hours", 8).right(),
            Column::new("Share", 7).right(),
        ]);
        for c in by_category(&sheet.records) {
            categories.add_row(vec![
                c.category,
                format!("{:.1}", mins2hours(c.minutes)),
                pct(c.share_pct),
            ]);
        }
        header("Activity breakdown");
        print!("{}", categories.render());

        // ---- PER EMPLOYEE ----
        let mut per_employee = Table::new(vec![
            Column::new("Employee", 28),
            Column::new("Activity", 36),
            Column::new("Hours", 8).right(),
        ]);
        for e in by_employee_category(&sheet.records) {
            per_employee.add_row(vec![
                e.employee,
                e.category,
                format!("{:.1}", mins2hours(e.minutes)),
            ]);
        }
        header("Activities by employee");
        print!("{}", per_employee.render());

        // ---- PRIORITY ----
        let mut priorities = Table::new(vec![
            Column::new("Priority", 10),
            Column::new("Employee", 28),
            Column::new("Tasks", 6).right(),
        ]);
        for p in priority_counts(&sheet.records) {
            priorities.add_row(vec![p.priority, p.employee, p.tasks.to_string()]);
        }
        header("Priority compliance");
        print!("{}", priorities.render());
    }
    Ok(())
}
