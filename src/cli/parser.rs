use crate::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rTimesheet
/// CLI application to reshape day-blocked timesheet exports
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reshape day-blocked timesheet CSV exports into per-task records, summaries and reports",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Suppress informational messages (warnings and errors are still shown)
    #[arg(global = true, long, short = 'q')]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output style of `parse`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputStyle {
    Table,
    Csv,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a timesheet export and print the normalized records
    Parse {
        /// Timesheet CSV export
        file: String,

        #[arg(long, value_enum, default_value = "table", help = "Output style")]
        output: OutputStyle,

        #[arg(long, help = "Print at most N records")]
        limit: Option<usize>,

        #[arg(long = "flags", help = "List every data-quality flag")]
        show_flags: bool,
    },

    /// Export the normalized records to a file
    Export {
        /// Timesheet CSV export
        input: String,

        #[arg(
            long,
            value_enum,
            help = "Output format (default: inferred from the file extension)"
        )]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE", help = "Output file (absolute path)")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Per-employee productivity summary
    Summary {
        /// Timesheet CSV export
        file: String,

        #[arg(
            long = "no-capacity",
            help = "Utilization as billable share of logged time instead of capacity"
        )]
        no_capacity: bool,
    },

    /// Red flags: low-productivity days and zero-minute entries
    Anomalies {
        /// Timesheet CSV export
        file: String,

        #[arg(long, value_name = "MINS", help = "Low-productivity threshold in minutes")]
        threshold: Option<f64>,
    },

    /// Time per activity category, per employee and priority mix
    Activities {
        /// Timesheet CSV export
        file: String,
    },

    /// Training hours and sessions per trainer, online vs offline
    Training {
        /// Timesheet CSV export
        file: String,
    },

    /// Travel time against onsite delivery per employee
    Travel {
        /// Timesheet CSV export
        file: String,
    },

    /// Hours per location and broad activity class
    Locations {
        /// Timesheet CSV export
        file: String,
    },

    /// Hours per ISO week for training, travel, content and admin
    Trends {
        /// Timesheet CSV export
        file: String,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with the defaults")]
        init: bool,

        #[arg(long = "check", help = "Report keys missing from the configuration file")]
        check: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file with --init")]
        force: bool,
    },
}
