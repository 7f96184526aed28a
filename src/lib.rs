//! rTimesheet library root.
//! Exposes the timesheet parser, the record-set calculators, exporters,
//! the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod sheet;
pub mod ui;
pub mod utils;

pub use sheet::{ParseOptions, ParseOutcome, ParsedSheet, TimesheetParser, parse, parse_path};

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};
use ui::messages::warning;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Parse { .. } => cli::commands::parse::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Anomalies { .. } => cli::commands::anomalies::handle(&cli.command, cfg),
        Commands::Activities { .. } => cli::commands::activities::handle(&cli.command, cfg),
        Commands::Training { .. } => cli::commands::training::handle(&cli.command, cfg),
        Commands::Travel { .. } => cli::commands::travel::handle(&cli.command, cfg),
        Commands::Locations { .. } => cli::commands::locations::handle(&cli.command, cfg),
        Commands::Trends { .. } => cli::commands::trends::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    ui::messages::set_quiet(cli.quiet);

    // 2️⃣ resolve the config file (--config wins over the standard location)
    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    // 3️⃣ load config once; `config` itself must still work on a broken file
    let cfg = match Config::load_from(&config_path) {
        Ok(cfg) => cfg,
        Err(e) if matches!(cli.command, Commands::Config { .. }) => {
            warning(format!("{e}; using defaults"));
            Config::default()
        }
        Err(e) => return Err(e),
    };

    dispatch(&cli, &cfg, &config_path)
}
