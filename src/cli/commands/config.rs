use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        check,
        force,
    } = cmd
    {
        // ---- INIT ----
        if *init {
            if path.exists() && !*force {
                return Err(AppError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            Config::init_at(path)?;
            success(format!("Config file: {}", path.display()));
        }

        // ---- CHECK ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {}, defaults are in use",
                    path.display()
                ));
            } else {
                let missing = Config::missing_keys(path)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    for key in &missing {
                        warning(format!("Missing key '{key}' (default applies)"));
                    }
                }
            }
        }

        // ---- PRINT ----
        if *print_config || !(*init || *check) {
            info(format!("Configuration file: {}", path.display()));
            print!("{}", serde_yaml::to_string(cfg)?);
        }
    }

    Ok(())
}
