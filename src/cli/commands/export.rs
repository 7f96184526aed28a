use crate::cli::commands::load_records;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        format,
        file,
        force,
    } = cmd
    {
        let sheet = load_records(input, cfg, false)?;
        ExportLogic::export(&sheet.records, *format, file, *force)?;
    }
    Ok(())
}
