use crate::cli::commands::load_trip;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::record;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        source,
        format,
        file,
        force,
    } = cmd
    {
        let (log, trip_id) = load_trip(source, cfg)?;
        let path = expand_tilde(file);

        let rows = ExportLogic::export_intervals(&log, *format, &path, *force)?;
        if rows > 0 {
            record(
                &cfg.database_path(),
                "export",
                &trip_id,
                &format!(
                    "{rows} intervals exported as {} to {}",
                    format.as_str(),
                    path.display()
                ),
            );
        }
    }
    Ok(())
}
