use crate::config::Config;
use crate::core::source::resolve_source;
use crate::errors::AppResult;
use crate::models::TripLog;

pub mod config;
pub mod days;
pub mod export;
pub mod hover;
pub mod init;
pub mod log;
pub mod render;
pub mod summary;
pub mod view;

/// Fetch the trip named on the command line. Returns the log and its id.
pub(crate) fn load_trip(source: &str, cfg: &Config) -> AppResult<(TripLog, String)> {
    let (src, trip_id) = resolve_source(source, &cfg.data_dir_path());
    let log = src.fetch(&trip_id)?;
    Ok((log, trip_id))
}
