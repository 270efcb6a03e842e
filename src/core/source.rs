//! Where trip logs come from.
//!
//! The backend serves `{ "log_sheets": [...] }` per trip; locally the same
//! documents live as `<trip_id>.json` inside the data directory, or a single
//! file is given directly on the command line.

use crate::errors::{AppError, AppResult};
use crate::models::TripLog;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub trait LogDataSource {
    /// Load the complete trip log for a trip id.
    fn fetch(&self, trip_id: &str) -> AppResult<TripLog>;
}

/// One JSON document per trip inside a directory.
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, trip_id: &str) -> AppResult<PathBuf> {
        if !is_valid_trip_id(trip_id) {
            return Err(AppError::TripNotFound(trip_id.to_string()));
        }
        Ok(self.dir.join(format!("{trip_id}.json")))
    }
}

impl LogDataSource for DirectorySource {
    fn fetch(&self, trip_id: &str) -> AppResult<TripLog> {
        let path = self.path_for(trip_id)?;
        if !path.exists() {
            return Err(AppError::TripNotFound(trip_id.to_string()));
        }
        TripLog::from_path(&path)
    }
}

/// A single JSON document, whatever the trip id.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LogDataSource for FileSource {
    fn fetch(&self, _trip_id: &str) -> AppResult<TripLog> {
        TripLog::from_path(&self.path)
    }
}

/// Trip ids are used as file names: letters, digits, `-` and `_` only.
pub fn is_valid_trip_id(trip_id: &str) -> bool {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(trip_id))
}

/// Resolve a command-line `<SOURCE>`: an existing file path, or a trip id
/// looked up in the data directory. Returns the source and the trip id.
pub fn resolve_source(arg: &str, data_dir: &Path) -> (Box<dyn LogDataSource>, String) {
    let as_path = Path::new(arg);
    if as_path.is_file() {
        let id = as_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| arg.to_string());
        return (Box::new(FileSource::new(as_path)), id);
    }

    (Box::new(DirectorySource::new(data_dir)), arg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("eldgraph_source_{name}"));
        fs::remove_dir_all(&dir).ok();
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn trip_ids_are_restricted() {
        assert!(is_valid_trip_id("42"));
        assert!(is_valid_trip_id("trip_2025-03"));
        assert!(!is_valid_trip_id("../etc/passwd"));
        assert!(!is_valid_trip_id(""));
    }

    #[test]
    fn directory_source_reads_trip_documents() {
        let dir = temp_dir("dir");
        fs::write(dir.join("7.json"), r#"{"log_sheets": []}"#).unwrap();

        let src = DirectorySource::new(&dir);
        assert!(src.fetch("7").unwrap().is_empty());
        assert!(matches!(src.fetch("8"), Err(AppError::TripNotFound(_))));
    }

    #[test]
    fn resolve_prefers_existing_files() {
        let dir = temp_dir("resolve");
        let file = dir.join("route_12.json");
        fs::write(&file, r#"{"log_sheets": []}"#).unwrap();

        let (_, id) = resolve_source(file.to_str().unwrap(), &dir);
        assert_eq!(id, "route_12");

        let (src, id) = resolve_source("99", &dir);
        assert_eq!(id, "99");
        assert!(src.fetch(&id).is_err());
    }
}
