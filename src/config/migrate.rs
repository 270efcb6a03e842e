//! Configuration file upgrades: find keys missing from an older file and
//! write them back with their default values, keeping the user's ones.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys of `Config` absent from a YAML document.
pub fn missing_keys(content: &str) -> AppResult<Vec<String>> {
    let present = parse_mapping(content)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !present.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Insert every missing key with its default. Existing values, including
/// keys this version does not know, are left untouched.
pub fn fill_missing(content: &str) -> AppResult<(String, Vec<String>)> {
    let mut present = parse_mapping(content)?;
    let defaults = default_mapping()?;
    let mut added = Vec::new();

    for (k, v) in defaults {
        if !present.contains_key(&k) {
            if let Some(name) = k.as_str() {
                added.push(name.to_string());
            }
            present.insert(k, v);
        }
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(present))
        .map_err(|e| AppError::ConfigSave(e.to_string()))?;
    Ok((serialized, added))
}

/// Run the migration on the config file at `path`.
/// Returns the added keys; no write happens when nothing is missing.
pub fn migrate_file(path: &Path) -> AppResult<Vec<String>> {
    if !path.exists() {
        info(format!(
            "No configuration file at {} — nothing to migrate.",
            path.display()
        ));
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
    let (updated, added) = fill_missing(&content)?;

    if added.is_empty() {
        info("Configuration is up to date.");
        return Ok(added);
    }

    fs::write(path, updated).map_err(|e| AppError::ConfigSave(e.to_string()))?;
    success(format!(
        "Configuration migrated: added {}",
        added.join(", ")
    ));
    Ok(added)
}

fn parse_mapping(content: &str) -> AppResult<Mapping> {
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match serde_yaml::from_str::<Value>(content) {
        Ok(Value::Mapping(m)) => Ok(m),
        Ok(_) => Err(AppError::Config(
            "configuration file is not a key/value mapping".to_string(),
        )),
        Err(e) => Err(AppError::ConfigLoad(e.to_string())),
    }
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("default configuration is not a mapping".into())),
    }
}
