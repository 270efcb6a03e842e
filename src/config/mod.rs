use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod migrate; // missing-key check and fill-in, src/config/migrate.rs

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// SQLite file holding the internal activity log
    #[serde(default = "default_database")]
    pub database: String,
    /// Directory with one `<trip_id>.json` per trip
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f64,
    #[serde(default = "default_width_fraction")]
    pub width_fraction: f64,
    #[serde(default = "default_canvas_height")]
    pub canvas_height: f64,
    #[serde(default = "default_margin_top")]
    pub margin_top: f64,
    #[serde(default = "default_margin_right")]
    pub margin_right: f64,
    #[serde(default = "default_margin_bottom")]
    pub margin_bottom: f64,
    #[serde(default = "default_margin_left")]
    pub margin_left: f64,
    #[serde(default = "default_band_thickness")]
    pub band_thickness: f64,
    #[serde(default = "default_trace_width")]
    pub trace_width: f64,
    #[serde(default = "default_hover_radius")]
    pub hover_radius: f64,
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_data_dir() -> String {
    Config::config_dir().join("trips").to_string_lossy().to_string()
}
fn default_viewport_width() -> f64 {
    1280.0
}
fn default_width_fraction() -> f64 {
    1.0
}
fn default_canvas_height() -> f64 {
    300.0
}
fn default_margin_top() -> f64 {
    50.0
}
fn default_margin_right() -> f64 {
    30.0
}
fn default_margin_bottom() -> f64 {
    30.0
}
fn default_margin_left() -> f64 {
    170.0
}
fn default_band_thickness() -> f64 {
    10.0
}
fn default_trace_width() -> f64 {
    3.0
}
fn default_hover_radius() -> f64 {
    10.0
}
fn default_format() -> String {
    "svg".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            data_dir: default_data_dir(),
            viewport_width: default_viewport_width(),
            width_fraction: default_width_fraction(),
            canvas_height: default_canvas_height(),
            margin_top: default_margin_top(),
            margin_right: default_margin_right(),
            margin_bottom: default_margin_bottom(),
            margin_left: default_margin_left(),
            band_thickness: default_band_thickness(),
            trace_width: default_trace_width(),
            hover_radius: default_hover_radius(),
            default_format: default_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("eldgraph")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".eldgraph")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("eldgraph.conf")
    }

    /// Return the full path of the activity log database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("eldgraph.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Missing keys take their default value.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(content).map_err(|e| AppError::ConfigLoad(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))
    }

    /// Trip directory with `~` expanded.
    pub fn data_dir_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    /// Initialize configuration directory, config file and trip directory.
    /// Returns the configured database path.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // test mode never touches the user's config directory
        if !is_test {
            fs::create_dir_all(&dir)?;
            fs::create_dir_all(config.data_dir_path())?;

            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())
                .map_err(|e| AppError::ConfigSave(e.to_string()))?;
            file.write_all(yaml.as_bytes())
                .map_err(|e| AppError::ConfigSave(e.to_string()))?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
