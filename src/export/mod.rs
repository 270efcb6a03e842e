// src/export/mod.rs

mod chart;
mod fs_utils;
mod intervals;
pub mod logic;
mod model;

pub use logic::ExportLogic;
pub use model::IntervalExport;

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

/// Output of `render`: the chart itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    Svg,
    Pdf,
    /// Recorded draw commands
    Json,
}

impl RenderFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderFormat::Svg => "svg",
            RenderFormat::Pdf => "pdf",
            RenderFormat::Json => "json",
        }
    }

    /// `default_format` from the configuration file.
    pub fn from_config(value: &str) -> AppResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(RenderFormat::Svg),
            "pdf" => Ok(RenderFormat::Pdf),
            "json" => Ok(RenderFormat::Json),
            other => Err(AppError::InvalidExportFormat(other.to_string())),
        }
    }
}

/// Output of `export`: the status intervals as data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_format_is_case_insensitive() {
        assert_eq!(RenderFormat::from_config("PDF").unwrap(), RenderFormat::Pdf);
        assert_eq!(RenderFormat::from_config(" svg ").unwrap(), RenderFormat::Svg);
        assert!(matches!(
            RenderFormat::from_config("xlsx"),
            Err(AppError::InvalidExportFormat(_))
        ));
    }
}
