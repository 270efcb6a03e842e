//! Path utilities: expand ~, derive per-day output file names.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `out/chart.svg` + day 3 → `out/chart_day3.svg`
pub fn per_day_path(base: &Path, day: u32) -> PathBuf {
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "chart".to_string());

    let name = match base.extension() {
        Some(ext) => format!("{stem}_day{day}.{}", ext.to_string_lossy()),
        None => format!("{stem}_day{day}"),
    };

    base.with_file_name(name)
}
