use crate::cli::commands::load_trip;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart::layout::ChartLayout;
use crate::db::log::record;
use crate::errors::{AppError, AppResult};
use crate::export::logic::RenderRequest;
use crate::export::{ExportLogic, RenderFormat};
use crate::render::Point;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Render {
        source,
        day,
        format,
        file,
        pointer,
        all,
        force,
    } = cmd
    {
        let format = match format {
            Some(f) => *f,
            None => RenderFormat::from_config(&cfg.default_format)?,
        };
        let pointer = pointer.as_deref().map(parse_pointer).transpose()?;

        let (log, trip_id) = load_trip(source, cfg)?;
        let layout = ChartLayout::from_config(cfg);
        let path = expand_tilde(file);

        let req = RenderRequest {
            day: *day,
            pointer,
            all: *all,
            force: *force,
        };
        let written = ExportLogic::render(log, &trip_id, &layout, format, &path, req)?;

        let what = match (*all, *day) {
            (true, _) => "all days".to_string(),
            (false, Some(d)) => format!("day {d}"),
            (false, None) => "first day".to_string(),
        };
        record(
            &cfg.database_path(),
            "render",
            &trip_id,
            &format!(
                "{what} rendered as {} ({} file(s)) to {}",
                format.as_str(),
                written.len(),
                path.display()
            ),
        );
    }
    Ok(())
}

/// `"X,Y"` in pixels.
pub fn parse_pointer(s: &str) -> AppResult<Point> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| AppError::InvalidPointer(s.to_string()))?;

    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidPointer(s.to_string()))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidPointer(s.to_string()))?;

    if !x.is_finite() || !y.is_finite() {
        return Err(AppError::InvalidPointer(s.to_string()));
    }
    Ok(Point::new(x, y))
}
