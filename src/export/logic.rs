// src/export/logic.rs

use crate::core::chart::Chart;
use crate::core::chart::layout::ChartLayout;
use crate::core::calculator::timeline::build_timeline;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::export::chart::{write_chart, write_pdf_pages};
use crate::export::fs_utils::ensure_writable;
use crate::export::intervals::{export_csv, export_json};
use crate::export::model::IntervalExport;
use crate::export::{ExportFormat, RenderFormat};
use crate::models::TripLog;
use crate::render::Point;
use crate::ui::messages::warning;
use crate::utils::path::per_day_path;
use std::path::{Path, PathBuf};

/// What `render` should draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderRequest {
    /// Day number; the first sheet when absent
    pub day: Option<u32>,
    /// Pointer position for the tooltip
    pub pointer: Option<Point>,
    /// Every day: PDF pages or one file per day
    pub all: bool,
    pub force: bool,
}

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Render the chart of a trip to `file`. Returns the written files.
    ///
    /// A single day goes through a viewer session, so an empty trip gives the
    /// "no data" placeholder and the pointer produces the same tooltip the
    /// interactive view shows.
    pub fn render(
        log: TripLog,
        trip_id: &str,
        layout: &ChartLayout,
        format: RenderFormat,
        file: &Path,
        req: RenderRequest,
    ) -> AppResult<Vec<PathBuf>> {
        if req.all && !log.is_empty() {
            return Self::render_all(&log, layout, format, file, req.force);
        }

        ensure_writable(file, req.force)?;

        let mut session = Session::new();
        let ticket = session.begin_load(trip_id);
        session.complete_load(ticket, Ok(log));

        if session.selected_index().is_some() {
            if let Some(day) = req.day {
                session.select_day(day)?;
            }
            if let Some(p) = req.pointer
                && session.pointer_move(layout, p).is_none()
            {
                warning(format!("No event within reach of ({}, {})", p.x, p.y));
            }
        } else if req.day.is_some() || req.pointer.is_some() {
            warning("Trip has no log sheets: rendering the placeholder.");
        }

        Self::render_session(&session, layout, format, file, true)?;
        Ok(vec![file.to_path_buf()])
    }

    /// Write what a viewer session currently shows.
    pub fn render_session(
        session: &Session,
        layout: &ChartLayout,
        format: RenderFormat,
        file: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(file, force)?;
        write_chart(format, file, layout, |surface| session.render(layout, surface))
    }

    fn render_all(
        log: &TripLog,
        layout: &ChartLayout,
        format: RenderFormat,
        file: &Path,
        force: bool,
    ) -> AppResult<Vec<PathBuf>> {
        if format == RenderFormat::Pdf {
            ensure_writable(file, force)?;
            write_pdf_pages(file, layout, &log.log_sheets)?;
            return Ok(vec![file.to_path_buf()]);
        }

        let mut written = Vec::with_capacity(log.len());
        for sheet in &log.log_sheets {
            let path = per_day_path(file, sheet.day);
            ensure_writable(&path, force)?;
            write_chart(format, &path, layout, |surface| {
                Chart::new(layout, sheet).draw(surface, None)
            })?;
            written.push(path);
        }
        Ok(written)
    }

    /// Every drawn status interval of the trip, day by day.
    pub fn interval_rows(log: &TripLog) -> Vec<IntervalExport> {
        log.log_sheets
            .iter()
            .flat_map(|sheet| {
                let timeline = build_timeline(sheet);
                let rows: Vec<IntervalExport> = match timeline.window {
                    Some(window) => timeline
                        .intervals
                        .iter()
                        .map(|i| IntervalExport::from_interval(sheet, &window, i))
                        .collect(),
                    None => Vec::new(),
                };
                rows
            })
            .collect()
    }

    /// Export the status intervals. Returns the number of rows written.
    pub fn export_intervals(
        log: &TripLog,
        format: ExportFormat,
        file: &Path,
        force: bool,
    ) -> AppResult<usize> {
        let rows = Self::interval_rows(log);

        if rows.is_empty() {
            warning("No status intervals to export.");
            return Ok(0);
        }

        ensure_writable(file, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, file)?,
            ExportFormat::Json => export_json(&rows, file)?,
        }

        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DutyStatus, LogSheet, StatusEvent};
    use std::env;
    use std::fs;

    fn trip() -> TripLog {
        TripLog::new(vec![
            LogSheet::new(1, "2025-03-01", "06:00:00", "18:00:00").with_entries(vec![
                StatusEvent::new("06:00:00", DutyStatus::OnDuty).with_activity("Pre-trip"),
                StatusEvent::new("07:00:00", DutyStatus::Driving).with_location("Denver, CO"),
            ]),
            LogSheet::new(2, "2025-03-02", "1 day, 00:00:00", "1 day, 10:00:00").with_entries(vec![
                StatusEvent::new("1 day, 00:00:00", DutyStatus::SleeperBerth),
                StatusEvent::new("1 day, 08:00:00", DutyStatus::Driving),
            ]),
        ])
    }

    fn temp_file(name: &str) -> PathBuf {
        let dir = env::temp_dir().join("eldgraph_export_logic");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::remove_file(&path).ok();
        path
    }

    #[test]
    fn interval_rows_use_wall_clock_times() {
        let rows = ExportLogic::interval_rows(&trip());
        assert_eq!(rows.len(), 4);

        assert_eq!(rows[0].status, "ON");
        assert_eq!(rows[0].start, "06:00");
        assert_eq!(rows[0].end, "07:00");
        assert_eq!(rows[0].activity, "Pre-trip");

        assert_eq!(rows[1].status, "DR");
        assert_eq!(rows[1].end, "18:00");
        assert_eq!(rows[1].hours, 11.0);

        assert_eq!(rows[2].day, 2);
        assert_eq!(rows[2].start, "00:00");
        assert_eq!(rows[2].end, "08:00");
    }

    #[test]
    fn all_days_as_svg_write_one_file_per_day() {
        let base = temp_file("trip.svg");
        for d in [1, 2] {
            fs::remove_file(per_day_path(&base, d)).ok();
        }

        let written = ExportLogic::render(
            trip(),
            "7",
            &ChartLayout::default(),
            RenderFormat::Svg,
            &base,
            RenderRequest {
                all: true,
                force: true,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(written.len(), 2);
        assert!(written[1].ends_with("trip_day2.svg"));
        let svg = fs::read_to_string(&written[0]).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Sleeper Berth"));
    }

    #[test]
    fn empty_trip_renders_placeholder() {
        let path = temp_file("empty.json");
        ExportLogic::render(
            TripLog::default(),
            "0",
            &ChartLayout::default(),
            RenderFormat::Json,
            &path,
            RenderRequest {
                force: true,
                ..Default::default()
            },
        )
        .unwrap();

        let dump = fs::read_to_string(&path).unwrap();
        assert!(dump.contains("No log data available"));
    }

    #[test]
    fn empty_export_writes_nothing() {
        let path = temp_file("none.csv");
        let n = ExportLogic::export_intervals(&TripLog::default(), ExportFormat::Csv, &path, true)
            .unwrap();
        assert_eq!(n, 0);
        assert!(!path.exists());
    }
}
