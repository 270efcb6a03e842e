//! Chart geometry: plot area, time window and the hours/status → pixel mapping.

use super::lanes::lane_for;
use crate::config::Config;
use crate::models::{DutyStatus, LogSheet, StatusEvent};
use crate::render::{Point, Rect};

/// Displayed duration never exceeds one day.
pub const MAX_DAY_HOURS: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 50.0,
            right: 30.0,
            bottom: 30.0,
            left: 170.0,
        }
    }
}

/// Canvas size plus the fixed drawing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub band_thickness: f64,
    pub trace_width: f64,
    pub hover_radius: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 300.0,
            margins: Margins::default(),
            band_thickness: 10.0,
            trace_width: 3.0,
            hover_radius: 10.0,
        }
    }
}

impl ChartLayout {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            width: (cfg.viewport_width * cfg.width_fraction).max(1.0),
            height: cfg.canvas_height.max(1.0),
            margins: Margins {
                top: cfg.margin_top,
                right: cfg.margin_right,
                bottom: cfg.margin_bottom,
                left: cfg.margin_left,
            },
            band_thickness: cfg.band_thickness,
            trace_width: cfg.trace_width,
            hover_radius: cfg.hover_radius,
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// `canvas − margins`; never negative.
    pub fn plot_area(&self) -> Rect {
        let m = &self.margins;
        Rect::new(
            m.left,
            m.top,
            (self.width - m.left - m.right).max(0.0),
            (self.height - m.top - m.bottom).max(0.0),
        )
    }

    /// Lane y for a status, `None` for statuses without a lane.
    pub fn lane_y(&self, status: DutyStatus) -> Option<f64> {
        let plot = self.plot_area();
        lane_for(status).map(|l| plot.y + plot.h * l.fraction)
    }
}

/// The displayed slice of a sheet, in absolute hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    pub start: f64,
    pub duration: f64,
}

impl TimeWindow {
    /// `None` when a bound is malformed or the duration is not positive:
    /// then only the static frame can be drawn.
    pub fn for_sheet(sheet: &LogSheet) -> Option<Self> {
        let start = sheet.start_hours()?;
        let end = sheet.end_hours()?;
        Self::new(start, end)
    }

    pub fn new(start: f64, end: f64) -> Option<Self> {
        let duration = (end - start).min(MAX_DAY_HOURS);
        if duration.is_finite() && duration > 0.0 {
            Some(Self { start, duration })
        } else {
            None
        }
    }

    pub fn contains(&self, relative: f64) -> bool {
        (0.0..=self.duration).contains(&relative)
    }

    /// Window-relative hours of an event, only when it can be drawn:
    /// parseable time, inside `[0, duration]`, status with a lane.
    pub fn position_of(&self, event: &StatusEvent) -> Option<f64> {
        if !event.status.is_known() {
            return None;
        }
        let rel = event.hours()? - self.start;
        self.contains(rel).then_some(rel)
    }

    /// Wall-clock hour (0..24) the window starts in.
    pub fn start_hour_of_day(&self) -> i64 {
        self.start.rem_euclid(MAX_DAY_HOURS).floor() as i64
    }

    /// Gridline hours `0..=ceil(duration)`. On a 23:59 window the last line
    /// sits a pixel past the plot edge.
    pub fn whole_hours(&self) -> impl Iterator<Item = i64> {
        0..=(self.duration.ceil() as i64)
    }
}

/// Pixel mapping for one window on one layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub plot: Rect,
    pub window: TimeWindow,
}

impl Projection {
    pub fn new(layout: &ChartLayout, window: TimeWindow) -> Self {
        Self {
            plot: layout.plot_area(),
            window,
        }
    }

    pub fn x(&self, relative_hours: f64) -> f64 {
        self.plot.x + (relative_hours / self.window.duration) * self.plot.w
    }

    pub fn y(&self, status: DutyStatus) -> Option<f64> {
        lane_for(status).map(|l| self.plot.y + self.plot.h * l.fraction)
    }

    pub fn point(&self, relative_hours: f64, status: DutyStatus) -> Option<Point> {
        self.y(status).map(|y| Point::new(self.x(relative_hours), y))
    }
}
