use crate::core::calculator::timeline::StatusInterval;
use crate::core::chart::layout::TimeWindow;
use crate::models::LogSheet;
use crate::utils::time::wall_clock;
use serde::Serialize;

/// One exported row: a status held from `start` to `end` (wall clock).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalExport {
    pub day: u32,
    pub date: String,
    pub status: String,
    pub start: String,
    pub end: String,
    pub hours: f64,
    pub activity: String,
    pub location: String,
}

impl IntervalExport {
    pub fn from_interval(sheet: &LogSheet, window: &TimeWindow, interval: &StatusInterval) -> Self {
        let event = sheet.entries.get(interval.event_index);

        Self {
            day: sheet.day,
            date: sheet.date.clone(),
            status: interval.status.code().to_string(),
            start: wall_clock(window.start + interval.start, false),
            end: wall_clock(window.start + interval.end, true),
            hours: (interval.hours() * 100.0).round() / 100.0,
            activity: event
                .and_then(|e| e.activity.clone())
                .unwrap_or_default(),
            location: event
                .and_then(|e| e.location.clone())
                .unwrap_or_default(),
        }
    }
}
