use super::event::StatusEvent;
use crate::utils::time::parse_time_to_hours;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Totals reported by the backend for a single day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub drive_hours: f64,
    #[serde(default)]
    pub on_duty_hours: f64,
    #[serde(default)]
    pub off_duty_hours: f64,
    #[serde(default)]
    pub sleeper_hours: f64,
    #[serde(default)]
    pub fuel_stops: u32,
}

/// One day of the trip: window bounds plus the ordered status changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSheet {
    pub day: u32,
    pub date: String, // "YYYY-MM-DD"
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub entries: Vec<StatusEvent>,
    #[serde(default)]
    pub summary: Summary,
}

impl LogSheet {
    pub fn new(day: u32, date: &str, start_time: &str, end_time: &str) -> Self {
        Self {
            day,
            date: date.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            entries: Vec::new(),
            summary: Summary::default(),
        }
    }

    pub fn with_entries(mut self, entries: Vec<StatusEvent>) -> Self {
        self.entries = entries;
        self
    }

    pub fn start_hours(&self) -> Option<f64> {
        parse_time_to_hours(&self.start_time)
    }

    pub fn end_hours(&self) -> Option<f64> {
        parse_time_to_hours(&self.end_time)
    }

    /// Calendar date, when the backend sent a well formed one.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Label used by the day selector.
    pub fn selector_label(&self) -> String {
        format!("Day {} ({})", self.day, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_date_rejects_malformed_dates() {
        let sheet = LogSheet::new(1, "2025-03-01", "06:00:00", "18:00:00");
        assert_eq!(sheet.calendar_date(), NaiveDate::from_ymd_opt(2025, 3, 1));
        assert!(LogSheet::new(2, "2025-02-30", "06:00:00", "18:00:00").calendar_date().is_none());
        assert!(LogSheet::new(3, "03/01/2025", "06:00:00", "18:00:00").calendar_date().is_none());
    }
}
