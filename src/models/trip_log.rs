use super::log_sheet::LogSheet;
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// All log sheets of a trip, one per day, in trip order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripLog {
    #[serde(default)]
    pub log_sheets: Vec<LogSheet>,
}

impl TripLog {
    pub fn new(log_sheets: Vec<LogSheet>) -> Self {
        Self { log_sheets }
    }

    pub fn from_json_str(s: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn is_empty(&self) -> bool {
        self.log_sheets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.log_sheets.len()
    }

    pub fn sheet(&self, index: usize) -> Option<&LogSheet> {
        self.log_sheets.get(index)
    }

    /// Position of the sheet carrying the given day number.
    pub fn position_of_day(&self, day: u32) -> Option<usize> {
        self.log_sheets.iter().position(|s| s.day == day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::status::DutyStatus;

    const DOC: &str = r#"{
        "route": {"distance": 120.5},
        "log_sheets": [
            {
                "day": 1,
                "date": "2025-03-01",
                "start_time": "06:00:00",
                "end_time": "18:00:00",
                "entries": [
                    {"time": "06:00:00", "status": "ON", "duration": 4.0, "activity": "Pre-trip inspection"},
                    {"time": "10:00:00", "status": "DR", "duration": 8.0, "location": "Denver, CO"}
                ],
                "summary": {"drive_hours": 8.0, "on_duty_hours": 4.0, "off_duty_hours": 0.0, "fuel_stops": 1}
            },
            {
                "day": 2,
                "date": "2025-03-02",
                "start_time": "1 day, 00:00:00",
                "end_time": "1 day, 23:59:00"
            }
        ]
    }"#;

    #[test]
    fn parses_backend_document_and_ignores_extra_fields() {
        let log = TripLog::from_json_str(DOC).unwrap();
        assert_eq!(log.len(), 2);

        let first = log.sheet(0).unwrap();
        assert_eq!(first.entries.len(), 2);
        assert_eq!(first.entries[1].status, DutyStatus::Driving);
        assert_eq!(first.summary.fuel_stops, 1);
        assert_eq!(first.selector_label(), "Day 1 (2025-03-01)");

        let second = log.sheet(1).unwrap();
        assert!(second.entries.is_empty());
        assert_eq!(second.summary, Default::default());
        assert_eq!(second.start_hours(), Some(24.0));
    }

    #[test]
    fn position_of_day_looks_up_by_day_number() {
        let log = TripLog::from_json_str(DOC).unwrap();
        assert_eq!(log.position_of_day(2), Some(1));
        assert_eq!(log.position_of_day(7), None);
    }

    #[test]
    fn missing_log_sheets_is_an_empty_trip() {
        let log = TripLog::from_json_str("{}").unwrap();
        assert!(log.is_empty());
    }
}
