use super::status::DutyStatus;
use crate::utils::time::parse_time_to_hours;
use serde::{Deserialize, Serialize};

/// A single duty-status change inside a log sheet.
///
/// The interval it opens lasts until the next event, or until the end of the
/// sheet window for the last one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEvent {
    pub time: String,        // "HH:MM:SS" or "<N> day(s), HH:MM:SS"
    pub status: DutyStatus,  // OFF | SB | DR | ON
    #[serde(default)]
    pub duration: f64,       // hint from the backend, hours
    #[serde(default)]
    pub activity: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl StatusEvent {
    pub fn new(time: &str, status: DutyStatus) -> Self {
        Self {
            time: time.to_string(),
            status,
            duration: 0.0,
            activity: None,
            location: None,
        }
    }

    pub fn with_activity(mut self, activity: &str) -> Self {
        self.activity = Some(activity.to_string());
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    /// Absolute hours of the event, `None` when the time is malformed.
    pub fn hours(&self) -> Option<f64> {
        parse_time_to_hours(&self.time)
    }

    /// Activity label, falling back to the status code.
    pub fn label(&self) -> &str {
        match self.activity.as_deref() {
            Some(a) if !a.trim().is_empty() => a,
            _ => self.status.code(),
        }
    }

    pub fn location_or_na(&self) -> &str {
        match self.location.as_deref() {
            Some(l) if !l.trim().is_empty() => l,
            _ => "N/A",
        }
    }
}
