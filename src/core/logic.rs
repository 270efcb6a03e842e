use crate::core::calculator::timeline::{self, Timeline};
use crate::core::calculator::totals::{self, DutyTotals};
use crate::models::LogSheet;

/// Per-day figures: what the chart draws and what the backend reported.
#[derive(Debug, Clone)]
pub struct DayReport {
    pub day: u32,
    pub date: String,
    pub timeline: Timeline,
    pub drawn: DutyTotals,
    pub reported: DutyTotals,
    pub fuel_stops: u32,
    pub skipped_events: usize,
}

pub struct Core;

impl Core {
    pub fn build_day_report(sheet: &LogSheet) -> DayReport {
        let timeline = timeline::build_timeline(sheet);
        let drawn = totals::duty_totals(&timeline);
        let s = &sheet.summary;

        DayReport {
            day: sheet.day,
            date: sheet.date.clone(),
            skipped_events: sheet.entries.len() - timeline.plotted.len(),
            timeline,
            drawn,
            reported: DutyTotals {
                off_duty: s.off_duty_hours,
                sleeper_berth: s.sleeper_hours,
                driving: s.drive_hours,
                on_duty: s.on_duty_hours,
            },
            fuel_stops: s.fuel_stops,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DutyStatus, StatusEvent, Summary};

    #[test]
    fn report_counts_skipped_events() {
        let mut sheet = LogSheet::new(3, "2025-03-03", "00:00:00", "12:00:00").with_entries(vec![
            StatusEvent::new("00:00:00", DutyStatus::OffDuty),
            StatusEvent::new("bad", DutyStatus::Driving),
            StatusEvent::new("13:00:00", DutyStatus::OnDuty),
        ]);
        sheet.summary = Summary {
            drive_hours: 2.0,
            fuel_stops: 1,
            ..Default::default()
        };

        let report = Core::build_day_report(&sheet);
        assert_eq!(report.skipped_events, 2);
        assert_eq!(report.reported.driving, 2.0);
        assert_eq!(report.fuel_stops, 1);
        assert_eq!(report.drawn.total(), 0.0);
    }
}
