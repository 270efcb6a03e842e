use crate::core::calculator::timeline::Timeline;
use crate::models::DutyStatus;

/// Hours per duty status as drawn on the chart.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DutyTotals {
    pub off_duty: f64,
    pub sleeper_berth: f64,
    pub driving: f64,
    pub on_duty: f64,
}

impl DutyTotals {
    pub fn hours_for(&self, status: DutyStatus) -> f64 {
        match status {
            DutyStatus::OffDuty => self.off_duty,
            DutyStatus::SleeperBerth => self.sleeper_berth,
            DutyStatus::Driving => self.driving,
            DutyStatus::OnDuty => self.on_duty,
            DutyStatus::Unknown => 0.0,
        }
    }

    pub fn total(&self) -> f64 {
        self.off_duty + self.sleeper_berth + self.driving + self.on_duty
    }
}

/// Sum the drawn intervals per status. Skipped segments count for nothing.
pub fn duty_totals(timeline: &Timeline) -> DutyTotals {
    let mut totals = DutyTotals::default();

    for interval in &timeline.intervals {
        let h = interval.hours();
        match interval.status {
            DutyStatus::OffDuty => totals.off_duty += h,
            DutyStatus::SleeperBerth => totals.sleeper_berth += h,
            DutyStatus::Driving => totals.driving += h,
            DutyStatus::OnDuty => totals.on_duty += h,
            DutyStatus::Unknown => {}
        }
    }

    totals
}
