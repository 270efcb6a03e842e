//! Fixed lane table: where each duty status sits and how it is painted.
//! Plain data, identical for every sheet.

use crate::models::DutyStatus;
use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusLane {
    pub status: DutyStatus,
    pub label: &'static str,
    /// Vertical position as a fraction of the plot height, from the top.
    pub fraction: f64,
    pub color: Color,
}

pub const STATUS_LANES: [StatusLane; 4] = [
    StatusLane {
        status: DutyStatus::OffDuty,
        label: "Off Duty",
        fraction: 0.15,
        color: Color::rgb(0xd4, 0xed, 0xda),
    },
    StatusLane {
        status: DutyStatus::SleeperBerth,
        label: "Sleeper Berth",
        fraction: 0.35,
        color: Color::rgb(0xf8, 0xd7, 0xda),
    },
    StatusLane {
        status: DutyStatus::Driving,
        label: "Driving",
        fraction: 0.65,
        color: Color::rgb(0xd1, 0xec, 0xf1),
    },
    StatusLane {
        status: DutyStatus::OnDuty,
        label: "On Duty (Not Driving)",
        fraction: 0.85,
        color: Color::rgb(0xff, 0xf3, 0xcd),
    },
];

pub fn lane_for(status: DutyStatus) -> Option<&'static StatusLane> {
    STATUS_LANES.iter().find(|l| l.status == status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lanes_are_ordered_top_to_bottom() {
        assert!(STATUS_LANES.windows(2).all(|w| w[0].fraction < w[1].fraction));
        let order: Vec<DutyStatus> = STATUS_LANES.iter().map(|l| l.status).collect();
        assert_eq!(order, DutyStatus::ALL.to_vec());
    }

    #[test]
    fn unknown_status_has_no_lane() {
        assert!(lane_for(DutyStatus::Unknown).is_none());
        assert_eq!(lane_for(DutyStatus::Driving).map(|l| l.color.hex()).as_deref(), Some("#d1ecf1"));
    }
}
