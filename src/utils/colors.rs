/// ANSI color helper utilities for terminal output.
use crate::models::DutyStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Terminal colour close to the lane colour of each status.
pub fn color_for_status(status: DutyStatus) -> &'static str {
    match status {
        DutyStatus::OffDuty => GREEN,
        DutyStatus::SleeperBerth => MAGENTA,
        DutyStatus::Driving => CYAN,
        DutyStatus::OnDuty => YELLOW,
        DutyStatus::Unknown => GREY,
    }
}

/// Drawn vs reported hours:
/// equal (within a minute) → reset, drawn less → red, drawn more → blue
pub fn color_for_delta(drawn: f64, reported: f64) -> &'static str {
    let delta = drawn - reported;
    if delta.abs() < 1.0 / 60.0 {
        RESET
    } else if delta < 0.0 {
        RED
    } else {
        BLUE
    }
}

/// Wrap `value` with a colour and a reset.
pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_colors() {
        assert_eq!(color_for_delta(8.0, 8.001), RESET);
        assert_eq!(color_for_delta(7.0, 8.0), RED);
        assert_eq!(color_for_delta(9.0, 8.0), BLUE);
    }

    #[test]
    fn paint_wraps_with_reset() {
        assert_eq!(paint("DR", CYAN), "\x1b[36mDR\x1b[0m");
        assert_eq!(color_for_status(DutyStatus::Unknown), GREY);
    }
}
