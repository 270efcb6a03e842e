use serde::{Deserialize, Serialize};

/// Duty status of a driver at a given moment.
///
/// Codes as emitted by the backend: OFF, SB, DR, ON. Anything else is kept
/// as `Unknown` so that one bad record does not reject the whole trip log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DutyStatus {
    #[serde(rename = "OFF")]
    OffDuty, // OFF
    #[serde(rename = "SB")]
    SleeperBerth, // SB
    #[serde(rename = "DR")]
    Driving, // DR
    #[serde(rename = "ON")]
    OnDuty, // ON (not driving)
    #[serde(other)]
    Unknown,
}

impl DutyStatus {
    /// All drawable statuses, top lane first.
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDuty,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "OFF",
            DutyStatus::SleeperBerth => "SB",
            DutyStatus::Driving => "DR",
            DutyStatus::OnDuty => "ON",
            DutyStatus::Unknown => "??",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, DutyStatus::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_codes_do_not_fail_deserialization() {
        let s: DutyStatus = serde_json::from_str("\"PC\"").unwrap();
        assert_eq!(s, DutyStatus::Unknown);
        assert!(!s.is_known());

        let s: DutyStatus = serde_json::from_str("\"SB\"").unwrap();
        assert_eq!(s, DutyStatus::SleeperBerth);
    }
}
