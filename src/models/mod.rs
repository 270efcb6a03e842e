pub mod event;
pub mod log_sheet;
pub mod status;
pub mod trip_log;

pub use event::StatusEvent;
pub use log_sheet::{LogSheet, Summary};
pub use status::DutyStatus;
pub use trip_log::TripLog;
