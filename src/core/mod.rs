pub mod calculator;
pub mod chart;
pub mod hover;
pub mod log;
pub mod logic;
pub mod session;
pub mod source;
