pub mod timeline;
pub mod totals;
