use crate::cli::commands::load_trip;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart::layout::ChartLayout;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::render::Point;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Hover { source, day, x, y } = cmd {
        let (log, trip_id) = load_trip(source, cfg)?;
        if log.is_empty() {
            return Err(AppError::NoLogSheets(trip_id));
        }
        let layout = ChartLayout::from_config(cfg);

        let mut session = Session::new();
        let ticket = session.begin_load(&trip_id);
        session.complete_load(ticket, Ok(log));
        session.select_day(*day)?;

        match session.pointer_move(&layout, Point::new(*x, *y)) {
            Some(target) => println!("{}", target.tooltip_text()),
            None => info(format!("No event under the pointer at ({x}, {y})")),
        }
    }
    Ok(())
}
