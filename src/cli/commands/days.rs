use crate::cli::commands::load_trip;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart::layout::TimeWindow;
use crate::core::session::{NO_DATA_TEXT, Session};
use crate::errors::AppResult;
use crate::models::{LogSheet, TripLog};
use crate::ui::messages::{header, info, warning};
use crate::utils::formatting::selector_entry;
use crate::utils::table::{Column, Table};
use crate::utils::time::wall_clock;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Days { source } = cmd {
        let (log, trip_id) = load_trip(source, cfg)?;
        print!("{}", days_table(&trip_id, log));
    }
    Ok(())
}

/// Day selector of a freshly loaded trip, first day selected.
pub fn days_table(trip_id: &str, log: TripLog) -> String {
    let mut session = Session::new();
    let ticket = session.begin_load(trip_id);
    session.complete_load(ticket, Ok(log));

    header(format!("Trip {trip_id}"));

    let buttons = session.day_selector();
    if buttons.is_empty() {
        info(NO_DATA_TEXT);
        return String::new();
    }

    let mut table = Table::new(vec![
        Column::new("Day"),
        Column::new("Window"),
        Column::new("Events"),
    ]);

    for b in &buttons {
        let Some(sheet) = session.trip_log().sheet(b.index) else {
            continue;
        };
        if sheet.calendar_date().is_none() {
            warning(format!("Day {}: malformed date '{}'", sheet.day, sheet.date));
        }
        table.add_row(vec![
            selector_entry(&b.label, b.selected),
            window_text(sheet),
            sheet.entries.len().to_string(),
        ]);
    }

    table.render()
}

/// `"HH:MM → HH:MM"` in wall-clock time, `-` when the window is unusable.
fn window_text(sheet: &LogSheet) -> String {
    match TimeWindow::for_sheet(sheet) {
        Some(w) => format!(
            "{} → {}",
            wall_clock(w.start, false),
            wall_clock(w.start + w.duration, true)
        ),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_wraps_past_midnight() {
        let overnight = LogSheet::new(1, "2025-03-01", "22:00:00", "1 day, 02:00:00");
        assert_eq!(window_text(&overnight), "22:00 → 02:00");

        let to_midnight = LogSheet::new(2, "2025-03-02", "1 day, 18:00:00", "2 days, 00:00:00");
        assert_eq!(window_text(&to_midnight), "18:00 → 24:00");

        let empty = LogSheet::new(3, "2025-03-03", "08:00:00", "08:00:00");
        assert_eq!(window_text(&empty), "-");
    }
}
