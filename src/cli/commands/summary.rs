use crate::cli::commands::load_trip;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::{Core, DayReport};
use crate::core::session::NO_DATA_TEXT;
use crate::errors::AppResult;
use crate::models::{DutyStatus, TripLog};
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{color_for_delta, color_for_status, paint};
use crate::utils::hours2readable;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { source } = cmd {
        let (log, trip_id) = load_trip(source, cfg)?;

        header(format!("Trip {trip_id}: drawn / reported hours"));

        if log.is_empty() {
            info(NO_DATA_TEXT);
            return Ok(());
        }

        let reports = reports(&log);
        print!("{}", summary_table(&reports));

        let skipped: usize = reports.iter().map(|r| r.skipped_events).sum();
        if skipped > 0 {
            warning(format!(
                "{skipped} event(s) could not be placed on their day and were not drawn"
            ));
        }
    }
    Ok(())
}

pub fn reports(log: &TripLog) -> Vec<DayReport> {
    log.log_sheets.iter().map(Core::build_day_report).collect()
}

pub fn summary_table(reports: &[DayReport]) -> String {
    let mut columns = vec![Column::new("Day"), Column::new("Date")];
    for status in DutyStatus::ALL {
        columns.push(Column::new(&paint(status.code(), color_for_status(status))));
    }
    columns.push(Column::new("Fuel"));
    columns.push(Column::new("Skipped"));

    let mut table = Table::new(columns);

    for r in reports {
        let mut row = vec![r.day.to_string(), r.date.clone()];
        for status in DutyStatus::ALL {
            let drawn = r.drawn.hours_for(status);
            let reported = r.reported.hours_for(status);
            let cell = format!(
                "{} / {}",
                hours2readable(drawn, true),
                hours2readable(reported, true)
            );
            row.push(paint(&cell, color_for_delta(drawn, reported)));
        }
        row.push(r.fuel_stops.to_string());
        row.push(r.skipped_events.to_string());
        table.add_row(row);
    }

    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LogSheet, StatusEvent, Summary};
    use crate::utils::table::strip_ansi;

    #[test]
    fn table_shows_drawn_and_reported_side_by_side() {
        let mut sheet = LogSheet::new(1, "2025-03-01", "00:00:00", "10:00:00").with_entries(vec![
            StatusEvent::new("00:00:00", DutyStatus::OffDuty),
            StatusEvent::new("08:00:00", DutyStatus::Driving),
        ]);
        sheet.summary = Summary {
            off_duty_hours: 8.0,
            drive_hours: 3.0,
            fuel_stops: 2,
            ..Default::default()
        };

        let out = strip_ansi(&summary_table(&reports(&TripLog::new(vec![sheet]))));
        let row = out.lines().nth(2).unwrap();
        assert!(row.contains("08:00 / 08:00"));
        assert!(row.contains("02:00 / 03:00"));
        let tail: Vec<&str> = row.split_whitespace().rev().take(2).collect();
        assert_eq!(tail, vec!["0", "2"]);
    }
}
