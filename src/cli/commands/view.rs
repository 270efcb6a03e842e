//! `view`: a viewer session driven by text commands, one per line.
//!
//! ```text
//! days            day selector
//! day N           select day N (hides the tooltip)
//! move X Y        pointer moved to (X, Y)
//! leave           pointer left the chart
//! render FILE     write the current view (svg/pdf/json by extension)
//! state           current session state
//! quit            end the session (also on end of input)
//! ```

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart::layout::ChartLayout;
use crate::core::session::{Session, ViewState};
use crate::core::source::resolve_source;
use crate::db::log::record;
use crate::errors::AppResult;
use crate::export::{ExportLogic, RenderFormat};
use crate::render::Point;
use crate::utils::formatting::selector_entry;
use crate::utils::path::expand_tilde;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    Days,
    Day(u32),
    Move(Point),
    Leave,
    Render(String),
    State,
    Help,
    Quit,
}

/// Parse one input line. Blank lines give `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<ViewCommand>, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = parts.collect();

    let cmd = match (word.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("days", []) => ViewCommand::Days,
        ("day", [n]) => ViewCommand::Day(n.parse().map_err(|_| format!("invalid day '{n}'"))?),
        ("move", [x, y]) => {
            let x: f64 = x.parse().map_err(|_| format!("invalid x '{x}'"))?;
            let y: f64 = y.parse().map_err(|_| format!("invalid y '{y}'"))?;
            ViewCommand::Move(Point::new(x, y))
        }
        ("leave", []) => ViewCommand::Leave,
        ("render", [file]) => ViewCommand::Render(file.to_string()),
        ("state", []) => ViewCommand::State,
        ("help", []) | ("?", []) => ViewCommand::Help,
        ("quit", []) | ("exit", []) | ("q", []) => ViewCommand::Quit,
        _ => return Err(format!("unknown command '{}'", line.trim())),
    };
    Ok(Some(cmd))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::View { source } = cmd {
        let layout = ChartLayout::from_config(cfg);
        let default_format = RenderFormat::from_config(&cfg.default_format)?;
        let (src, trip_id) = resolve_source(source, &cfg.data_dir_path());

        let mut session = Session::new();
        let ticket = session.begin_load(&trip_id);
        session.complete_load(ticket, src.fetch(&trip_id));

        let stdin = io::stdin();
        let stdout = io::stdout();
        let rendered = run(
            &mut session,
            &layout,
            default_format,
            stdin.lock(),
            &mut stdout.lock(),
        )?;

        if !rendered.is_empty() {
            record(
                &cfg.database_path(),
                "view",
                &trip_id,
                &format!("{} view(s) rendered", rendered.len()),
            );
        }
    }
    Ok(())
}

/// Feed every input line to the session. Returns the files rendered.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    layout: &ChartLayout,
    default_format: RenderFormat,
    input: R,
    out: &mut W,
) -> AppResult<Vec<PathBuf>> {
    let mut rendered = Vec::new();

    writeln!(out, "{}", state_line(session))?;

    for line in input.lines() {
        let line = line?;
        let cmd = match parse_line(&line) {
            Ok(Some(c)) => c,
            Ok(None) => continue,
            Err(msg) => {
                writeln!(out, "✗ {msg} (type 'help')")?;
                continue;
            }
        };

        match cmd {
            ViewCommand::Quit => break,
            ViewCommand::Help => writeln!(
                out,
                "commands: days | day N | move X Y | leave | render FILE | state | quit"
            )?,
            ViewCommand::State => writeln!(out, "{}", state_line(session))?,
            ViewCommand::Days => {
                let buttons = session.day_selector();
                if buttons.is_empty() {
                    writeln!(out, "(no days)")?;
                }
                for b in buttons {
                    writeln!(out, "{}", selector_entry(&b.label, b.selected))?;
                }
            }
            ViewCommand::Day(n) => match session.select_day(n) {
                Ok(()) => writeln!(out, "✓ Day {n} selected")?,
                Err(e) => writeln!(out, "✗ {e}")?,
            },
            ViewCommand::Move(p) => match session.pointer_move(layout, p) {
                Some(target) => writeln!(out, "{}", target.tooltip_text())?,
                None => writeln!(out, "(no event)")?,
            },
            ViewCommand::Leave => {
                session.pointer_leave();
                writeln!(out, "✓ tooltip hidden")?;
            }
            ViewCommand::Render(file) => {
                let path = expand_tilde(&file);
                let format = format_for(&path).unwrap_or(default_format);
                match ExportLogic::render_session(session, layout, format, &path, true) {
                    Ok(()) => {
                        writeln!(out, "✓ {} written", path.display())?;
                        rendered.push(path);
                    }
                    Err(e) => writeln!(out, "✗ {e}")?,
                }
            }
        }
    }

    Ok(rendered)
}

fn format_for(path: &Path) -> Option<RenderFormat> {
    let ext = path.extension()?.to_string_lossy().to_ascii_lowercase();
    RenderFormat::from_config(&ext).ok()
}

fn state_line(session: &Session) -> String {
    match session.state() {
        ViewState::NoData => "state: no data".to_string(),
        ViewState::Loading => "state: loading".to_string(),
        ViewState::Failed { message } => format!("state: failed ({message})"),
        ViewState::Ready { .. } => match session.selected_sheet() {
            Some(sheet) => format!(
                "state: ready, {} day(s), showing {}",
                session.trip_log().len(),
                sheet.selector_label()
            ),
            None => "state: ready".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chart::Chart;
    use crate::errors::AppError;
    use crate::models::{DutyStatus, LogSheet, StatusEvent, TripLog};
    use crate::utils::table::strip_ansi;

    fn loaded() -> Session {
        let mut s = Session::new();
        let t = s.begin_load("5");
        s.complete_load(
            t,
            Ok(TripLog::new(vec![
                LogSheet::new(1, "2025-03-01", "00:00:00", "23:59:00").with_entries(vec![
                    StatusEvent::new("00:00:00", DutyStatus::OffDuty),
                    StatusEvent::new("12:00:00", DutyStatus::Driving).with_activity("Driving"),
                ]),
                LogSheet::new(2, "2025-03-02", "1 day, 00:00:00", "1 day, 12:00:00"),
            ])),
        );
        s
    }

    fn drive(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        run(
            session,
            &ChartLayout::default(),
            RenderFormat::Svg,
            script.as_bytes(),
            &mut out,
        )
        .unwrap();
        strip_ansi(&String::from_utf8(out).unwrap())
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_line("  day 2 ").unwrap(), Some(ViewCommand::Day(2)));
        assert_eq!(
            parse_line("move 10 -4.5").unwrap(),
            Some(ViewCommand::Move(Point::new(10.0, -4.5)))
        );
        assert_eq!(parse_line("").unwrap(), None);
        assert!(parse_line("day two").is_err());
        assert!(parse_line("jump").is_err());
    }

    #[test]
    fn scripted_session() {
        let mut s = loaded();
        let layout = ChartLayout::default();
        let sheet = s.selected_sheet().unwrap().clone();
        let at = Chart::new(&layout, &sheet).plotted_points()[1].at;

        let script = format!("days\nmove {} {}\nday 2\nstate\nday 9\nquit\nday 1\n", at.x, at.y);
        let out = drive(&mut s, &script);

        assert!(out.contains("[Day 1 (2025-03-01)]"));
        assert!(out.contains("12:00:00 - Driving (N/A)"));
        assert!(out.contains("Day 2 selected"));
        assert!(out.contains("showing Day 2 (2025-03-02)"));
        assert!(out.contains("Day 9 not found"));
        // nothing after quit
        assert_eq!(s.selected_sheet().unwrap().day, 2);
        assert!(s.hover().is_none());
    }

    #[test]
    fn nan_pointer_shows_no_tooltip() {
        let mut s = loaded();
        let out = drive(&mut s, "move NaN NaN\n");
        assert!(out.contains("(no event)"));
        assert!(s.hover().is_none());
    }

    #[test]
    fn failed_load_is_reported() {
        let mut s = Session::new();
        let t = s.begin_load("404");
        s.complete_load(t, Err(AppError::TripNotFound("404".into())));

        let out = drive(&mut s, "day 1\n");
        assert!(out.starts_with("state: failed (Trip not found: 404)"));
        assert!(out.contains("Log data not ready"));
    }
}
