use crate::core::chart::layout::TimeWindow;
use crate::models::{DutyStatus, LogSheet};

/// An event that lands inside the window and can be plotted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlottedEvent {
    pub index: usize, // position in `sheet.entries`
    pub hours: f64,   // window-relative
    pub status: DutyStatus,
}

/// A span of time spent in one status, window-relative hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusInterval {
    pub status: DutyStatus,
    pub start: f64,
    pub end: f64,
    pub event_index: usize, // event that opened the interval
    pub trailing: bool,     // last status held until the window end
}

impl StatusInterval {
    pub fn hours(&self) -> f64 {
        self.end - self.start
    }
}

/// One vertex of the step trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceVertex {
    pub hours: f64,
    pub status: DutyStatus,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Timeline {
    pub window: Option<TimeWindow>,
    pub plotted: Vec<PlottedEvent>,
    pub intervals: Vec<StatusInterval>,
    /// Continuous runs of the step trace. A skipped segment starts a new run.
    pub paths: Vec<Vec<TraceVertex>>,
}

/// Build the duty-status timeline of a sheet in window-relative hours.
///
/// Events that cannot be placed (bad time, outside `[0, duration]`, unknown
/// status) are skipped together with the segments touching them.
pub fn build_timeline(sheet: &LogSheet) -> Timeline {
    let Some(window) = TimeWindow::for_sheet(sheet) else {
        return Timeline::default();
    };

    let entries = &sheet.entries;
    let positions: Vec<Option<f64>> = entries.iter().map(|e| window.position_of(e)).collect();

    let plotted = positions
        .iter()
        .enumerate()
        .filter_map(|(index, pos)| {
            pos.map(|hours| PlottedEvent {
                index,
                hours,
                status: entries[index].status,
            })
        })
        .collect();

    let mut intervals = Vec::new();
    let mut paths = Vec::new();
    let mut current: Vec<TraceVertex> = Vec::new();

    // -----------------------------
    // Interior segments
    // -----------------------------
    for (i, ev) in entries.iter().enumerate() {
        let Some(rel) = positions[i] else {
            flush(&mut current, &mut paths);
            continue;
        };

        let prev = i
            .checked_sub(1)
            .and_then(|p| positions[p].map(|prev_rel| (p, prev_rel)));

        match prev {
            Some((p, prev_rel)) => {
                let prev_status = entries[p].status;

                intervals.push(StatusInterval {
                    status: prev_status,
                    start: prev_rel,
                    end: rel,
                    event_index: p,
                    trailing: false,
                });

                // arrive at the new x on the old lane, then step to the new lane
                current.push(TraceVertex {
                    hours: rel,
                    status: prev_status,
                });
                current.push(TraceVertex {
                    hours: rel,
                    status: ev.status,
                });
            }
            None => {
                flush(&mut current, &mut paths);
                current.push(TraceVertex {
                    hours: rel,
                    status: ev.status,
                });
            }
        }
    }

    // -----------------------------
    // Trailing segment: last status holds until the window end
    // -----------------------------
    if let Some((last_idx, last)) = entries.iter().enumerate().next_back()
        && let Some(rel) = positions[last_idx]
        && rel < window.duration
    {
        intervals.push(StatusInterval {
            status: last.status,
            start: rel,
            end: window.duration,
            event_index: last_idx,
            trailing: true,
        });
        current.push(TraceVertex {
            hours: window.duration,
            status: last.status,
        });
    }

    flush(&mut current, &mut paths);

    Timeline {
        window: Some(window),
        plotted,
        intervals,
        paths,
    }
}

fn flush(current: &mut Vec<TraceVertex>, paths: &mut Vec<Vec<TraceVertex>>) {
    if current.len() >= 2 {
        paths.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatusEvent;

    fn sheet(start: &str, end: &str, events: &[(&str, DutyStatus)]) -> LogSheet {
        LogSheet::new(1, "2025-03-01", start, end).with_entries(
            events
                .iter()
                .map(|(t, s)| StatusEvent::new(t, *s))
                .collect(),
        )
    }

    #[test]
    fn event_at_window_end_gets_no_trailing_interval() {
        let s = sheet(
            "06:00:00",
            "18:00:00",
            &[
                ("06:00:00", DutyStatus::OnDuty),
                ("10:00:00", DutyStatus::Driving),
                ("18:00:00", DutyStatus::OffDuty),
            ],
        );
        let t = build_timeline(&s);

        assert_eq!(t.intervals.len(), 2);
        assert_eq!(t.intervals[0].status, DutyStatus::OnDuty);
        assert_eq!((t.intervals[0].start, t.intervals[0].end), (0.0, 4.0));
        assert_eq!(t.intervals[1].status, DutyStatus::Driving);
        assert_eq!((t.intervals[1].start, t.intervals[1].end), (4.0, 12.0));
        assert!(t.intervals.iter().all(|i| !i.trailing));
        assert_eq!(t.paths.len(), 1);
        assert_eq!(t.plotted.len(), 3);
    }

    #[test]
    fn last_status_extends_to_window_end() {
        let s = sheet(
            "00:00:00",
            "1 day, 00:00:00",
            &[
                ("00:00:00", DutyStatus::OffDuty),
                ("08:00:00", DutyStatus::Driving),
            ],
        );
        let t = build_timeline(&s);
        let last = t.intervals.last().unwrap();
        assert!(last.trailing);
        assert_eq!((last.start, last.end), (8.0, 24.0));

        let path = &t.paths[0];
        assert_eq!(path.first().unwrap().hours, 0.0);
        assert_eq!(path.last().unwrap().hours, 24.0);
        assert_eq!(path.last().unwrap().status, DutyStatus::Driving);
    }

    #[test]
    fn out_of_window_event_breaks_segments() {
        // window 00:00 → 1 day 02:00 is capped to 24h; 1 day, 01:00 is hour 25
        let s = sheet(
            "00:00:00",
            "1 day, 02:00:00",
            &[
                ("00:00:00", DutyStatus::OffDuty),
                ("06:00:00", DutyStatus::Driving),
                ("1 day, 01:00:00", DutyStatus::OnDuty),
            ],
        );
        let t = build_timeline(&s);

        assert_eq!(t.intervals.len(), 1);
        assert_eq!(t.intervals[0].status, DutyStatus::OffDuty);
        assert!(t.plotted.iter().all(|p| p.index != 2));
        assert!(
            t.paths
                .iter()
                .flatten()
                .all(|v| v.hours <= 24.0 && v.status != DutyStatus::OnDuty)
        );
    }

    #[test]
    fn malformed_time_restarts_the_trace() {
        let s = sheet(
            "00:00:00",
            "12:00:00",
            &[
                ("01:00:00", DutyStatus::OffDuty),
                ("02:00:00", DutyStatus::OnDuty),
                ("oops", DutyStatus::Driving),
                ("05:00:00", DutyStatus::Driving),
                ("07:00:00", DutyStatus::OffDuty),
            ],
        );
        let t = build_timeline(&s);

        // 01-02 OFF, 05-07 DR, 07-12 OFF trailing
        let spans: Vec<(f64, f64)> = t.intervals.iter().map(|i| (i.start, i.end)).collect();
        assert_eq!(spans, vec![(1.0, 2.0), (5.0, 7.0), (7.0, 12.0)]);
        assert_eq!(t.paths.len(), 2);
        assert_eq!(t.paths[1][0].hours, 5.0);
    }

    #[test]
    fn identical_timestamps_give_zero_width_interval() {
        let s = sheet(
            "00:00:00",
            "10:00:00",
            &[
                ("03:00:00", DutyStatus::OnDuty),
                ("03:00:00", DutyStatus::Driving),
            ],
        );
        let t = build_timeline(&s);
        assert_eq!(t.intervals[0].hours(), 0.0);
        assert_eq!(t.intervals[1].hours(), 7.0);
    }

    #[test]
    fn degenerate_window_yields_empty_timeline() {
        let s = sheet("10:00:00", "10:00:00", &[("10:00:00", DutyStatus::OnDuty)]);
        let t = build_timeline(&s);
        assert!(t.window.is_none());
        assert!(t.intervals.is_empty() && t.paths.is_empty() && t.plotted.is_empty());
    }
}
