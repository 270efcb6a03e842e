//! Per-session viewer state: which trip is loaded, which day is selected,
//! which event is under the pointer.
//!
//! ```text
//! NoData ──begin_load──▶ Loading ──ok──▶ Ready(i) ◀──select──▶ Ready(i')
//!                           │  └─empty─▶ NoData
//!                           └──err──▶ Failed
//! Ready ──clear / empty log──▶ NoData
//! ```

use crate::core::chart::layout::ChartLayout;
use crate::core::chart::{Chart, draw_placeholder};
use crate::core::hover::HoverTarget;
use crate::errors::{AppError, AppResult};
use crate::models::{LogSheet, TripLog};
use crate::render::{Point, Surface};

pub const NO_DATA_TEXT: &str = "No log data available";
pub const LOADING_TEXT: &str = "Loading...";
pub const FAILED_TEXT: &str = "Failed to load log data";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    NoData,
    Loading,
    Ready { selected: usize },
    Failed { message: String },
}

/// Handed out by `begin_load`, given back with the fetched data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    trip_id: String,
}

/// One entry of the day selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayButton {
    pub index: usize,
    pub day: u32,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Default)]
pub struct Session {
    state: ViewState,
    trip_id: Option<String>,
    log: TripLog,
    hover: Option<HoverTarget>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn trip_log(&self) -> &TripLog {
        &self.log
    }

    pub fn hover(&self) -> Option<&HoverTarget> {
        self.hover.as_ref()
    }

    /// Start loading a trip. Any previous data and tooltip are dropped.
    pub fn begin_load(&mut self, trip_id: &str) -> LoadTicket {
        self.trip_id = Some(trip_id.to_string());
        self.log = TripLog::default();
        self.hover = None;
        self.state = ViewState::Loading;
        LoadTicket {
            trip_id: trip_id.to_string(),
        }
    }

    /// Commit a fetch result. Results for a trip other than the one most
    /// recently requested are discarded; returns whether it was committed.
    pub fn complete_load(&mut self, ticket: LoadTicket, result: AppResult<TripLog>) -> bool {
        if self.trip_id.as_deref() != Some(ticket.trip_id.as_str())
            || self.state != ViewState::Loading
        {
            return false;
        }

        match result {
            Ok(log) => self.replace_log(log),
            Err(e) => {
                self.log = TripLog::default();
                self.hover = None;
                self.state = ViewState::Failed {
                    message: e.to_string(),
                };
            }
        }
        true
    }

    /// Swap the whole trip log; the first sheet gets selected.
    pub fn replace_log(&mut self, log: TripLog) {
        self.hover = None;
        self.state = if log.is_empty() {
            ViewState::NoData
        } else {
            ViewState::Ready { selected: 0 }
        };
        self.log = log;
    }

    /// Trip cleared by the surrounding application.
    pub fn clear(&mut self) {
        self.trip_id = None;
        self.log = TripLog::default();
        self.hover = None;
        self.state = ViewState::NoData;
    }

    pub fn selected_index(&self) -> Option<usize> {
        match self.state {
            ViewState::Ready { selected } => Some(selected),
            _ => None,
        }
    }

    pub fn selected_sheet(&self) -> Option<&LogSheet> {
        self.selected_index().and_then(|i| self.log.sheet(i))
    }

    /// Select a sheet by position. Clears the tooltip.
    pub fn select_index(&mut self, index: usize) -> AppResult<()> {
        if self.selected_index().is_none() {
            return Err(AppError::NotReady(self.state_label().to_string()));
        }
        if index >= self.log.len() {
            return Err(AppError::DayNotFound(index as u32 + 1));
        }
        self.state = ViewState::Ready { selected: index };
        self.hover = None;
        Ok(())
    }

    /// Select a sheet by its day number.
    pub fn select_day(&mut self, day: u32) -> AppResult<()> {
        if self.selected_index().is_none() {
            return Err(AppError::NotReady(self.state_label().to_string()));
        }
        let index = self
            .log
            .position_of_day(day)
            .ok_or(AppError::DayNotFound(day))?;
        self.select_index(index)
    }

    pub fn day_selector(&self) -> Vec<DayButton> {
        let selected = self.selected_index();
        self.log
            .log_sheets
            .iter()
            .enumerate()
            .map(|(index, sheet)| DayButton {
                index,
                day: sheet.day,
                label: sheet.selector_label(),
                selected: selected == Some(index),
            })
            .collect()
    }

    /// Update the tooltip for a pointer position. Idempotent.
    pub fn pointer_move(&mut self, layout: &ChartLayout, pointer: Point) -> Option<&HoverTarget> {
        self.hover = self
            .selected_sheet()
            .and_then(|sheet| Chart::new(layout, sheet).hit_test(pointer));
        self.hover.as_ref()
    }

    pub fn pointer_leave(&mut self) {
        self.hover = None;
    }

    /// Redraw the whole surface from the current state.
    pub fn render(&self, layout: &ChartLayout, surface: &mut dyn Surface) {
        match &self.state {
            ViewState::NoData => draw_placeholder(surface, NO_DATA_TEXT),
            ViewState::Loading => draw_placeholder(surface, LOADING_TEXT),
            ViewState::Failed { message } => {
                draw_placeholder(surface, &format!("{FAILED_TEXT}: {message}"))
            }
            ViewState::Ready { .. } => match self.selected_sheet() {
                Some(sheet) => Chart::new(layout, sheet).draw(surface, self.hover.as_ref()),
                None => draw_placeholder(surface, NO_DATA_TEXT),
            },
        }
    }

    fn state_label(&self) -> &'static str {
        match self.state {
            ViewState::NoData => "no data",
            ViewState::Loading => "loading",
            ViewState::Ready { .. } => "ready",
            ViewState::Failed { .. } => "load failed",
        }
    }
}
