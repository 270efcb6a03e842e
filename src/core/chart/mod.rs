//! Duty-status timeline chart.
//!
//! Rendering is a pure function of the sheet, the layout and the optional
//! hover target: every call clears the surface and redraws everything.

pub mod frame;
pub mod lanes;
pub mod layout;
pub mod trace;

use crate::core::calculator::timeline::{Timeline, build_timeline};
use crate::core::hover::{HoverTarget, PlottedPoint, hit_test};
use crate::models::LogSheet;
use crate::render::{Color, Point, Rect, Surface, TextAlign, TextStyle};
use layout::{ChartLayout, Projection};
use trace::Band;

const TOOLTIP: TextStyle = TextStyle {
    size: 12.0,
    color: Color::rgb(0x33, 0x33, 0x33),
    align: TextAlign::Left,
};

const PLACEHOLDER: TextStyle = TextStyle {
    size: 14.0,
    color: Color::rgb(0x66, 0x66, 0x66),
    align: TextAlign::Center,
};

const MARKER_COLOR: Color = Color::rgb(0x33, 0x33, 0x33);
const MARKER_SIZE: f64 = 6.0;

pub struct Chart<'a> {
    layout: &'a ChartLayout,
    sheet: &'a LogSheet,
    timeline: Timeline,
}

impl<'a> Chart<'a> {
    pub fn new(layout: &'a ChartLayout, sheet: &'a LogSheet) -> Self {
        Self {
            layout,
            sheet,
            timeline: build_timeline(sheet),
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn projection(&self) -> Option<Projection> {
        self.timeline
            .window
            .map(|w| Projection::new(self.layout, w))
    }

    /// Pixel position of every drawable event.
    pub fn plotted_points(&self) -> Vec<PlottedPoint> {
        let Some(proj) = self.projection() else {
            return Vec::new();
        };
        self.timeline
            .plotted
            .iter()
            .filter_map(|p| {
                proj.point(p.hours, p.status).map(|at| PlottedPoint {
                    index: p.index,
                    at,
                })
            })
            .collect()
    }

    pub fn bands(&self) -> Vec<Band> {
        let Some(proj) = self.projection() else {
            return Vec::new();
        };
        self.timeline
            .intervals
            .iter()
            .filter_map(|i| trace::band_for(i, &proj, self.layout))
            .collect()
    }

    /// Event under the pointer, if any.
    pub fn hit_test(&self, pointer: Point) -> Option<HoverTarget> {
        let plotted = self.plotted_points();
        let hit = hit_test(pointer, &plotted, self.layout.hover_radius)?;
        let event = self.sheet.entries.get(hit.index)?;
        Some(HoverTarget::from_event(hit, event))
    }

    pub fn draw(&self, surface: &mut dyn Surface, hover: Option<&HoverTarget>) {
        surface.clear();

        frame::draw_frame(surface, self.layout, self.timeline.window);

        let Some(proj) = self.projection() else {
            draw_plot_message(surface, self.layout, "No time window for this day");
            return;
        };

        if self.sheet.entries.is_empty() {
            draw_plot_message(surface, self.layout, "No duty status events");
            return;
        }

        trace::draw_events(surface, self.layout, &proj, &self.timeline);

        if let Some(target) = hover {
            draw_tooltip(surface, self.layout, target);
        }
    }
}

/// Marker on the hovered event plus the tooltip line under the plot.
fn draw_tooltip(surface: &mut dyn Surface, layout: &ChartLayout, target: &HoverTarget) {
    let half = MARKER_SIZE / 2.0;
    surface.fill_rect(
        Rect::new(target.at.x - half, target.at.y - half, MARKER_SIZE, MARKER_SIZE),
        MARKER_COLOR,
    );

    let plot = layout.plot_area();
    let y = plot.bottom() + (layout.margins.bottom * 0.65).max(12.0);
    surface.text(Point::new(plot.x, y), &target.tooltip_text(), TOOLTIP);
}

fn draw_plot_message(surface: &mut dyn Surface, layout: &ChartLayout, message: &str) {
    let plot = layout.plot_area();
    surface.text(
        Point::new(plot.x + plot.w / 2.0, plot.y + plot.h / 2.0),
        message,
        PLACEHOLDER,
    );
}

/// Whole-surface placeholder used when there is no sheet to draw.
pub fn draw_placeholder(surface: &mut dyn Surface, message: &str) {
    surface.clear();
    let (w, h) = surface.size();
    surface.text(Point::new(w / 2.0, h / 2.0), message, PLACEHOLDER);
}
