//! Static layer: background, hour grid, lane guides and lane labels.
//! Depends on the window and the lane table only, never on events.

use super::lanes::STATUS_LANES;
use super::layout::{ChartLayout, Projection, TimeWindow};
use crate::render::{Color, Point, Surface, TextAlign, TextStyle};
use crate::utils::time::hour_label;

pub const PLOT_BACKGROUND: Color = Color::rgb(0xf9, 0xf9, 0xf9);
pub const GRID_COLOR: Color = Color::rgb(0xdd, 0xdd, 0xdd);
pub const LANE_GUIDE_COLOR: Color = Color::rgb(0xcc, 0xcc, 0xcc);

const HOUR_LABEL: TextStyle = TextStyle {
    size: 12.0,
    color: Color::rgb(0x33, 0x33, 0x33),
    align: TextAlign::Center,
};

const LANE_LABEL: TextStyle = TextStyle {
    size: 14.0,
    color: Color::rgb(0, 0, 0),
    align: TextAlign::Right,
};

pub fn draw_frame(surface: &mut dyn Surface, layout: &ChartLayout, window: Option<TimeWindow>) {
    let plot = layout.plot_area();

    surface.fill_rect(plot, PLOT_BACKGROUND);

    // hour gridlines only make sense on a real window
    if let Some(window) = window {
        let proj = Projection::new(layout, window);
        let start_hour = window.start_hour_of_day();

        for h in window.whole_hours() {
            let x = proj.x(h as f64);
            surface.line(
                Point::new(x, plot.y),
                Point::new(x, plot.bottom()),
                GRID_COLOR,
                1.0,
            );
            surface.text(
                Point::new(x, plot.y - 10.0),
                &hour_label(start_hour, h),
                HOUR_LABEL,
            );
        }
    }

    for lane in &STATUS_LANES {
        let y = plot.y + plot.h * lane.fraction;
        surface.line(
            Point::new(plot.x, y),
            Point::new(plot.right(), y),
            LANE_GUIDE_COLOR,
            1.0,
        );
    }

    for lane in &STATUS_LANES {
        let y = plot.y + plot.h * lane.fraction;
        surface.text(Point::new(plot.x - 10.0, y + 5.0), lane.label, LANE_LABEL);
    }
}
