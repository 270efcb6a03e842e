//! Event layer: one filled band per status interval plus the step trace.

use super::lanes::lane_for;
use super::layout::{ChartLayout, Projection};
use crate::core::calculator::timeline::{StatusInterval, Timeline};
use crate::models::DutyStatus;
use crate::render::{Color, Point, Rect, Surface};

pub const TRACE_COLOR: Color = Color::rgb(0x33, 0x33, 0x33);

/// A band in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub status: DutyStatus,
    pub rect: Rect,
    pub color: Color,
}

pub fn band_for(
    interval: &StatusInterval,
    proj: &Projection,
    layout: &ChartLayout,
) -> Option<Band> {
    let lane = lane_for(interval.status)?;
    let y = proj.y(interval.status)?;
    let x0 = proj.x(interval.start);
    let x1 = proj.x(interval.end);
    let half = layout.band_thickness / 2.0;

    Some(Band {
        status: interval.status,
        rect: Rect::new(x0, y - half, x1 - x0, layout.band_thickness),
        color: lane.color,
    })
}

pub fn trace_points(timeline: &Timeline, proj: &Projection) -> Vec<Vec<Point>> {
    timeline
        .paths
        .iter()
        .map(|path| {
            path.iter()
                .filter_map(|v| proj.point(v.hours, v.status))
                .collect::<Vec<Point>>()
        })
        .filter(|pts| pts.len() >= 2)
        .collect()
}

pub fn draw_events(
    surface: &mut dyn Surface,
    layout: &ChartLayout,
    proj: &Projection,
    timeline: &Timeline,
) {
    for interval in &timeline.intervals {
        if let Some(band) = band_for(interval, proj, layout) {
            surface.fill_rect(band.rect, band.color);
        }
    }

    for pts in trace_points(timeline, proj) {
        surface.stroke_polyline(&pts, TRACE_COLOR, layout.trace_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chart::layout::TimeWindow;

    fn interval(status: DutyStatus) -> StatusInterval {
        StatusInterval {
            status,
            start: 0.0,
            end: 4.0,
            event_index: 0,
            trailing: false,
        }
    }

    #[test]
    fn band_takes_lane_color_and_unknown_gets_none() {
        let layout = ChartLayout::default();
        let proj = Projection::new(&layout, TimeWindow::new(6.0, 18.0).unwrap());

        let band = band_for(&interval(DutyStatus::SleeperBerth), &proj, &layout).unwrap();
        assert_eq!(band.color.hex(), "#f8d7da");
        assert_eq!(band.rect.h, layout.band_thickness);

        assert!(band_for(&interval(DutyStatus::Unknown), &proj, &layout).is_none());
    }
}
