//! Pointer hit-testing and tooltip state.

use crate::models::StatusEvent;
use crate::render::Point;

/// A plotted event in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlottedPoint {
    pub index: usize, // position in `sheet.entries`
    pub at: Point,
}

/// The event under the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverTarget {
    pub event_index: usize,
    pub at: Point,
    pub event: StatusEvent,
}

impl HoverTarget {
    pub fn from_event(point: &PlottedPoint, event: &StatusEvent) -> Self {
        Self {
            event_index: point.index,
            at: point.at,
            event: event.clone(),
        }
    }

    /// `"<time> - <activity-or-status> (<location-or-N/A>)"`
    pub fn tooltip_text(&self) -> String {
        format!(
            "{} - {} ({})",
            self.event.time,
            self.event.label(),
            self.event.location_or_na()
        )
    }
}

/// Find the plotted point within `radius` pixels of the pointer on both axes.
///
/// Several candidates: the closest one (largest axis distance) wins, the
/// earliest event on ties. Linear in the number of points.
pub fn hit_test(pointer: Point, plotted: &[PlottedPoint], radius: f64) -> Option<&PlottedPoint> {
    let mut best: Option<(&PlottedPoint, f64)> = None;

    for p in plotted {
        let dx = (pointer.x - p.at.x).abs();
        let dy = (pointer.y - p.at.y).abs();
        // NaN distances fail both comparisons
        if !(dx < radius && dy < radius) {
            continue;
        }

        let dist = dx.max(dy);
        match best {
            Some((_, d)) if d <= dist => {}
            _ => best = Some((p, dist)),
        }
    }

    best.map(|(p, _)| p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DutyStatus;

    fn points() -> Vec<PlottedPoint> {
        vec![
            PlottedPoint {
                index: 0,
                at: Point::new(200.0, 100.0),
            },
            PlottedPoint {
                index: 1,
                at: Point::new(208.0, 100.0),
            },
            PlottedPoint {
                index: 2,
                at: Point::new(400.0, 250.0),
            },
        ]
    }

    #[test]
    fn within_radius_hits_and_fifteen_pixels_misses() {
        let pts = points();
        assert_eq!(hit_test(Point::new(405.0, 245.0), &pts, 10.0).unwrap().index, 2);
        assert!(hit_test(Point::new(415.0, 250.0), &pts, 10.0).is_none());
        assert!(hit_test(Point::new(400.0, 265.0), &pts, 10.0).is_none());
    }

    #[test]
    fn closest_candidate_wins_and_ties_go_to_the_earliest() {
        let pts = points();
        assert_eq!(hit_test(Point::new(207.0, 101.0), &pts, 10.0).unwrap().index, 1);
        assert_eq!(hit_test(Point::new(204.0, 100.0), &pts, 10.0).unwrap().index, 0);
    }

    #[test]
    fn non_finite_pointer_hits_nothing() {
        let pts = points();
        assert!(hit_test(Point::new(f64::NAN, f64::NAN), &pts, 10.0).is_none());
        assert!(hit_test(Point::new(200.0, f64::NAN), &pts, 10.0).is_none());
        assert!(hit_test(Point::new(f64::INFINITY, 100.0), &pts, 10.0).is_none());
    }

    #[test]
    fn tooltip_falls_back_to_status_and_na() {
        let ev = StatusEvent::new("10:00:00", DutyStatus::Driving);
        let p = PlottedPoint {
            index: 3,
            at: Point::new(0.0, 0.0),
        };
        assert_eq!(HoverTarget::from_event(&p, &ev).tooltip_text(), "10:00:00 - DR (N/A)");

        let blank = ev.clone().with_activity("  ").with_location("");
        assert_eq!(HoverTarget::from_event(&p, &blank).tooltip_text(), "10:00:00 - DR (N/A)");

        let ev = ev.with_activity("Fuel stop").with_location("Amarillo, TX");
        assert_eq!(
            HoverTarget::from_event(&p, &ev).tooltip_text(),
            "10:00:00 - Fuel stop (Amarillo, TX)"
        );
    }
}
