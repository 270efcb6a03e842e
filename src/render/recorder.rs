//! In-memory surface that records every draw call.
//!
//! Used by the JSON dump and by tests that need to inspect exactly what the
//! chart asked to draw.

use super::surface::{Color, Point, Rect, Surface, TextStyle};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear,
    FillRect {
        rect: Rect,
        color: String,
    },
    Polyline {
        points: Vec<Point>,
        color: String,
        width: f64,
    },
    Text {
        pos: Point,
        text: String,
        style: TextStyle,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// All filled rectangles with the given colour.
    pub fn rects_with_color(&self, color: Color) -> Vec<Rect> {
        let hex = color.hex();
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { rect, color } if *color == hex => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Every text string drawn, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn polylines_with_width(&self, width: f64) -> Vec<&[Point]> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Polyline { points, width: w, .. } if *w == width => {
                    Some(points.as_slice())
                }
                _ => None,
            })
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: color.hex(),
        });
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f64) {
        if points.len() < 2 {
            return;
        }
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            color: color.hex(),
            width,
        });
    }

    fn text(&mut self, pos: Point, text: &str, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_string(),
            style,
        });
    }
}
