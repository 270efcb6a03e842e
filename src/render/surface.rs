//! Drawing surface abstraction: the pixel-space primitives the chart needs.
//!
//! Coordinates are logical pixels, origin at the top-left corner, y growing
//! downwards (canvas convention). Backends that use another convention (PDF)
//! flip on their side.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Components in 0.0..=1.0, as PDF operators want them.
    pub fn unit(&self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    pub size: f64,
    pub color: Color,
    pub align: TextAlign,
}

/// A 2D drawing target. Every chart draw is issued through this trait.
pub trait Surface {
    /// Logical size in pixels (width, height).
    fn size(&self) -> (f64, f64);

    /// Wipe the whole surface.
    fn clear(&mut self);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke an open polyline; two points make a plain line.
    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f64);

    /// Draw text with its baseline anchored at `pos`.
    fn text(&mut self, pos: Point, text: &str, style: TextStyle);

    fn line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        self.stroke_polyline(&[from, to], color, width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_hex_and_unit() {
        let c = Color::rgb(0xd4, 0xed, 0xda);
        assert_eq!(c.hex(), "#d4edda");
        let (r, _, b) = Color::rgb(255, 0, 51).unit();
        assert_eq!(r, 1.0);
        assert!((b - 0.2).abs() < 1e-6);
    }
}
