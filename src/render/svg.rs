//! SVG surface: accumulates elements as text and writes a standalone document.

use super::surface::{Color, Point, Rect, Surface, TextAlign, TextStyle};

pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    /// Complete SVG document (white page, thin border like the dashboard canvas).
    pub fn finish(&self) -> String {
        let mut svg = String::new();
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="Arial, Helvetica, sans-serif">"#,
            w = fmt_num(self.width),
            h = fmt_num(self.height)
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r##"  <rect x="0" y="0" width="{}" height="{}" fill="#ffffff" stroke="#dddddd" stroke-width="1"/>"##,
            fmt_num(self.width),
            fmt_num(self.height)
        ));
        svg.push('\n');
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }
}

impl Surface for SvgSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.body.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.body.push_str(&format!(
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            fmt_num(rect.x),
            fmt_num(rect.y),
            fmt_num(rect.w.max(0.0)),
            fmt_num(rect.h.max(0.0)),
            color.hex()
        ));
        self.body.push('\n');
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f64) {
        if points.len() < 2 {
            return;
        }
        let pts: Vec<String> = points
            .iter()
            .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
            .collect();
        self.body.push_str(&format!(
            r#"  <polyline points="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linejoin="miter"/>"#,
            pts.join(" "),
            color.hex(),
            fmt_num(width)
        ));
        self.body.push('\n');
    }

    fn text(&mut self, pos: Point, text: &str, style: TextStyle) {
        let anchor = match style.align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        };
        self.body.push_str(&format!(
            r#"  <text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}">{}</text>"#,
            fmt_num(pos.x),
            fmt_num(pos.y),
            fmt_num(style.size),
            style.color.hex(),
            anchor,
            xml_escape(text)
        ));
        self.body.push('\n');
    }
}

/// Two decimals, trailing zeros dropped.
fn fmt_num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_compact() {
        assert_eq!(fmt_num(170.0), "170");
        assert_eq!(fmt_num(12.3456), "12.35");
        assert_eq!(fmt_num(-0.001), "0");
    }

    #[test]
    fn text_is_escaped_and_anchored() {
        let mut s = SvgSurface::new(100.0, 50.0);
        s.text(
            Point::new(10.0, 20.0),
            "Fuel & <rest>",
            TextStyle {
                size: 12.0,
                color: Color::rgb(0, 0, 0),
                align: TextAlign::Right,
            },
        );
        let doc = s.finish();
        assert!(doc.starts_with("<svg"));
        assert!(doc.contains("Fuel &amp; &lt;rest&gt;"));
        assert!(doc.contains(r#"text-anchor="end""#));
        assert!(doc.trim_end().ends_with("</svg>"));
    }
}
