//! Drawing backends for the timeline chart.

pub mod pdf;
pub mod recorder;
pub mod surface;
pub mod svg;

pub use pdf::{PdfManager, PdfPage};
pub use recorder::{DrawCommand, RecordingSurface};
pub use surface::{Color, Point, Rect, Surface, TextAlign, TextStyle};
pub use svg::SvgSurface;
