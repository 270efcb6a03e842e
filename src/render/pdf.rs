use super::surface::{Color, Point, Rect, Surface, TextAlign, TextStyle};
use pdf_writer::{Content, Name, Pdf, Ref};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Multi-page PDF document, one chart per page.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,

    page_w: f32,
    page_h: f32,

    next_id: i32,
    font_id: Ref,
}

/// A page being drawn. Implements `Surface` in top-left pixel coordinates and
/// flips y for PDF user space.
pub struct PdfPage {
    content: Content,
    content_id: Ref,
    page_w: f32,
    page_h: f32,
}

impl PdfManager {
    pub fn new(page_w: f64, page_h: f64) -> Self {
        let mut pdf = Pdf::new();

        // ID gestiti a mano
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            page_w: page_w as f32,
            page_h: page_h as f32,
            next_id,
            font_id,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Create a new page and hand back its drawing surface.
    pub fn begin_page(&mut self) -> PdfPage {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(pdf_writer::Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        PdfPage {
            content: Content::new(),
            content_id,
            page_w: self.page_w,
            page_h: self.page_h,
        }
    }

    /// Write the content stream of a finished page.
    pub fn finish_page(&mut self, page: PdfPage) {
        self.pdf.stream(page.content_id, &page.content.finish());
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
        drop(pages);

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

impl PdfPage {
    fn flip(&self, y: f64) -> f32 {
        self.page_h - y as f32
    }

    /// Helvetica has no metrics here: half the font size per glyph is close
    /// enough for centred and right-aligned labels.
    fn approx_text_width(text: &str, size: f64) -> f64 {
        text.chars().count() as f64 * size * 0.5
    }
}

impl Surface for PdfPage {
    fn size(&self) -> (f64, f64) {
        (self.page_w as f64, self.page_h as f64)
    }

    fn clear(&mut self) {
        self.fill_rect(
            Rect::new(0.0, 0.0, self.page_w as f64, self.page_h as f64),
            Color::rgb(255, 255, 255),
        );
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (r, g, b) = color.unit();
        let bottom = self.flip(rect.bottom());
        self.content.save_state();
        self.content.set_fill_rgb(r, g, b);
        self.content
            .rect(rect.x as f32, bottom, rect.w.max(0.0) as f32, rect.h as f32);
        self.content.fill_nonzero();
        self.content.restore_state();
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f64) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        if rest.is_empty() {
            return;
        }

        let (r, g, b) = color.unit();
        let start_y = self.flip(first.y);
        self.content.save_state();
        self.content.set_stroke_rgb(r, g, b);
        self.content.set_line_width(width as f32);
        self.content.move_to(first.x as f32, start_y);
        for p in rest {
            let y = self.flip(p.y);
            self.content.line_to(p.x as f32, y);
        }
        self.content.stroke();
        self.content.restore_state();
    }

    fn text(&mut self, pos: Point, text: &str, style: TextStyle) {
        let x = match style.align {
            TextAlign::Left => pos.x,
            TextAlign::Center => pos.x - Self::approx_text_width(text, style.size) / 2.0,
            TextAlign::Right => pos.x - Self::approx_text_width(text, style.size),
        };
        let y = self.flip(pos.y);
        let (r, g, b) = style.color.unit();

        self.content.save_state();
        self.content.set_fill_rgb(r, g, b);
        self.content.begin_text();
        self.content.set_font(Name(b"F1"), style.size as f32);
        self.content
            .set_text_matrix([1.0, 0.0, 0.0, 1.0, x as f32, y]);
        self.content.show(pdf_writer::Str(text.as_bytes()));
        self.content.end_text();
        self.content.restore_state();
    }
}
