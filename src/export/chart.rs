// src/export/chart.rs

use crate::core::chart::Chart;
use crate::core::chart::layout::ChartLayout;
use crate::errors::{AppError, AppResult};
use crate::export::{RenderFormat, notify_export_success};
use crate::models::LogSheet;
use crate::render::{PdfManager, RecordingSurface, Surface, SvgSurface};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Draw one picture with `draw` and write it to `path` in `format`.
pub(crate) fn write_chart<F>(
    format: RenderFormat,
    path: &Path,
    layout: &ChartLayout,
    draw: F,
) -> AppResult<()>
where
    F: FnOnce(&mut dyn Surface),
{
    info(format!(
        "Rendering {} chart: {}",
        format.as_str().to_uppercase(),
        path.display()
    ));

    match format {
        RenderFormat::Svg => {
            let mut svg = SvgSurface::new(layout.width, layout.height);
            draw(&mut svg);
            fs::write(path, svg.finish())?;
            notify_export_success("SVG", path);
        }
        RenderFormat::Json => {
            let mut rec = RecordingSurface::new(layout.width, layout.height);
            draw(&mut rec);
            let json = rec
                .to_json()
                .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
            fs::write(path, json)?;
            notify_export_success("JSON", path);
        }
        RenderFormat::Pdf => {
            let mut pdf = PdfManager::new(layout.width, layout.height);
            let mut page = pdf.begin_page();
            draw(&mut page);
            pdf.finish_page(page);
            pdf.save(path)
                .map_err(|e| AppError::Export(format!("PDF write error: {e}")))?;
            notify_export_success("PDF", path);
        }
    }

    Ok(())
}

/// One PDF page per sheet, in trip order.
pub(crate) fn write_pdf_pages(
    path: &Path,
    layout: &ChartLayout,
    sheets: &[LogSheet],
) -> AppResult<usize> {
    info(format!("Rendering PDF, one page per day: {}", path.display()));

    let mut pdf = PdfManager::new(layout.width, layout.height);
    for sheet in sheets {
        let mut page = pdf.begin_page();
        Chart::new(layout, sheet).draw(&mut page, None);
        pdf.finish_page(page);
    }

    let pages = pdf.page_count();
    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF write error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(pages)
}
