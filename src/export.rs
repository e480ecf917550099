use crate::document::Document;
use crate::error::ExportError;
use crate::font::{BuiltinFont, FontMetrics};
use crate::geometry::PageGeometry;
use crate::info::Info;
use crate::layout::layout_text;
use crate::page::{Page, TextSpan};
use crate::units::Pt;
use std::fs::File;
use std::path::{Path, PathBuf};

/// What a successful export produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub pages: usize,
}

/// Export a block of text to a paginated PDF at `path`.
///
/// Empty and whitespace-only input is rejected before any layout work
/// happens. Layout itself cannot fail; any later error comes from creating
/// or writing the output file. The file handle is dropped when this returns
/// whether or not writing succeeded, so a failed export may leave a partial
/// file behind.
pub fn export_text(
    text: &str,
    path: &Path,
    geometry: &PageGeometry,
    font: BuiltinFont,
    font_size: Pt,
) -> Result<ExportSummary, ExportError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ExportError::EmptyDocument);
    }

    log::info!("exporting {} bytes of text to {}", text.len(), path.display());

    let metrics = FontMetrics::new(font, font_size);
    let layout = layout_text(text, geometry, &metrics);

    let mut document = Document::new(font, font_size);
    let mut info = Info::new();
    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
        info.title(stem);
    }
    document.set_info(info);

    // materialize every page the cursor touched, so the document and the
    // layout agree on the page count, then map each placement onto its page
    let mut pages: Vec<Page> = (0..layout.page_count)
        .map(|_| Page::new(geometry.page_size, &geometry.margins))
        .collect();
    for placement in layout.placements {
        pages[placement.page].add_span(TextSpan {
            text: placement.text,
            x: placement.x,
            y: placement.y,
        });
    }
    for page in pages {
        document.add_page(page);
    }

    let page_count = document.page_count();
    let file = File::create(path)?;
    document.write(file)?;

    log::info!("wrote {} page(s) to {}", page_count, path.display());

    Ok(ExportSummary {
        path: path.to_path_buf(),
        pages: page_count,
    })
}
