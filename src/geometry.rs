use crate::error::ExportError;
use crate::units::Pt;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

/// ISO A4, converted from millimetres to points.
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
/// North-American letter paper.
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));

/// Margins bound the area of the page that text may be laid out in. There is
/// no control preventing over-wide fragments from overflowing the right
/// margin—the margins are guidelines for the layout engine, and are also used
/// to derive the content box of each generated page.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise
    /// fashion starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all(value: Pt) -> Margins {
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins by specifying different values for vertical (top and
    /// bottom) and horizontal (left and right) margins
    pub fn symmetric(vertical: Pt, horizontal: Pt) -> Margins {
        Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// The fixed geometry a document is laid out against: page size, margins,
/// the vertical advance per line, and the extra gap inserted after each
/// paragraph.
///
/// Geometry is validated once at construction; the layout engine itself
/// never fails, so a geometry that passed [`PageGeometry::new`] can be used
/// for any input text.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    pub page_size: PageSize,
    pub margins: Margins,
    pub line_height: Pt,
    pub paragraph_gap: Pt,
}

impl PageGeometry {
    /// Create a geometry, checking that the margins leave usable space in
    /// both dimensions. Margins that meet or cross in the middle of the page
    /// would make the wrapping loop degenerate, so they are rejected here
    /// rather than detected later.
    pub fn new(
        page_size: PageSize,
        margins: Margins,
        line_height: Pt,
        paragraph_gap: Pt,
    ) -> Result<PageGeometry, ExportError> {
        let (width, height) = page_size;
        if margins.left + margins.right >= width || margins.top + margins.bottom >= height {
            return Err(ExportError::MarginsTooLarge { width, height });
        }

        Ok(PageGeometry {
            page_size,
            margins,
            line_height,
            paragraph_gap,
        })
    }

    /// The geometry the application exports with: A4 paper, 50 pt margins on
    /// all sides, 20 pt lines, and a 5 pt gap between paragraphs.
    pub fn a4() -> PageGeometry {
        PageGeometry {
            page_size: A4,
            margins: Margins::all(Pt(50.0)),
            line_height: Pt(20.0),
            paragraph_gap: Pt(5.0),
        }
    }

    pub fn width(&self) -> Pt {
        self.page_size.0
    }

    pub fn height(&self) -> Pt {
        self.page_size.1
    }

    /// The horizontal budget for a single line of text: page width minus the
    /// left and right margins.
    pub fn usable_width(&self) -> Pt {
        self.width() - self.margins.left - self.margins.right
    }

    /// Where the first line of a page is placed: the page height minus the
    /// top margin.
    pub fn top_start(&self) -> Pt {
        self.height() - self.margins.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry_is_valid() {
        let geometry = PageGeometry::a4();
        assert_eq!(
            geometry.usable_width(),
            A4.0 - Pt(100.0),
            "usable width is the page width minus both margins"
        );
        assert_eq!(geometry.top_start(), A4.1 - Pt(50.0));
    }

    #[test]
    fn oversized_margins_are_rejected() {
        let result = PageGeometry::new(A4, Margins::all(Pt(300.0)), Pt(20.0), Pt(5.0));
        assert!(matches!(result, Err(ExportError::MarginsTooLarge { .. })));
    }

    #[test]
    fn margins_meeting_exactly_are_rejected() {
        let result = PageGeometry::new(
            (Pt(100.0), Pt(200.0)),
            Margins::all(Pt(50.0)),
            Pt(20.0),
            Pt(5.0),
        );
        assert!(result.is_err());
    }
}
