//! Lays a block of plain text out against a page geometry, producing the
//! ordered placement commands a rendering backend draws from.
//!
//! The engine is deliberately dumb: paragraphs are split on newlines, words
//! are packed greedily into lines, and the cursor walks down the page until
//! it crosses the bottom margin, at which point the next line starts a fresh
//! page. It holds no state across calls and cannot fail; geometry is
//! validated once, up front, by [`PageGeometry`](crate::geometry::PageGeometry).

use crate::geometry::PageGeometry;
use crate::units::Pt;

/// The measurement capability the engine needs from the rendering side: a
/// pure function of a string (under some font and size the implementation
/// carries) to a width in page units. Keeping this behind a trait keeps the
/// engine independent of any particular font machinery.
pub trait MeasureText {
    /// The rendered width of `text` in page units.
    fn width_of(&self, text: &str) -> Pt;
}

/// An instruction to draw a specific text fragment at a specific coordinate
/// on a specific page. Placements are produced in strict top-to-bottom,
/// left-aligned order and carry everything the renderer needs to draw them.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementCommand {
    pub text: String,
    pub x: Pt,
    pub y: Pt,
    pub page: usize,
}

/// The complete result of one layout call: the placements in draw order,
/// plus how many pages the caller needs to materialize.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub placements: Vec<PlacementCommand>,
    pub page_count: usize,
}

/// The (page index, vertical offset) pair tracking where the next line will
/// be drawn. Scoped to a single layout call, never persisted.
struct Cursor {
    page: usize,
    y: Pt,
}

/// Flush one line at the cursor. A line that would start below the bottom
/// margin goes at the top of a fresh page instead; the cursor then advances
/// down by one line height.
fn flush_line(
    placements: &mut Vec<PlacementCommand>,
    cursor: &mut Cursor,
    geometry: &PageGeometry,
    text: String,
) {
    if cursor.y < geometry.margins.bottom {
        cursor.page += 1;
        cursor.y = geometry.top_start();
    }

    placements.push(PlacementCommand {
        text,
        x: geometry.margins.left,
        y: cursor.y,
        page: cursor.page,
    });

    cursor.y -= geometry.line_height;
}

/// Lay out a block of text against a page geometry.
///
/// Paragraphs are split on `'\n'` (after normalizing `"\r\n"` and `'\r'`).
/// Within a paragraph, words accumulate greedily: a word joins the current
/// line while `(line + " " + word)` still measures strictly less than the
/// usable width; at exactly the usable width the line wraps. The first word
/// of a line always enters the buffer, so a single word wider than the
/// usable width is emitted unclipped at the left margin rather than
/// rejected. A paragraph with no words still emits one empty line, keeping
/// blank lines visible in the output.
///
/// After each paragraph the cursor drops an extra paragraph gap below the
/// last line, so consecutive paragraphs sit line-height + gap apart.
pub fn layout_text<M: MeasureText>(text: &str, geometry: &PageGeometry, metrics: &M) -> Layout {
    let usable_width = geometry.usable_width();

    let mut cursor = Cursor {
        page: 0,
        y: geometry.top_start(),
    };
    let mut placements: Vec<PlacementCommand> = Vec::new();

    // normalize newlines
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    for paragraph in text.split('\n') {
        let mut words = paragraph.split_whitespace();
        match words.next() {
            None => flush_line(&mut placements, &mut cursor, geometry, String::new()),
            Some(first) => {
                let mut line = String::from(first);
                for word in words {
                    let candidate = format!("{line} {word}");
                    if metrics.width_of(&candidate) < usable_width {
                        line = candidate;
                    } else {
                        flush_line(&mut placements, &mut cursor, geometry, line);
                        line = word.to_string();
                    }
                }
                flush_line(&mut placements, &mut cursor, geometry, line);
            }
        }

        cursor.y -= geometry.paragraph_gap;
    }

    Layout {
        page_count: cursor.page + 1,
        placements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{BuiltinFont, FontMetrics};
    use crate::geometry::{Margins, PageGeometry};

    /// Every character advances by the same amount, making expected line
    /// breaks easy to pin down.
    struct CharAdvance(Pt);

    impl MeasureText for CharAdvance {
        fn width_of(&self, text: &str) -> Pt {
            self.0 * text.chars().count() as f32
        }
    }

    fn narrow_geometry(width: f32, height: f32) -> PageGeometry {
        PageGeometry::new(
            (Pt(width), Pt(height)),
            Margins::all(Pt(50.0)),
            Pt(20.0),
            Pt(5.0),
        )
        .expect("test geometry is valid")
    }

    #[test]
    fn two_short_words_share_one_line() {
        let geometry = PageGeometry::a4();
        let metrics = FontMetrics::new(BuiltinFont::Helvetica, Pt(12.0));

        let layout = layout_text("hello world", &geometry, &metrics);

        assert_eq!(layout.page_count, 1);
        assert_eq!(layout.placements.len(), 1);
        let placement = &layout.placements[0];
        assert_eq!(placement.text, "hello world");
        assert_eq!(placement.x, Pt(50.0));
        assert_eq!(placement.y, geometry.top_start());
        assert_eq!(placement.page, 0);
    }

    #[test]
    fn wrapping_is_lossless() {
        // usable width 100 pt, 10 pt per character
        let geometry = narrow_geometry(200.0, 800.0);
        let metrics = CharAdvance(Pt(10.0));
        let text = "one two three four five six seven eight nine ten";

        let layout = layout_text(text, &geometry, &metrics);

        for placement in &layout.placements {
            assert!(metrics.width_of(&placement.text) < geometry.usable_width());
        }
        let rejoined = layout
            .placements
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(rejoined, text);
    }

    #[test]
    fn a_line_measuring_exactly_the_usable_width_wraps() {
        // usable width 50 pt; "aa bb" measures exactly 50 pt
        let geometry = narrow_geometry(150.0, 800.0);
        let metrics = CharAdvance(Pt(10.0));

        let layout = layout_text("aa bb", &geometry, &metrics);

        let fragments: Vec<&str> = layout.placements.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(fragments, vec!["aa", "bb"]);
    }

    #[test]
    fn paragraphs_are_separated_by_line_height_plus_gap() {
        // integer-valued geometry keeps the coordinate arithmetic exact
        let geometry = narrow_geometry(400.0, 800.0);
        let metrics = FontMetrics::new(BuiltinFont::Helvetica, Pt(12.0));

        let layout = layout_text("alpha\nbeta", &geometry, &metrics);

        assert_eq!(layout.placements.len(), 2);
        assert_eq!(layout.placements[0].page, 0);
        assert_eq!(layout.placements[1].page, 0);
        assert_eq!(layout.placements[0].y, Pt(750.0));
        assert_eq!(layout.placements[1].y, Pt(725.0));
    }

    #[test]
    fn an_empty_paragraph_still_emits_a_line() {
        let geometry = narrow_geometry(400.0, 800.0);
        let metrics = FontMetrics::new(BuiltinFont::Helvetica, Pt(12.0));

        let layout = layout_text("alpha\n\nbeta", &geometry, &metrics);

        assert_eq!(layout.placements.len(), 3);
        assert_eq!(layout.placements[1].text, "");
        // the blank line occupies the same vertical space as any other
        assert_eq!(layout.placements[1].y, Pt(725.0));
        assert_eq!(layout.placements[2].y, Pt(700.0));
    }

    #[test]
    fn an_over_wide_word_is_placed_at_the_left_margin() {
        // usable width 100 pt; the word alone measures 320 pt
        let geometry = narrow_geometry(200.0, 800.0);
        let metrics = CharAdvance(Pt(10.0));

        let layout = layout_text("incomprehensibilities aa", &geometry, &metrics);

        let fragments: Vec<&str> = layout.placements.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(fragments, vec!["incomprehensibilities", "aa"]);
        assert_eq!(layout.placements[0].x, Pt(50.0));
    }

    #[test]
    fn the_page_breaks_before_the_offending_line() {
        // top start at 70 pt; lines fit at 70 and 50, the third line crosses
        // the 50 pt bottom margin and must open page 1 at the top start
        let geometry = narrow_geometry(200.0, 120.0);
        let metrics = CharAdvance(Pt(30.0));

        let layout = layout_text("aa bb cc", &geometry, &metrics);

        let placed: Vec<(usize, Pt)> = layout.placements.iter().map(|p| (p.page, p.y)).collect();
        assert_eq!(
            placed,
            vec![(0, Pt(70.0)), (0, Pt(50.0)), (1, Pt(70.0))],
            "the line at y = 30 would cross the bottom margin, so it moves to page 1"
        );
        assert_eq!(layout.page_count, 2);
    }

    #[test]
    fn no_line_is_placed_below_the_bottom_margin() {
        let geometry = PageGeometry::a4();
        let metrics = FontMetrics::new(BuiltinFont::Helvetica, Pt(12.0));
        let text = lipsum::lipsum(2000);

        let layout = layout_text(&text, &geometry, &metrics);

        assert!(layout.page_count > 1, "2000 words should not fit one page");
        for placement in &layout.placements {
            assert!(placement.y >= geometry.margins.bottom);
            assert!(placement.page < layout.page_count);
        }
    }

    #[test]
    fn layout_is_idempotent() {
        let geometry = PageGeometry::a4();
        let metrics = FontMetrics::new(BuiltinFont::Helvetica, Pt(12.0));
        let text = lipsum::lipsum(500);

        let first = layout_text(&text, &geometry, &metrics);
        let second = layout_text(&text, &geometry, &metrics);

        assert_eq!(first, second);
    }

    #[test]
    fn windows_line_endings_are_normalized() {
        let geometry = PageGeometry::a4();
        let metrics = FontMetrics::new(BuiltinFont::Helvetica, Pt(12.0));

        let unix = layout_text("alpha\nbeta", &geometry, &metrics);
        let windows = layout_text("alpha\r\nbeta", &geometry, &metrics);

        assert_eq!(unix, windows);
    }
}
