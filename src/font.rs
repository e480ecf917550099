use crate::layout::MeasureText;
use crate::units::Pt;

/// The standard base fonts text can be set in. These are the "standard 14"
/// families every PDF reader ships metrics and glyphs for, so the generated
/// document references them by name instead of embedding a font program.
///
/// Widths come from the Adobe core AFM tables, expressed in thousandths of
/// an em, so measuring text is a pure function of the string and the font
/// size, matching the model the PDF reader will use when drawing.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum BuiltinFont {
    #[default]
    Helvetica,
    Courier,
}

/// Glyphs outside the printable ASCII range are measured with a nominal
/// advance rather than rejected; the content stream substitutes a
/// replacement glyph for them when drawing.
const HELVETICA_FALLBACK_ADVANCE: u16 = 556;

/// Helvetica advance widths for characters 0x20..=0x7E, in thousandths of an
/// em, per the Adobe core AFM (WinAnsi widths).
#[rustfmt::skip]
const HELVETICA_ADVANCES: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, // ' ' ! " # $ % & ' ( )
    389, 584, 278, 333, 278, 278,                     // * + , - . /
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0-9
    278, 278, 584, 584, 584, 556, 1015,               // : ; < = > ? @
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, // A-J
    667, 556, 833, 722, 778, 667, 778, 722, 667, 611, // K-T
    722, 667, 944, 667, 667, 611,                     // U-Z
    278, 278, 278, 469, 556, 333,                     // [ \ ] ^ _ `
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, // a-j
    500, 222, 833, 556, 556, 556, 556, 333, 500, 278, // k-t
    556, 500, 722, 500, 500, 500,                     // u-z
    334, 260, 334, 584,                               // { | } ~
];

/// Courier is fixed-pitch: every glyph advances by the same amount.
const COURIER_ADVANCE: u16 = 600;

impl BuiltinFont {
    /// The `BaseFont` name written into the PDF font dictionary.
    pub fn base_name(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::Courier => "Courier",
        }
    }

    /// The advance width of a single glyph, in thousandths of an em.
    pub fn advance(&self, ch: char) -> u16 {
        match self {
            BuiltinFont::Helvetica => (ch as u32)
                .checked_sub(0x20)
                .and_then(|i| HELVETICA_ADVANCES.get(i as usize))
                .copied()
                .unwrap_or(HELVETICA_FALLBACK_ADVANCE),
            BuiltinFont::Courier => COURIER_ADVANCE,
        }
    }
}

/// A builtin font paired with a size, giving the layout engine its width
/// measurement capability.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FontMetrics {
    pub font: BuiltinFont,
    pub size: Pt,
}

impl FontMetrics {
    pub fn new(font: BuiltinFont, size: Pt) -> FontMetrics {
        FontMetrics { font, size }
    }
}

impl MeasureText for FontMetrics {
    /// Calculate the rendered width of a string of text in page units.
    fn width_of(&self, text: &str) -> Pt {
        text.chars()
            .map(|ch| self.size * (self.font.advance(ch) as f32 / 1000.0))
            .sum()
    }
}
