use crate::error::ExportError;
use crate::geometry::{Margins, PageSize};
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use pdf_writer::{Filter, Finish, Name, Pdf};
use std::io::Write;

/// A text fragment placed at a fixed position on a page. The coordinates are
/// the text-space origin of the fragment: its left edge, on the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    pub text: String,
    pub x: Pt,
    pub y: Pt,
}

/// A single page of laid-out text.
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// The placed text, in draw order
    pub spans: Vec<TextSpan>,
}

impl Page {
    pub fn new(size: PageSize, margins: &Margins) -> Page {
        let (width, height) = size;
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            spans: Vec::default(),
        }
    }

    pub fn add_span(&mut self, span: TextSpan) {
        self.spans.push(span);
    }

    /// Render the page's spans into a PDF content stream. The font is set
    /// once up front; each span then gets its own `BT`..`ET` block.
    #[allow(clippy::write_with_newline)]
    fn render(&self, size: Pt) -> Result<Vec<u8>, std::io::Error> {
        if self.spans.is_empty() {
            return Ok(Vec::default());
        }

        let mut content: Vec<u8> = Vec::default();

        write!(&mut content, "q\n")?;
        write!(&mut content, "/F0 {} Tf\n", size)?;
        for span in self.spans.iter() {
            write!(&mut content, "BT\n")?;
            write!(&mut content, "{} {} Td\n", span.x, span.y)?;
            content.push(b'(');
            escape_literal(&span.text, &mut content);
            write!(&mut content, ") Tj\n")?;
            write!(&mut content, "ET\n")?;
        }
        write!(&mut content, "Q\n")?;

        Ok(content)
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        font_size: Pt,
        writer: &mut Pdf,
    ) -> Result<(), ExportError> {
        let id = refs.get(RefType::Page(page_index)).unwrap();
        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(refs.get(RefType::PageTree).unwrap());

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        resource_fonts.pair(Name(b"F0"), refs.get(RefType::Font(0)).unwrap());
        resource_fonts.finish();
        resources.finish();

        let content_id = refs.gen(RefType::ContentForPage(page_index));
        page.contents(content_id);
        page.finish();

        let rendered = self.render(font_size)?;
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            rendered.as_slice(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(content_id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        Ok(())
    }
}

/// Escape a text fragment into a PDF literal string. Backslashes and
/// parentheses get a backslash prefix; code points beyond Latin-1 have no
/// encoding under WinAnsi and are replaced with `?`, matching the nominal
/// advance the metrics assigned them.
fn escape_literal(text: &str, out: &mut Vec<u8>) {
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                out.push(b'\\');
                out.push(ch as u8);
            }
            _ if (ch as u32) <= 0xFF => out.push(ch as u8),
            _ => out.push(b'?'),
        }
    }
}
