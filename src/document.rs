use crate::error::ExportError;
use crate::font::BuiltinFont;
use crate::info::Info;
use crate::page::Page;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf, Ref};
use std::io::Write;

/// A document is the main object that stores all the contents of the PDF,
/// then renders it out with a call to [Document::write].
///
/// All text in the document is set in a single builtin font at a single
/// size; the font is written once and shared by every page's resources.
pub struct Document {
    pub info: Option<Info>,
    pub font: BuiltinFont,
    pub font_size: Pt,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
}

impl Document {
    pub fn new(font: BuiltinFont, font_size: Pt) -> Document {
        Document {
            info: None,
            font,
            font_size,
            pages: Arena::new(),
            page_order: Vec::new(),
        }
    }

    /// Sets information about the document. If not provided, no information
    /// block will be written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its id within the
    /// document. The id stays valid as long as pages are never removed.
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Write the entire document to the writer. The document is rendered in
    /// memory first; references are resolved here, so pages can be added or
    /// edited freely up until this call.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), ExportError> {
        let Document {
            info,
            font,
            font_size,
            pages,
            page_order,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        // generate page refs keyed by page_order index so pages can be
        // referenced by their position in the document
        let page_refs: Vec<Ref> = page_order
            .iter()
            .enumerate()
            .map(|(i, _id)| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        // standard-14 base font: referenced by name, nothing embedded
        let font_ref = refs.gen(RefType::Font(0));
        let mut type1 = writer.type1_font(font_ref);
        type1.base_font(Name(font.base_name().as_bytes()));
        type1.encoding_predefined(Name(b"WinAnsiEncoding"));
        type1.finish();

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(ExportError::PageMissing)?;
            page.write(&mut refs, page_index, font_size, &mut writer)?;
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Margins, LETTER};
    use crate::page::TextSpan;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn a_one_page_document_round_trips_to_bytes() {
        let mut doc = Document::new(BuiltinFont::Helvetica, Pt(12.0));
        let mut page = Page::new(LETTER, &Margins::all(Pt(50.0)));
        page.add_span(TextSpan {
            text: "hello world".into(),
            x: Pt(50.0),
            y: Pt(742.0),
        });
        doc.add_page(page);

        let mut out: Vec<u8> = Vec::new();
        doc.write(&mut out).expect("writing to a vec succeeds");

        assert!(out.starts_with(b"%PDF-"));
        assert!(contains(&out, b"/Helvetica"));
        assert!(contains(&out, b"/WinAnsiEncoding"));
        assert!(contains(&out, b"/Count 1"));
    }

    #[test]
    fn an_info_block_is_written_when_set() {
        let mut doc = Document::new(BuiltinFont::Helvetica, Pt(12.0));
        let mut info = Info::new();
        info.title("notes");
        doc.set_info(info);
        doc.add_page(Page::new(LETTER, &Margins::all(Pt(50.0))));

        let mut out: Vec<u8> = Vec::new();
        doc.write(&mut out).expect("writing to a vec succeeds");

        assert!(contains(&out, b"/Title"));
        assert!(contains(&out, b"/CreationDate"));
    }
}
