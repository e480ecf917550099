use crate::units::Pt;
use thiserror::Error;

/// All errors that an export can produce
#[derive(Error, Debug)]
pub enum ExportError {
    /// The user attempted to export with no text; the export is aborted
    /// before any layout work happens
    #[error("nothing to export: the document contains no text")]
    EmptyDocument,

    /// The configured margins leave no usable space on the page
    #[error("margins do not fit within a {width} pt x {height} pt page")]
    MarginsTooLarge { width: Pt, height: Pt },

    /// A page listed in the page order was not present in the document
    #[error("the document is missing a page")]
    PageMissing,

    #[error(transparent)]
    /// An I/O error occurred while writing the output file
    Io(#[from] std::io::Error),
}
