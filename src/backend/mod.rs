//! The page-extraction seam between the harvester and a PDF library.
//!
//! The harvester only needs two things from a PDF library: open a file, and
//! return the plain text of page *n*. [`PdfBackend`] and [`PageSource`]
//! capture exactly that, so the run loop and its output format can be
//! exercised without the native pdfium library present.

pub mod pdfium;

use crate::error::FileError;
use std::path::Path;

pub use self::pdfium::PdfiumBackend;

/// Opens PDF documents for page-by-page text extraction.
pub trait PdfBackend {
    /// Open the PDF at `path`, decrypting with `password` when given.
    ///
    /// The returned source may borrow from both the backend and the
    /// password for as long as it is alive.
    fn open<'a>(
        &'a self,
        path: &Path,
        password: Option<&'a str>,
    ) -> Result<Box<dyn PageSource + 'a>, FileError>;
}

/// An opened document whose pages can be read in order.
pub trait PageSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Plain text of the page at 0-based `index`.
    ///
    /// `Ok(None)` means the page has no extractable text (for example a
    /// scanned image without a text layer).
    fn page_text(&mut self, index: usize) -> Result<Option<String>, FileError>;
}
