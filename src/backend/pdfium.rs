//! pdfium-render implementation of [`PdfBackend`].
//!
//! One [`Pdfium`] instance is bound per run and every document borrows it.
//! Documents are loaded straight from their path; page text comes from
//! `PdfPageText::all`, which returns pdfium's best-effort reading of the
//! page's text objects.

use super::{PageSource, PdfBackend};
use crate::error::{FileError, HarvestError};
use pdfium_render::prelude::{PdfDocument, Pdfium, PdfiumError};
use std::path::Path;
use tracing::debug;

/// Text extraction through the pdfium C++ library.
pub struct PdfiumBackend {
    pdfium: Pdfium,
}

impl PdfiumBackend {
    /// Wrap an already-bound pdfium instance.
    pub fn new(pdfium: Pdfium) -> Self {
        Self { pdfium }
    }

    /// Bind pdfium via the `pdfium-bind` search order, preferring `library`
    /// when given.
    pub fn bind(library: Option<&Path>) -> Result<Self, HarvestError> {
        let pdfium = pdfium_bind::bind_pdfium(library)?;
        debug!("Bound pdfium: {:?}", pdfium_bind::resolved_library());
        Ok(Self::new(pdfium))
    }
}

/// Map a pdfium load failure to a per-file error.
///
/// pdfium reports bad and missing passwords through the same internal error,
/// so whether a password was supplied decides which one it was.
fn classify_load_error(err: &PdfiumError, password_given: bool) -> FileError {
    let detail = format!("{:?}", err);
    if detail.contains("Password") || detail.contains("password") {
        if password_given {
            FileError::WrongPassword
        } else {
            FileError::PasswordRequired
        }
    } else {
        FileError::Open { detail }
    }
}

impl PdfBackend for PdfiumBackend {
    fn open<'a>(
        &'a self,
        path: &Path,
        password: Option<&'a str>,
    ) -> Result<Box<dyn PageSource + 'a>, FileError> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, password)
            .map_err(|e| classify_load_error(&e, password.is_some()))?;

        debug!(
            "Opened {} ({} pages)",
            path.display(),
            document.pages().len()
        );
        Ok(Box::new(PdfiumPages { document }))
    }
}

/// An open pdfium document.
struct PdfiumPages<'a> {
    document: PdfDocument<'a>,
}

impl PageSource for PdfiumPages<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn page_text(&mut self, index: usize) -> Result<Option<String>, FileError> {
        let page_err = |e: PdfiumError| FileError::Page {
            page: index + 1,
            detail: format!("{:?}", e),
        };

        let page = self.document.pages().get(index as u16).map_err(page_err)?;
        let text = page.text().map_err(page_err)?.all();

        Ok(if text.is_empty() { None } else { Some(text) })
    }
}
