//! Error types for the pdf-harvest library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`HarvestError`] is **fatal**: the run cannot proceed at all (output
//!   file cannot be created, input directory cannot be listed, pdfium is
//!   missing). Returned as `Err(HarvestError)` from
//!   [`crate::harvest::Harvester::run`].
//!
//! * [`FileError`] is **non-fatal**: one PDF could not be opened or one of
//!   its pages could not be read. The message is written into the output
//!   as an `Error: ` line and the run moves on to the next file.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the pdf-harvest library.
///
/// Per-file failures use [`FileError`] and are recorded inline in the
/// output rather than propagated here.
#[derive(Debug, Error)]
pub enum HarvestError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The input directory does not exist or cannot be listed.
    #[error("Cannot read input directory '{path}': {source}")]
    InputDirUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create or truncate the output text file.
    #[error("Failed to create output file '{path}': {source}")]
    OutputCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A write to the already-open output file failed.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library.\n\n\
PDFium is not bundled with pdf-harvest. Install it system-wide, place it\n\
next to the executable, or point PDFIUM_LIB_PATH (or --pdfium-lib) at it.\n\
Pre-built libraries: https://github.com/bblanchon/pdfium-binaries/releases"
    )]
    PdfiumBindingFailed(#[from] pdfium_bind::PdfiumBindError),
}

/// A non-fatal error for a single PDF file.
///
/// Its `Display` text is what ends up after `Error: ` in the output.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FileError {
    /// The file could not be opened or parsed as a PDF.
    #[error("{detail}")]
    Open { detail: String },

    /// The PDF is encrypted and no password was supplied.
    #[error("file has not been decrypted (password required)")]
    PasswordRequired,

    /// A password was supplied but it does not open the PDF.
    #[error("incorrect password")]
    WrongPassword,

    /// Text extraction failed for a specific page (1-indexed).
    #[error("page {page}: {detail}")]
    Page { page: usize, detail: String },
}
