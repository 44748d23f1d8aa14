//! # pdf-harvest
//!
//! Batch-extract the text of every PDF in a directory into a single text
//! file, one marker-delimited section per source file.
//!
//! ## Pipeline Overview
//!
//! ```text
//! docx/
//!  │
//!  ├─ 1. Create  open pdf_extracted.txt (truncating the previous run)
//!  ├─ 2. Scan    list the directory, keep names ending in `.pdf`
//!  ├─ 3. Extract per file, per page via pdfium (sequential)
//!  └─ 4. Write   start marker, page texts, optional `Error:` line, end marker
//! ```
//!
//! ## Output format
//!
//! ```text
//! \n\n--- Start of report.pdf ---\n\n
//! <text of page 1>\n
//! <text of page 2>\n
//! \n\n--- End of report.pdf ---\n\n
//! ```
//!
//! Pages without extractable text produce no line. A file that cannot be
//! opened or read gets a single `Error: <message>` line between its markers
//! and the run continues with the next file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let summary = pdf_harvest::run("docx", "pdf_extracted.txt")?;
//!     eprintln!("{} files, {} failed", summary.files_total(), summary.files_failed());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf-harvest` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! pdf-harvest = { version = "0.1", default-features = false }
//! ```
//!
//! ## PDFium
//!
//! Text extraction uses the pdfium shared library through `pdfium-render`.
//! It is located at startup (explicit path, `PDFIUM_LIB_PATH`, next to the
//! executable, working directory, system path) and never downloaded.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod backend;
pub mod config;
pub mod error;
pub mod harvest;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use backend::{PageSource, PdfBackend, PdfiumBackend};
pub use config::{HarvestConfig, HarvestConfigBuilder};
pub use error::{FileError, HarvestError};
pub use harvest::{run, Harvester};
pub use output::{FileOutcome, HarvestSummary};
pub use pipeline::scan::{list_pdfs, PdfEntry};
pub use progress::{HarvestProgressCallback, NoopProgressCallback, ProgressCallback};
