//! Pipeline stages for a harvest run.
//!
//! Each submodule implements exactly one step and knows nothing about the
//! PDF library, so both are testable against plain files and byte buffers.
//!
//! ## Data Flow
//!
//! ```text
//! scan ──▶ backend (per file, per page) ──▶ write
//! (dir)     (pdfium)                        (markers + text)
//! ```
//!
//! 1. [`scan`]: list the input directory and keep entries with the suffix
//! 2. [`write`]: emit start/end markers, page text and `Error:` lines

pub mod scan;
pub mod write;
