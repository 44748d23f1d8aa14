//! Output assembly: markers, page text and inline error lines.
//!
//! Each input file becomes one section:
//!
//! ```text
//! \n\n--- Start of <name> ---\n\n
//! <page text>\n          (one per non-empty page)
//! Error: <message>\n     (only if the file failed)
//! \n\n--- End of <name> ---\n\n
//! ```
//!
//! The writer is generic over [`Write`] so the exact byte layout can be
//! tested against a `Vec<u8>`.

use std::io::{self, Write};

/// Marker line opening a file's section.
pub fn start_marker(name: &str) -> String {
    format!("\n\n--- Start of {name} ---\n\n")
}

/// Marker line closing a file's section.
pub fn end_marker(name: &str) -> String {
    format!("\n\n--- End of {name} ---\n\n")
}

/// Render an error message as exactly one `Error: ` line.
pub fn error_line(message: &str) -> String {
    let flat: Vec<&str> = message.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    format!("Error: {}\n", flat.join(" "))
}

/// Writes file sections to an underlying sink.
pub struct SectionWriter<W: Write> {
    inner: W,
}

impl<W: Write> SectionWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn start(&mut self, name: &str) -> io::Result<()> {
        self.inner.write_all(start_marker(name).as_bytes())
    }

    /// Write one page's text followed by a newline.
    ///
    /// Empty text writes nothing and returns `false`.
    pub fn page(&mut self, text: &str) -> io::Result<bool> {
        if text.is_empty() {
            return Ok(false);
        }
        self.inner.write_all(text.as_bytes())?;
        self.inner.write_all(b"\n")?;
        Ok(true)
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        self.inner.write_all(error_line(message).as_bytes())
    }

    pub fn end(&mut self, name: &str) -> io::Result<()> {
        self.inner.write_all(end_marker(name).as_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(f: impl FnOnce(&mut SectionWriter<Vec<u8>>) -> io::Result<()>) -> String {
        let mut w = SectionWriter::new(Vec::new());
        f(&mut w).unwrap();
        String::from_utf8(w.into_inner()).unwrap()
    }

    #[test]
    fn markers_exact_bytes() {
        assert_eq!(start_marker("a.pdf"), "\n\n--- Start of a.pdf ---\n\n");
        assert_eq!(end_marker("a.pdf"), "\n\n--- End of a.pdf ---\n\n");
    }

    #[test]
    fn full_section_layout() {
        let out = written(|w| {
            w.start("doc.pdf")?;
            w.page("first page")?;
            w.page("")?;
            w.page("third page")?;
            w.end("doc.pdf")
        });
        assert_eq!(
            out,
            "\n\n--- Start of doc.pdf ---\n\nfirst page\nthird page\n\n\n--- End of doc.pdf ---\n\n"
        );
    }

    #[test]
    fn empty_page_is_skipped() {
        let mut w = SectionWriter::new(Vec::new());
        assert!(!w.page("").unwrap());
        assert!(w.page(" ").unwrap());
        assert_eq!(w.into_inner(), b" \n");
    }

    #[test]
    fn error_is_single_line() {
        assert_eq!(error_line("EOF marker not found"), "Error: EOF marker not found\n");
        assert_eq!(
            error_line("bad xref\n  at offset 12\r\n"),
            "Error: bad xref at offset 12\n"
        );
    }

    #[test]
    fn error_section_layout() {
        let out = written(|w| {
            w.start("broken.pdf")?;
            w.error("not a PDF")?;
            w.end("broken.pdf")
        });
        let between = out
            .strip_prefix(&start_marker("broken.pdf"))
            .and_then(|s| s.strip_suffix(&end_marker("broken.pdf")))
            .unwrap();
        assert_eq!(between, "Error: not a PDF\n");
    }
}
