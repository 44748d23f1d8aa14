//! In-memory results of a harvest run.
//!
//! The output text file is the real product; these types only describe what
//! happened while producing it so that callers (the CLI, tests) can report
//! on it without re-reading the file.

use std::path::PathBuf;

/// What happened to a single matching input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// File name as written into the start/end markers.
    pub name: String,

    /// Pages the document reported, or 0 if it never opened.
    pub pages_total: usize,

    /// Pages whose extracted text was non-empty and got written.
    pub pages_written: usize,

    /// The message recorded after `Error: `, if the file failed.
    pub error: Option<String>,
}

impl FileOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Summary returned by [`crate::harvest::Harvester::run`].
#[derive(Debug, Clone)]
pub struct HarvestSummary {
    /// One entry per matching file, in processing order.
    pub files: Vec<FileOutcome>,

    /// The output file that was written.
    pub output_path: PathBuf,

    /// Wall-clock duration of the whole run in milliseconds.
    pub duration_ms: u64,
}

impl HarvestSummary {
    pub fn files_total(&self) -> usize {
        self.files.len()
    }

    pub fn files_failed(&self) -> usize {
        self.files.iter().filter(|f| !f.is_ok()).count()
    }

    pub fn pages_written(&self) -> usize {
        self.files.iter().map(|f| f.pages_written).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name: &str, pages: usize, error: Option<&str>) -> FileOutcome {
        FileOutcome {
            name: name.into(),
            pages_total: pages,
            pages_written: pages,
            error: error.map(String::from),
        }
    }

    #[test]
    fn summary_counts() {
        let s = HarvestSummary {
            files: vec![
                outcome("a.pdf", 3, None),
                outcome("b.pdf", 0, Some("bad header")),
                outcome("c.pdf", 2, None),
            ],
            output_path: PathBuf::from("pdf_extracted.txt"),
            duration_ms: 12,
        };
        assert_eq!(s.files_total(), 3);
        assert_eq!(s.files_failed(), 1);
        assert_eq!(s.pages_written(), 5);
    }

    #[test]
    fn empty_summary() {
        let s = HarvestSummary {
            files: vec![],
            output_path: PathBuf::from("out.txt"),
            duration_ms: 0,
        };
        assert_eq!(s.files_total(), 0);
        assert_eq!(s.files_failed(), 0);
        assert_eq!(s.pages_written(), 0);
    }
}
