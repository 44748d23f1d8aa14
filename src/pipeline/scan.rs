//! Input scanning: list the input directory and keep the PDF entries.
//!
//! Order is whatever the filesystem's directory listing returns unless
//! [`HarvestConfig::sort`] asks for byte-wise name order. Entries are not
//! filtered by file type: a directory named `x.pdf` is kept and fails later
//! at open time, which records an `Error:` line for it.

use crate::config::HarvestConfig;
use crate::error::HarvestError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One matching directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfEntry {
    /// File name written into the markers. Non-UTF-8 names are converted
    /// lossily.
    pub name: String,
    /// Full path used to open the file.
    pub path: PathBuf,
}

/// Check whether `name` ends with `suffix`.
///
/// Case-sensitive unless `case_insensitive` is set, in which case only
/// ASCII case is folded.
pub fn matches_suffix(name: &str, suffix: &str, case_insensitive: bool) -> bool {
    if !case_insensitive {
        return name.ends_with(suffix);
    }
    let (name, suffix) = (name.as_bytes(), suffix.as_bytes());
    name.len() >= suffix.len() && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// List the entries of `dir` whose names match the configured suffix.
pub fn list_pdfs(dir: &Path, config: &HarvestConfig) -> Result<Vec<PdfEntry>, HarvestError> {
    let unreadable = |source| HarvestError::InputDirUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if matches_suffix(&name, &config.suffix, config.case_insensitive) {
            entries.push(PdfEntry {
                name,
                path: entry.path(),
            });
        } else {
            debug!("Skipping non-matching entry: {}", name);
        }
    }

    if config.sort {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
    }

    debug!("Found {} matching entries in {}", entries.len(), dir.display());
    Ok(entries)
}
