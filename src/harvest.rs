//! The harvest run: every matching PDF in, one marker-delimited text file out.
//!
//! [`Harvester::run`] is strictly sequential. The output file is created
//! (truncating any previous run) before the input directory is listed and
//! stays open until the last end marker is flushed. A file that fails to
//! open or to yield a page gets an `Error:` line inside its markers; only
//! problems with the output file or the input directory itself abort.

use crate::backend::{PdfBackend, PdfiumBackend};
use crate::config::HarvestConfig;
use crate::error::{FileError, HarvestError};
use crate::output::{FileOutcome, HarvestSummary};
use crate::pipeline::scan::{self, PdfEntry};
use crate::pipeline::write::SectionWriter;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runs harvests against one PDF backend.
pub struct Harvester<B> {
    backend: B,
}

impl Harvester<PdfiumBackend> {
    /// A harvester backed by pdfium, bound according to
    /// [`HarvestConfig::pdfium_library`].
    pub fn with_pdfium(config: &HarvestConfig) -> Result<Self, HarvestError> {
        let backend = PdfiumBackend::bind(config.pdfium_library.as_deref())?;
        Ok(Self::new(backend))
    }
}

impl<B: PdfBackend> Harvester<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Extract every matching file of `config.input_dir` into
    /// `config.output_path`.
    ///
    /// # Errors
    /// Returns `Err(HarvestError)` only for fatal errors:
    /// - the output file cannot be created or written
    /// - the input directory cannot be listed
    ///
    /// Per-file failures are recorded in the output and in the returned
    /// [`HarvestSummary`].
    pub fn run(&self, config: &HarvestConfig) -> Result<HarvestSummary, HarvestError> {
        let started = Instant::now();
        let output_path = &config.output_path;
        info!(
            "Harvesting {} → {}",
            config.input_dir.display(),
            output_path.display()
        );
        debug!("Config: {:?}", config);

        let file = File::create(output_path).map_err(|source| HarvestError::OutputCreateFailed {
            path: output_path.clone(),
            source,
        })?;
        let mut out = SectionWriter::new(BufWriter::new(file));
        let write_failed = |source| HarvestError::OutputWriteFailed {
            path: output_path.clone(),
            source,
        };

        let entries = scan::list_pdfs(&config.input_dir, config)?;
        let total = entries.len();
        info!("{} matching files", total);

        if let Some(ref cb) = config.progress_callback {
            cb.on_run_start(total);
        }

        let mut files = Vec::with_capacity(total);
        for (i, entry) in entries.iter().enumerate() {
            let index = i + 1;
            if let Some(ref cb) = config.progress_callback {
                cb.on_file_start(index, total, &entry.name);
            }

            let outcome = self
                .harvest_file(&mut out, entry, config.password.as_deref())
                .map_err(write_failed)?;

            if let Some(ref cb) = config.progress_callback {
                match &outcome.error {
                    None => cb.on_file_complete(index, total, &entry.name, outcome.pages_written),
                    Some(e) => cb.on_file_error(index, total, &entry.name, e),
                }
            }
            files.push(outcome);
        }

        out.flush().map_err(write_failed)?;

        let summary = HarvestSummary {
            files,
            output_path: output_path.clone(),
            duration_ms: started.elapsed().as_millis() as u64,
        };

        info!(
            "Harvest complete: {} files ({} failed), {} pages, {}ms",
            summary.files_total(),
            summary.files_failed(),
            summary.pages_written(),
            summary.duration_ms
        );

        if let Some(ref cb) = config.progress_callback {
            cb.on_run_complete(summary.files_total(), summary.files_failed());
        }

        Ok(summary)
    }

    /// Write one file's section. Only output I/O errors escape.
    fn harvest_file<W: Write>(
        &self,
        out: &mut SectionWriter<W>,
        entry: &PdfEntry,
        password: Option<&str>,
    ) -> io::Result<FileOutcome> {
        out.start(&entry.name)?;

        let mut outcome = FileOutcome {
            name: entry.name.clone(),
            pages_total: 0,
            pages_written: 0,
            error: None,
        };

        match self.backend.open(&entry.path, password) {
            Ok(mut doc) => {
                outcome.pages_total = doc.page_count();
                for idx in 0..outcome.pages_total {
                    match doc.page_text(idx) {
                        Ok(Some(text)) => {
                            if out.page(&text)? {
                                outcome.pages_written += 1;
                            }
                        }
                        Ok(None) => debug!("{}: page {} has no text", entry.name, idx + 1),
                        Err(e) => {
                            outcome.error = Some(e.to_string());
                            break;
                        }
                    }
                }
            }
            Err(e) => outcome.error = Some(e.to_string()),
        }

        match outcome.error {
            Some(ref msg) => {
                warn!("{}: {}", entry.name, msg);
                out.error(msg)?;
            }
            None => debug!(
                "{}: {}/{} pages written",
                entry.name, outcome.pages_written, outcome.pages_total
            ),
        }

        out.end(&entry.name)?;
        Ok(outcome)
    }

    /// Extract the text of a single PDF and return its first `max_chars`
    /// characters.
    ///
    /// Pages are joined with newlines and pages without text are skipped,
    /// as in the harvest output.
    pub fn probe(
        &self,
        path: &Path,
        password: Option<&str>,
        max_chars: usize,
    ) -> Result<String, FileError> {
        let mut doc = self.backend.open(path, password)?;
        let mut text = String::new();
        let mut chars = 0;

        for idx in 0..doc.page_count() {
            if chars >= max_chars {
                break;
            }
            if let Some(page) = doc.page_text(idx)? {
                if !text.is_empty() {
                    text.push('\n');
                    chars += 1;
                }
                chars += page.chars().count();
                text.push_str(&page);
            }
        }

        Ok(text.chars().take(max_chars).collect())
    }
}

/// Harvest `input_dir` into `output_path` with pdfium and default settings.
///
/// This is the whole tool in one call; the CLI with no flags is equivalent
/// to `run("docx", "pdf_extracted.txt")`.
pub fn run(
    input_dir: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<HarvestSummary, HarvestError> {
    let config = HarvestConfig::builder()
        .input_dir(input_dir.as_ref())
        .output_path(output_path.as_ref())
        .build()?;
    Harvester::with_pdfium(&config)?.run(&config)
}
