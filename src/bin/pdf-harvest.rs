//! CLI binary for pdf-harvest.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `HarvestConfig`, runs the harvest and prints the completion message.
//! With no flags it reads `docx/` and writes `pdf_extracted.txt`.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pdf_harvest::config::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_PATH};
use pdf_harvest::{
    HarvestConfig, HarvestProgressCallback, HarvestSummary, Harvester, ProgressCallback,
};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Printed to stdout once every file has been processed.
const COMPLETION_MESSAGE: &str = "Done extracting PDFs";

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: one bar across all files plus a log line per
/// file, printed above the bar.
struct CliProgressCallback {
    bar: ProgressBar,
}

impl CliProgressCallback {
    /// The bar length is set by `on_run_start` once the directory is scanned.
    fn new() -> Arc<Self> {
        let bar = ProgressBar::new(0);
        let style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  \
             [{bar:42.green/238}] {pos:>3}/{len} files  \
             ⏱ {elapsed_precise}  {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ")
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        bar.set_style(style);
        bar.set_prefix("Extracting");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self { bar })
    }
}

impl HarvestProgressCallback for CliProgressCallback {
    fn on_run_start(&self, total_files: usize) {
        self.bar.set_length(total_files as u64);
        self.bar.println(format!(
            "{} {}",
            cyan("◆"),
            bold(&format!("Extracting text from {total_files} PDF files…"))
        ));
    }

    fn on_file_start(&self, _index: usize, _total: usize, name: &str) {
        self.bar.set_message(name.to_string());
    }

    fn on_file_complete(&self, index: usize, total: usize, name: &str, pages_written: usize) {
        self.bar.println(format!(
            "  {} {:>3}/{:<3}  {}  {}",
            green("✓"),
            index,
            total,
            name,
            dim(&format!("{pages_written} pages")),
        ));
        self.bar.inc(1);
    }

    fn on_file_error(&self, index: usize, total: usize, name: &str, error: &str) {
        // Truncate very long error messages to keep output tidy.
        let msg: String = if error.chars().count() > 80 {
            error.chars().take(79).chain(Some('\u{2026}')).collect()
        } else {
            error.to_string()
        };

        self.bar.println(format!(
            "  {} {:>3}/{:<3}  {}  {}",
            red("✗"),
            index,
            total,
            name,
            red(&msg),
        ));
        self.bar.inc(1);
    }

    fn on_run_complete(&self, _total_files: usize, _failed_files: usize) {
        self.bar.finish_and_clear();
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Extract every docx/*.pdf into pdf_extracted.txt
  pdf-harvest

  # Different directories, deterministic order
  pdf-harvest --input-dir papers --output papers.txt --sort

  # Also pick up .PDF / .Pdf files
  pdf-harvest --case-insensitive

  # Print the first 100 characters of one PDF
  pdf-harvest --probe docx/report.pdf

OUTPUT FORMAT:
  Each matching file becomes

    --- Start of <name> ---
    <text of each page that has text>
    Error: <message>        (only if the file could not be read)
    --- End of <name> ---

  surrounded by blank lines. The output file is overwritten on every run.

ENVIRONMENT VARIABLES:
  PDF_HARVEST_INPUT_DIR   Input directory (default: docx)
  PDF_HARVEST_OUTPUT      Output file (default: pdf_extracted.txt)
  PDFIUM_LIB_PATH         pdfium library file or directory
  RUST_LOG                Log filter, e.g. RUST_LOG=pdf_harvest=debug

PDFIUM:
  pdf-harvest needs the pdfium shared library (libpdfium.so / libpdfium.dylib
  / pdfium.dll). It is searched for in --pdfium-lib, PDFIUM_LIB_PATH, the
  executable's directory, the working directory and the system library path.
  Pre-built copies: https://github.com/bblanchon/pdfium-binaries/releases
"#;

/// Extract the text of every PDF in a directory into one text file.
#[derive(Parser, Debug)]
#[command(
    name = "pdf-harvest",
    version,
    about = "Extract the text of every PDF in a directory into one text file",
    long_about = "Extract the text of every PDF in a directory into a single text file, \
with a start and end marker around each source file. Files that cannot be read get an \
`Error:` line instead of their text; the run always continues.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Directory containing the PDF files.
    #[arg(long, env = "PDF_HARVEST_INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    /// Text file to write (overwritten on every run).
    #[arg(short, long, env = "PDF_HARVEST_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Also match `.PDF`, `.Pdf`, … (ASCII case-insensitive suffix).
    #[arg(long, env = "PDF_HARVEST_CASE_INSENSITIVE")]
    case_insensitive: bool,

    /// Process files in name order instead of directory-listing order.
    #[arg(long, env = "PDF_HARVEST_SORT")]
    sort: bool,

    /// User password tried on every PDF.
    #[arg(long, env = "PDF_HARVEST_PASSWORD")]
    password: Option<String>,

    /// pdfium shared library file, or the directory containing it.
    #[arg(long, env = "PDFIUM_LIB_PATH")]
    pdfium_lib: Option<PathBuf>,

    /// Print the beginning of one PDF's text and exit.
    #[arg(long, value_name = "FILE")]
    probe: Option<PathBuf>,

    /// Number of characters printed by --probe.
    #[arg(long, default_value_t = 100)]
    probe_chars: usize,

    /// Disable progress bar.
    #[arg(long, env = "PDF_HARVEST_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDF_HARVEST_VERBOSE")]
    verbose: bool,

    /// Suppress progress and summary output.
    #[arg(short, long, env = "PDF_HARVEST_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Suppress INFO-level library logs when the progress bar is active;
    // the bar already shows one line per file.
    let show_progress = !cli.quiet && !cli.no_progress && cli.probe.is_none();
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let progress_cb: Option<ProgressCallback> = if show_progress {
        Some(CliProgressCallback::new() as Arc<dyn HarvestProgressCallback>)
    } else {
        None
    };

    let config = build_config(&cli, progress_cb)?;
    let harvester = Harvester::with_pdfium(&config).context("PDF engine unavailable")?;

    // ── Probe mode ───────────────────────────────────────────────────────
    if let Some(ref path) = cli.probe {
        let text = harvester
            .probe(path, config.password.as_deref(), cli.probe_chars)
            .with_context(|| format!("Failed to extract {}", path.display()))?;
        println!("{text}");
        return Ok(());
    }

    // ── Run harvest ──────────────────────────────────────────────────────
    let summary = harvester.run(&config).context("Extraction failed")?;

    if !cli.quiet {
        print_summary(&summary);
    }
    println!("{COMPLETION_MESSAGE}");

    Ok(())
}

/// Map CLI args to `HarvestConfig`.
fn build_config(cli: &Cli, progress: Option<ProgressCallback>) -> Result<HarvestConfig> {
    let mut builder = HarvestConfig::builder()
        .input_dir(&cli.input_dir)
        .output_path(&cli.output)
        .case_insensitive(cli.case_insensitive)
        .sort(cli.sort);

    if let Some(ref pwd) = cli.password {
        builder = builder.password(pwd);
    }
    if let Some(ref lib) = cli.pdfium_lib {
        builder = builder.pdfium_library(lib);
    }
    if let Some(cb) = progress {
        builder = builder.progress_callback(cb);
    }

    builder.build().context("Invalid configuration")
}

/// One summary line on stderr; stdout carries only the completion message.
fn print_summary(summary: &HarvestSummary) {
    let failed = summary.files_failed();
    eprintln!(
        "{}  {}/{} files  {} pages  {}ms  →  {}",
        if failed == 0 { green("✔") } else { cyan("⚠") },
        summary.files_total() - failed,
        summary.files_total(),
        summary.pages_written(),
        summary.duration_ms,
        bold(&summary.output_path.display().to_string()),
    );
    if failed > 0 {
        eprintln!("   {} files recorded an Error: line", red(&failed.to_string()));
    }
}
