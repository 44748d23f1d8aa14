//! Configuration types for a harvest run.
//!
//! All run behaviour is controlled through [`HarvestConfig`], built via its
//! [`HarvestConfigBuilder`]. The defaults reproduce the tool's fixed
//! behaviour: read `docx/`, write `pdf_extracted.txt`, match the lowercase
//! `.pdf` suffix only, keep directory-listing order.

use crate::error::HarvestError;
use crate::progress::ProgressCallback;
use std::fmt;
use std::path::PathBuf;

/// Default input directory, relative to the working directory.
pub const DEFAULT_INPUT_DIR: &str = "docx";

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "pdf_extracted.txt";

/// Default file-name suffix selecting the inputs.
pub const DEFAULT_SUFFIX: &str = ".pdf";

/// Configuration for a harvest run.
///
/// Built via [`HarvestConfig::builder()`] or using
/// [`HarvestConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf_harvest::HarvestConfig;
///
/// let config = HarvestConfig::builder()
///     .input_dir("papers")
///     .output_path("papers.txt")
///     .sort(true)
///     .build()
///     .unwrap();
/// assert!(config.sort);
/// ```
#[derive(Clone)]
pub struct HarvestConfig {
    /// Directory whose entries are scanned. Default: `docx`.
    pub input_dir: PathBuf,

    /// Text file receiving the concatenated output. Created or truncated at
    /// the start of every run. Default: `pdf_extracted.txt`.
    pub output_path: PathBuf,

    /// File-name suffix selecting the inputs. Default: `.pdf`.
    pub suffix: String,

    /// Match `suffix` ignoring ASCII case (`.PDF`, `.Pdf`). Default: false.
    pub case_insensitive: bool,

    /// Process files in byte-wise name order instead of directory-listing
    /// order. Default: false.
    pub sort: bool,

    /// User password tried on every PDF. Default: none.
    pub password: Option<String>,

    /// Explicit pdfium library file or directory. When `None` the
    /// `pdfium-bind` search order applies.
    pub pdfium_library: Option<PathBuf>,

    /// Optional progress callback for per-file events.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            suffix: DEFAULT_SUFFIX.to_string(),
            case_insensitive: false,
            sort: false,
            password: None,
            pdfium_library: None,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for HarvestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HarvestConfig")
            .field("input_dir", &self.input_dir)
            .field("output_path", &self.output_path)
            .field("suffix", &self.suffix)
            .field("case_insensitive", &self.case_insensitive)
            .field("sort", &self.sort)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("pdfium_library", &self.pdfium_library)
            .field(
                "progress_callback",
                &self
                    .progress_callback
                    .as_ref()
                    .map(|_| "<dyn HarvestProgressCallback>"),
            )
            .finish()
    }
}

impl HarvestConfig {
    /// Create a new builder for `HarvestConfig`.
    pub fn builder() -> HarvestConfigBuilder {
        HarvestConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`HarvestConfig`].
#[derive(Debug)]
pub struct HarvestConfigBuilder {
    config: HarvestConfig,
}

impl HarvestConfigBuilder {
    pub fn input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.input_dir = dir.into();
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.suffix = suffix.into();
        self
    }

    pub fn case_insensitive(mut self, v: bool) -> Self {
        self.config.case_insensitive = v;
        self
    }

    pub fn sort(mut self, v: bool) -> Self {
        self.config.sort = v;
        self
    }

    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.config.password = Some(pwd.into());
        self
    }

    pub fn pdfium_library(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.pdfium_library = Some(path.into());
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<HarvestConfig, HarvestError> {
        let c = &self.config;
        if c.suffix.is_empty() {
            return Err(HarvestError::InvalidConfig(
                "File suffix must not be empty".into(),
            ));
        }
        if c.input_dir.as_os_str().is_empty() {
            return Err(HarvestError::InvalidConfig(
                "Input directory must not be empty".into(),
            ));
        }
        if c.output_path.as_os_str().is_empty() {
            return Err(HarvestError::InvalidConfig(
                "Output path must not be empty".into(),
            ));
        }
        if c.output_path == c.input_dir {
            return Err(HarvestError::InvalidConfig(format!(
                "Output path '{}' is the input directory",
                c.output_path.display()
            )));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_layout() {
        let c = HarvestConfig::default();
        assert_eq!(c.input_dir, PathBuf::from("docx"));
        assert_eq!(c.output_path, PathBuf::from("pdf_extracted.txt"));
        assert_eq!(c.suffix, ".pdf");
        assert!(!c.case_insensitive);
        assert!(!c.sort);
        assert!(c.password.is_none());
    }

    #[test]
    fn builder_sets_fields() {
        let c = HarvestConfig::builder()
            .input_dir("in")
            .output_path("out.txt")
            .case_insensitive(true)
            .password("hunter2")
            .build()
            .unwrap();
        assert_eq!(c.input_dir, PathBuf::from("in"));
        assert_eq!(c.output_path, PathBuf::from("out.txt"));
        assert!(c.case_insensitive);
        assert_eq!(c.password.as_deref(), Some("hunter2"));
    }

    #[test]
    fn empty_suffix_rejected() {
        let err = HarvestConfig::builder().suffix("").build().unwrap_err();
        assert!(matches!(err, HarvestError::InvalidConfig(_)));
    }

    #[test]
    fn output_equal_to_input_rejected() {
        let err = HarvestConfig::builder()
            .input_dir("same")
            .output_path("same")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("same"));
    }

    #[test]
    fn debug_redacts_password() {
        let c = HarvestConfig::builder().password("hunter2").build().unwrap();
        let dbg = format!("{c:?}");
        assert!(!dbg.contains("hunter2"));
        assert!(dbg.contains("<redacted>"));
    }
}
