//! # pdfium-bind
//!
//! Locate an already-installed [PDFium](https://pdfium.googlesource.com/pdfium/)
//! shared library and bind `pdfium-render` to it.
//!
//! PDFium is a deploy-time dependency: this crate never downloads or
//! installs anything. It only looks in a fixed list of places and reports
//! every location it tried when none of them works.
//!
//! ## Search order
//!
//! 1. An explicit path passed by the caller (file or directory).
//! 2. `PDFIUM_LIB_PATH` (file or directory).
//! 3. The directory containing the running executable.
//! 4. The current working directory.
//! 5. The system library search path (`LD_LIBRARY_PATH`, `DYLD_LIBRARY_PATH`, `PATH`).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pdfium_bind::bind_pdfium;
//!
//! let pdfium = bind_pdfium(None).expect("PDFium unavailable");
//! ```
//!
//! ## Platform support
//!
//! | OS      | Library               |
//! |---------|-----------------------|
//! | macOS   | `libpdfium.dylib`     |
//! | Linux   | `libpdfium.so`        |
//! | Windows | `pdfium.dll`          |

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use pdfium_render::prelude::Pdfium;
use thiserror::Error;

/// Environment variable naming a pdfium library file or the directory holding it.
pub const PDFIUM_LIB_PATH_ENV: &str = "PDFIUM_LIB_PATH";

// ── Error type ───────────────────────────────────────────────────────────────

/// Errors returned by pdfium-bind operations.
#[derive(Error, Debug)]
pub enum PdfiumBindError {
    /// The current OS has no known pdfium library name.
    #[error("Unsupported platform: {os}")]
    UnsupportedPlatform { os: String },

    /// `pdfium-render` could not load the library at an explicit path.
    #[error("Failed to bind PDFium from '{path}': {reason}")]
    Bind { path: PathBuf, reason: String },

    /// No candidate location held a loadable library.
    #[error(
        "No usable PDFium library found.\nTried:\n{}\n  system library path ({system})\n\
         Set {env}=/path/to/{lib} or install pdfium system-wide.",
        .tried.iter().map(|p| format!("  {}", p.display())).collect::<Vec<_>>().join("\n"),
        env = PDFIUM_LIB_PATH_ENV,
        lib = platform_library_name().unwrap_or("libpdfium")
    )]
    NotFound { tried: Vec<PathBuf>, system: String },
}

// ── Platform metadata ────────────────────────────────────────────────────────

/// The file name of the pdfium shared library on the current platform.
pub fn platform_library_name() -> Result<&'static str, PdfiumBindError> {
    match std::env::consts::OS {
        "macos" | "ios" => Ok("libpdfium.dylib"),
        "linux" | "android" | "freebsd" | "openbsd" | "netbsd" => Ok("libpdfium.so"),
        "windows" => Ok("pdfium.dll"),
        os => Err(PdfiumBindError::UnsupportedPlatform { os: os.to_string() }),
    }
}

/// Resolve a file-or-directory location to the library file it designates.
///
/// Directories get the platform library name appended; anything else is
/// taken as a path to the library itself.
fn library_at(location: &Path, lib_name: &str) -> PathBuf {
    if location.is_dir() {
        location.join(lib_name)
    } else {
        location.to_path_buf()
    }
}

// ── Candidate resolution ─────────────────────────────────────────────────────

/// Every on-disk location [`bind_pdfium`] tries, in order, before falling
/// back to the system library path.
///
/// Locations that do not exist are still listed so that the final error
/// message can show the full search.
pub fn candidate_paths(explicit: Option<&Path>) -> Result<Vec<PathBuf>, PdfiumBindError> {
    let lib_name = platform_library_name()?;
    let mut candidates = Vec::new();

    if let Some(p) = explicit {
        candidates.push(library_at(p, lib_name));
    }

    if let Some(p) = std::env::var_os(PDFIUM_LIB_PATH_ENV).filter(|v| !v.is_empty()) {
        candidates.push(library_at(Path::new(&p), lib_name));
    }

    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(dir.join(lib_name));
    }

    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(lib_name));
    }

    candidates.dedup();
    Ok(candidates)
}

// ── Thread-safe singleton path cache ─────────────────────────────────────────

static RESOLVED_PATH: OnceLock<Option<PathBuf>> = OnceLock::new();

/// The location the first successful [`bind_pdfium`] call loaded from.
///
/// `Some(None)` means the system library path was used; `None` means no
/// successful bind has happened yet in this process.
pub fn resolved_library() -> Option<Option<&'static Path>> {
    RESOLVED_PATH.get().map(|p| p.as_deref())
}

// ── Public API ───────────────────────────────────────────────────────────────

/// Binds to PDFium, trying each location from [`candidate_paths`] and then
/// the system library path.
///
/// An explicit path that is missing or fails to load is reported as
/// [`PdfiumBindError::Bind`] rather than silently skipped, so a broken
/// `--pdfium-lib` is never masked by a different system copy.
pub fn bind_pdfium(explicit: Option<&Path>) -> Result<Pdfium, PdfiumBindError> {
    let candidates = candidate_paths(explicit)?;

    for (i, path) in candidates.iter().enumerate() {
        let is_explicit = i == 0 && explicit.is_some();
        if !path.exists() {
            if is_explicit {
                return Err(PdfiumBindError::Bind {
                    path: path.clone(),
                    reason: "file does not exist".into(),
                });
            }
            continue;
        }
        match bind_pdfium_from_path(path) {
            Ok(pdfium) => {
                let _ = RESOLVED_PATH.set(Some(path.clone()));
                return Ok(pdfium);
            }
            Err(e) if is_explicit => return Err(e),
            Err(_) => continue,
        }
    }

    match Pdfium::bind_to_system_library() {
        Ok(bindings) => {
            let _ = RESOLVED_PATH.set(None);
            Ok(Pdfium::new(bindings))
        }
        Err(e) => Err(PdfiumBindError::NotFound {
            tried: candidates,
            system: e.to_string(),
        }),
    }
}

/// Binds to a PDFium library at an explicit `path`.
///
/// Does not consult the environment or the search list.
pub fn bind_pdfium_from_path(path: &Path) -> Result<Pdfium, PdfiumBindError> {
    Pdfium::bind_to_library(path)
        .map(Pdfium::new)
        .map_err(|e| PdfiumBindError::Bind {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_library_name_is_known() {
        let name = platform_library_name().expect("current platform should be supported");
        assert!(name.contains("pdfium"));
    }

    #[test]
    fn explicit_file_comes_first() {
        let explicit = Path::new("/opt/pdfium/lib/libpdfium-custom.so");
        let candidates = candidate_paths(Some(explicit)).unwrap();
        assert_eq!(candidates[0], explicit);
    }

    #[test]
    fn explicit_directory_gets_library_name_appended() {
        let dir = tempfile::tempdir().unwrap();
        let candidates = candidate_paths(Some(dir.path())).unwrap();
        let lib = platform_library_name().unwrap();
        assert_eq!(candidates[0], dir.path().join(lib));
    }

    #[test]
    fn search_list_includes_current_dir() {
        let cwd = std::env::current_dir().unwrap();
        let lib = platform_library_name().unwrap();
        let candidates = candidate_paths(None).unwrap();
        assert!(candidates.contains(&cwd.join(lib)));
    }

    #[test]
    fn garbage_library_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("not-a-library.so");
        std::fs::write(&bogus, b"definitely not ELF").unwrap();
        let err = bind_pdfium_from_path(&bogus).err().expect("garbage must not load");
        assert!(err.to_string().contains("not-a-library.so"), "got: {err}");
    }

    #[test]
    fn missing_explicit_path_is_not_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone").join("libpdfium.so");
        match bind_pdfium(Some(&missing)) {
            Err(PdfiumBindError::Bind { path, reason }) => {
                assert_eq!(path, missing);
                assert!(reason.contains("does not exist"));
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("a missing explicit library must not bind"),
        }
    }

    #[test]
    fn not_found_lists_every_location() {
        let e = PdfiumBindError::NotFound {
            tried: vec![PathBuf::from("/a/libpdfium.so"), PathBuf::from("/b/libpdfium.so")],
            system: "dlopen failed".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("/a/libpdfium.so"));
        assert!(msg.contains("/b/libpdfium.so"));
        assert!(msg.contains("dlopen failed"));
        assert!(msg.contains(PDFIUM_LIB_PATH_ENV));
    }
}
