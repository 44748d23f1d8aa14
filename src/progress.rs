//! Progress-callback trait for per-file harvest events.
//!
//! Inject an [`Arc<dyn HarvestProgressCallback>`] via
//! [`crate::config::HarvestConfigBuilder::progress_callback`] to receive
//! events as the run works through the input directory. The library itself
//! never prints; the CLI forwards these events to an `indicatif` bar.
//!
//! # Example
//!
//! ```rust
//! use pdf_harvest::{HarvestProgressCallback, HarvestConfig};
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct FailureCounter {
//!     failed: AtomicUsize,
//! }
//!
//! impl HarvestProgressCallback for FailureCounter {
//!     fn on_file_error(&self, index: usize, total: usize, name: &str, error: &str) {
//!         self.failed.fetch_add(1, Ordering::SeqCst);
//!         eprintln!("[{index}/{total}] {name}: {error}");
//!     }
//! }
//!
//! let counter = Arc::new(FailureCounter { failed: AtomicUsize::new(0) });
//!
//! let config = HarvestConfig::builder()
//!     .progress_callback(counter as Arc<dyn HarvestProgressCallback>)
//!     .build()
//!     .unwrap();
//! ```

use std::sync::Arc;

/// Called by the harvester as it processes each matching file.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. Files are processed sequentially, so events for
/// one run never interleave.
pub trait HarvestProgressCallback: Send + Sync {
    /// Called once after the input directory has been scanned.
    ///
    /// # Arguments
    /// * `total_files`: number of matching files that will be processed
    fn on_run_start(&self, total_files: usize) {
        let _ = total_files;
    }

    /// Called before the file's section is written.
    ///
    /// # Arguments
    /// * `index`: 1-indexed position of the file in processing order
    /// * `total`: total matching files
    /// * `name`: file name as written into the markers
    fn on_file_start(&self, index: usize, total: usize, name: &str) {
        let _ = (index, total, name);
    }

    /// Called when every page of a file was extracted.
    ///
    /// # Arguments
    /// * `pages_written`: pages that produced non-empty text
    fn on_file_complete(&self, index: usize, total: usize, name: &str, pages_written: usize) {
        let _ = (index, total, name, pages_written);
    }

    /// Called when a file failed and an `Error:` line was recorded for it.
    fn on_file_error(&self, index: usize, total: usize, name: &str, error: &str) {
        let _ = (index, total, name, error);
    }

    /// Called once after all files have been attempted.
    ///
    /// # Arguments
    /// * `total_files`: files processed
    /// * `failed_files`: files that recorded an `Error:` line
    fn on_run_complete(&self, total_files: usize, failed_files: usize) {
        let _ = (total_files, failed_files);
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl HarvestProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::HarvestConfig`].
pub type ProgressCallback = Arc<dyn HarvestProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct TrackingCallback {
        starts: AtomicUsize,
        completes: AtomicUsize,
        errors: AtomicUsize,
        pages: AtomicUsize,
    }

    impl HarvestProgressCallback for TrackingCallback {
        fn on_file_start(&self, _index: usize, _total: usize, _name: &str) {
            self.starts.fetch_add(1, Ordering::SeqCst);
        }

        fn on_file_complete(&self, _index: usize, _total: usize, _name: &str, pages: usize) {
            self.completes.fetch_add(1, Ordering::SeqCst);
            self.pages.fetch_add(pages, Ordering::SeqCst);
        }

        fn on_file_error(&self, _index: usize, _total: usize, _name: &str, _error: &str) {
            self.errors.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        cb.on_run_start(2);
        cb.on_file_start(1, 2, "a.pdf");
        cb.on_file_complete(1, 2, "a.pdf", 4);
        cb.on_file_error(2, 2, "b.pdf", "broken");
        cb.on_run_complete(2, 1);
    }

    #[test]
    fn tracking_callback_receives_events() {
        let tracker = TrackingCallback::default();

        tracker.on_file_start(1, 2, "a.pdf");
        tracker.on_file_complete(1, 2, "a.pdf", 3);
        tracker.on_file_start(2, 2, "b.pdf");
        tracker.on_file_error(2, 2, "b.pdf", "not a PDF");

        assert_eq!(tracker.starts.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.completes.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.errors.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.pages.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: ProgressCallback = Arc::new(NoopProgressCallback);
        cb.on_run_start(10);
        cb.on_file_start(1, 10, "x.pdf");
    }
}
