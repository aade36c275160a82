#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/test-support/src/lib.rs
//!
//! # Overview
//!
//! `test-support` carries the helpers the workspace's tests share:
//! [`CaptureSink`], a [`Dispatch`] backend that records every emission
//! in memory instead of rendering it, and [`temp_store_dir`], a thin
//! wrapper over `tempfile` for tests that exercise the file-backed
//! level store. Nothing here ships; the crate is `publish = false` and
//! only ever appears in `[dev-dependencies]`.
//!
//! # Design
//!
//! `CaptureSink` mirrors the contract of the production sinks: it
//! filters by its own threshold, treats SILENT as unconditionally mute,
//! and hands out named siblings from [`Dispatch::create_named`]. All
//! siblings append to one shared record buffer so a test can drive a
//! tree of named handles and make a single ordered assertion at the
//! end.
//!
//! # Examples
//!
//! ```
//! use levels::{Dispatch, Severity};
//! use test_support::CaptureSink;
//!
//! let sink = CaptureSink::new();
//! sink.set_threshold(Severity::Warn);
//! sink.emit(Severity::Info, "dropped");
//! sink.emit(Severity::Error, "kept");
//!
//! assert_eq!(sink.records(), vec![(Severity::Error, "kept".to_string())]);
//! ```

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use levels::{Dispatch, Severity};

const fn encode(severity: Severity) -> u8 {
    severity as u8
}

const fn decode(raw: u8) -> Severity {
    match raw {
        0 => Severity::Trace,
        1 => Severity::Debug,
        2 => Severity::Info,
        3 => Severity::Warn,
        4 => Severity::Error,
        _ => Severity::Silent,
    }
}

/// A [`Dispatch`] backend that records emissions instead of rendering
/// them.
///
/// Each sink filters by its own threshold exactly like the production
/// sinks, so tests observe what a real backend would have written.
/// Named siblings created through [`Dispatch::create_named`] share the
/// record buffer with the sink that spawned them.
pub struct CaptureSink {
    records: Arc<Mutex<Vec<(Severity, String)>>>,
    threshold: AtomicU8,
}

impl CaptureSink {
    /// Creates an empty sink that lets everything through.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            threshold: AtomicU8::new(encode(Severity::Trace)),
        }
    }

    /// Returns every record accepted so far, in emission order.
    ///
    /// Records from named siblings appear here too; there is one buffer
    /// per sink family.
    #[must_use]
    pub fn records(&self) -> Vec<(Severity, String)> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn sibling(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            threshold: AtomicU8::new(self.threshold.load(Ordering::Acquire)),
        }
    }
}

impl Default for CaptureSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatch for CaptureSink {
    fn emit(&self, severity: Severity, message: &str) {
        if severity.is_silent() || severity < self.threshold() {
            return;
        }
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((severity, message.to_string()));
    }

    fn set_threshold(&self, severity: Severity) {
        self.threshold.store(encode(severity), Ordering::Release);
    }

    fn threshold(&self) -> Severity {
        decode(self.threshold.load(Ordering::Acquire))
    }

    fn create_named(&self, _name: &str) -> Arc<dyn Dispatch> {
        Arc::new(self.sibling())
    }
}

/// Creates a fresh temporary directory for file-store tests.
///
/// The directory and its contents are removed when the returned guard
/// is dropped, so tests stay hermetic even on failure.
///
/// # Panics
///
/// Panics when the directory cannot be created; in a test that is a
/// setup failure worth surfacing immediately.
#[must_use]
pub fn temp_store_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("failed to create temporary store directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sink_accepts_everything() {
        let sink = CaptureSink::new();
        sink.emit(Severity::Trace, "first");
        sink.emit(Severity::Error, "second");

        assert_eq!(
            sink.records(),
            vec![
                (Severity::Trace, "first".to_string()),
                (Severity::Error, "second".to_string()),
            ]
        );
    }

    #[test]
    fn threshold_filters_below() {
        let sink = CaptureSink::new();
        sink.set_threshold(Severity::Warn);

        sink.emit(Severity::Info, "dropped");
        sink.emit(Severity::Warn, "kept");

        assert_eq!(sink.records(), vec![(Severity::Warn, "kept".to_string())]);
    }

    #[test]
    fn silent_is_never_recorded() {
        let sink = CaptureSink::new();
        sink.emit(Severity::Silent, "dropped");
        assert!(sink.records().is_empty());
    }

    #[test]
    fn named_siblings_share_the_buffer() {
        let sink = CaptureSink::new();
        let named = sink.create_named("auth");

        named.emit(Severity::Error, "from sibling");
        sink.emit(Severity::Error, "from root");

        assert_eq!(
            sink.records(),
            vec![
                (Severity::Error, "from sibling".to_string()),
                (Severity::Error, "from root".to_string()),
            ]
        );
    }

    #[test]
    fn siblings_carry_their_own_threshold() {
        let sink = CaptureSink::new();
        let named = sink.create_named("auth");

        named.set_threshold(Severity::Error);
        sink.emit(Severity::Info, "kept");
        named.emit(Severity::Info, "dropped");

        assert_eq!(sink.records(), vec![(Severity::Info, "kept".to_string())]);
    }

    #[test]
    fn siblings_inherit_the_spawning_threshold() {
        let sink = CaptureSink::new();
        sink.set_threshold(Severity::Warn);

        let named = sink.create_named("auth");
        assert_eq!(named.threshold(), Severity::Warn);
    }

    #[test]
    fn temp_store_dir_exists_until_dropped() {
        let dir = temp_store_dir();
        let path = dir.path().to_path_buf();
        assert!(path.is_dir());

        drop(dir);
        assert!(!path.exists());
    }
}
