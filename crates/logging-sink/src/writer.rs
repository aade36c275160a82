//! crates/logging-sink/src/writer.rs
//! Writer-backed dispatch implementation.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};

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

/// A [`Dispatch`] implementation that renders records to an
/// [`std::io::Write`] target, one line per record.
///
/// The writer lives behind an `Arc<Mutex<_>>` so siblings created via
/// [`Dispatch::create_named`] interleave their output on the same target.
/// Each handle keeps its own threshold in an atomic, which the facade's hub
/// overwrites whenever the process-wide level changes.
///
/// Rendering is `<label>: <message>` followed by a newline, with the
/// lowercase severity label from [`Severity::label`]. Any name decoration
/// is the caller's business; the sink writes the message it is given.
pub struct WriterSink<W> {
    writer: Arc<Mutex<W>>,
    threshold: AtomicU8,
}

impl<W> WriterSink<W>
where
    W: Write + Send + 'static,
{
    /// Creates a sink over `writer` with a [`Severity::Trace`] threshold,
    /// admitting every record until the owner installs a stricter level.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_threshold(writer, Severity::Trace)
    }

    /// Creates a sink over `writer` with an explicit initial threshold.
    #[must_use]
    pub fn with_threshold(writer: W, threshold: Severity) -> Self {
        Self::from_shared(Arc::new(Mutex::new(writer)), threshold)
    }

    /// Creates a sink over an already-shared writer.
    ///
    /// This is the constructor tests reach for: keeping a clone of the
    /// `Arc` lets the caller inspect everything the sink and its named
    /// siblings rendered.
    #[must_use]
    pub fn from_shared(writer: Arc<Mutex<W>>, threshold: Severity) -> Self {
        Self {
            writer,
            threshold: AtomicU8::new(encode(threshold)),
        }
    }

    /// Returns a clone of the shared writer handle.
    #[must_use]
    pub fn writer(&self) -> Arc<Mutex<W>> {
        Arc::clone(&self.writer)
    }
}

impl WriterSink<io::Stderr> {
    /// Creates a sink that renders to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W> Dispatch for WriterSink<W>
where
    W: Write + Send + 'static,
{
    fn emit(&self, severity: Severity, message: &str) {
        if severity.is_silent() || severity < self.threshold() {
            return;
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}: {}", severity.label(), message);
        }
    }

    fn set_threshold(&self, severity: Severity) {
        self.threshold.store(encode(severity), Ordering::Release);
    }

    fn threshold(&self) -> Severity {
        decode(self.threshold.load(Ordering::Acquire))
    }

    fn create_named(&self, _name: &str) -> Arc<dyn Dispatch> {
        Arc::new(Self {
            writer: Arc::clone(&self.writer),
            threshold: AtomicU8::new(self.threshold.load(Ordering::Acquire)),
        })
    }
}
