//! crates/logging-sink/src/tracing_bridge.rs
//! Bridge between the loghub facade and the tracing crate.
//!
//! This module provides a dispatch implementation that forwards facade
//! records to the equivalent `tracing` macro invocation. It lets hosts that
//! already run a `tracing` subscriber stack route facade output through
//! their existing layers, filters, and formatters instead of through a
//! writer sink.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

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

/// A [`Dispatch`] implementation that forwards records into the `tracing`
/// ecosystem.
///
/// Each record surviving the threshold check is re-emitted through the
/// `tracing` macro matching its severity, so the active subscriber applies
/// its own filtering and formatting on top. The facade-side threshold still
/// applies first; a record filtered here never reaches the subscriber.
pub struct TracingSink {
    threshold: AtomicU8,
}

impl TracingSink {
    /// Creates a sink with a [`Severity::Trace`] threshold, deferring all
    /// filtering to the active subscriber until the owner installs a
    /// stricter level.
    #[must_use]
    pub fn new() -> Self {
        Self::with_threshold(Severity::Trace)
    }

    /// Creates a sink with an explicit initial threshold.
    #[must_use]
    pub const fn with_threshold(threshold: Severity) -> Self {
        Self {
            threshold: AtomicU8::new(encode(threshold)),
        }
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatch for TracingSink {
    fn emit(&self, severity: Severity, message: &str) {
        if severity.is_silent() || severity < self.threshold() {
            return;
        }
        match severity {
            Severity::Trace => tracing::trace!("{message}"),
            Severity::Debug => tracing::debug!("{message}"),
            Severity::Info => tracing::info!("{message}"),
            Severity::Warn => tracing::warn!("{message}"),
            Severity::Error => tracing::error!("{message}"),
            Severity::Silent => {}
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
            threshold: AtomicU8::new(self.threshold.load(Ordering::Acquire)),
        })
    }
}
