#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the [`Dispatch`](levels::Dispatch)
//! implementations used by the loghub facade. The focus is on streaming
//! records to arbitrary writers while keeping the filtering threshold cheap
//! to consult, so emission never contends with the facade's own
//! synchronisation.
//!
//! # Design
//!
//! The crate exposes [`WriterSink`], a lightweight wrapper around an
//! [`std::io::Write`] implementor. Each sink shares its writer behind an
//! `Arc<Mutex<_>>` so named siblings created through
//! [`Dispatch::create_named`](levels::Dispatch::create_named) interleave
//! their lines on one target, while every handle carries its own atomic
//! threshold. With the `tracing` feature enabled, [`TracingSink`] forwards
//! records into the `tracing` ecosystem instead of rendering them directly.
//!
//! # Invariants
//!
//! - A record is rendered exactly when its severity is at or above the
//!   handle's threshold and is not `Silent`.
//! - Threshold reads and writes never take the writer lock; emission of a
//!   filtered-out record costs one atomic load.
//! - Write failures are swallowed. A sink is advisory output, not a place
//!   a process is allowed to fail.
//!
//! # Errors
//!
//! None surface. The writer's [`std::io::Error`] values are dropped at the
//! sink boundary.
//!
//! # Examples
//!
//! Render two records into a shared buffer and inspect the output:
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use levels::{Dispatch, Severity};
//! use logging_sink::WriterSink;
//!
//! let buffer = Arc::new(Mutex::new(Vec::new()));
//! let sink = WriterSink::from_shared(Arc::clone(&buffer), Severity::Info);
//!
//! sink.emit(Severity::Warn, "low disk space");
//! sink.emit(Severity::Debug, "dropped");
//!
//! let rendered = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
//! assert_eq!(rendered, "warn: low disk space\n");
//! ```
//!
//! # See also
//!
//! - `levels` for the [`Dispatch`](levels::Dispatch) contract.
//! - `logging` for the facade that owns threshold propagation.

mod writer;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use writer::WriterSink;

#[cfg(feature = "tracing")]
pub use tracing_bridge::TracingSink;
