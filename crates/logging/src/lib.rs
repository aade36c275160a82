#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is the loghub facade: leveled logging with one severity
//! threshold shared by every logger in the process, named handles that
//! prefix their output, and a storage-backed level preference that
//! survives restarts. Rendering is delegated to a
//! [`Dispatch`](levels::Dispatch) backend from the `logging-sink` crate;
//! this crate only decides which level gates output and keeps every handle
//! in lockstep.
//!
//! # Design
//!
//! All mutable state lives in a [`LevelHub`]: the [`LoggerConfig`], the
//! current level, the root dispatch, and the cache of named dispatch
//! handles, behind a single mutex. [`Logger`] handles are thin clones over
//! an `Arc` of the hub. Changing the level anywhere updates the hub and
//! pushes the new threshold to every handle before returning, so there is
//! no window in which two handles disagree. Persistence goes through the
//! [`LevelStore`] capability; [`FileStore`] keeps one file per key under a
//! per-user state directory and [`MemoryStore`] serves tests. The
//! [`logger()`] free function exposes a lazily-built process-global hub
//! for programs that want zero setup.
//!
//! # Invariants
//!
//! - Every live handle's effective threshold equals the hub's current
//!   level at all times.
//! - A persisted value only overrides `default_level` when it parses
//!   strictly; garbage falls back to the configured default.
//! - Store failures are invisible: reads behave as absent, writes are
//!   dropped, and the facade keeps working without persistence.
//!
//! # Errors
//!
//! Nothing on the logging surface fails. The strict level parser's
//! [`ParseSeverityError`] is internal to the persisted-value decision and
//! never propagates out of the facade.
//!
//! # Examples
//!
//! A self-contained hub with in-process persistence:
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use logging::{LevelHub, Logger, LoggerConfig, MemoryStore, Severity};
//! use logging_sink::WriterSink;
//!
//! let buffer = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::new(WriterSink::from_shared(Arc::clone(&buffer), Severity::Trace));
//! let hub = LevelHub::new(sink, Arc::new(MemoryStore::new()), LoggerConfig::default());
//!
//! let log = Logger::root(hub);
//! log.set_level_transient(Severity::Info);
//! log.info("starting up");
//! log.debug("dropped");
//!
//! let rendered = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
//! assert_eq!(rendered, "info: starting up\n");
//! ```
//!
//! # See also
//!
//! - `levels` for the [`Severity`] ordering and the dispatch seam.
//! - `logging-sink` for writer-backed and tracing-backed backends.

mod config;
mod global;
mod hub;
mod logger;
mod store;

pub use config::{ConfigUpdate, DEFAULT_STORAGE_KEY, LoggerConfig};
pub use global::{configure_logger, current_level, logger, named, set_level, set_level_transient};
pub use hub::LevelHub;
pub use logger::Logger;
pub use store::{FileStore, LevelStore, MemoryStore};

pub use levels::{Dispatch, ParseSeverityError, Severity};
