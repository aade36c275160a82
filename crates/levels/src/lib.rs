#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/levels/src/lib.rs
//!
//! # Overview
//!
//! `levels` is the leaf crate of the loghub workspace. It defines the
//! [`Severity`] ordering shared by every logger in a process, the codec that
//! converts severities to and from their canonical textual form, and the
//! [`Dispatch`] trait through which the facade hands records to whatever
//! backend actually renders them.
//!
//! # Design
//!
//! [`Severity`] is a plain `Copy` enum whose declaration order doubles as its
//! filtering order: `Trace` is the most permissive threshold and `Silent`
//! suppresses everything. Two parsing paths coexist on purpose. The strict
//! path ([`FromStr`](std::str::FromStr)) reports unknown input via
//! [`ParseSeverityError`] and is used where "not a level" must mean "no
//! value", such as deciding whether a persisted setting overrides a
//! configured default. The lossy path ([`Severity::parse_lossy`]) never
//! fails and maps unrecognised input to [`Severity::Error`], because a
//! logging call must not be the thing that brings a process down.
//!
//! # Invariants
//!
//! - The ordering `Trace < Debug < Info < Warn < Error < Silent` is part of
//!   the public contract; filtering everywhere is `severity >= threshold`.
//! - [`Severity::as_str`] and the strict parser are exact inverses for the
//!   six canonical names.
//! - `Silent` is a threshold, never an emission severity; [`Dispatch`]
//!   implementations drop records carrying it.
//!
//! # Errors
//!
//! The only fallible operation is strict parsing, which returns
//! [`ParseSeverityError`]. Everything else is total.
//!
//! # Examples
//!
//! ```
//! use levels::Severity;
//!
//! assert!(Severity::Warn >= Severity::Info);
//! assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warn));
//! assert_eq!(Severity::parse_lossy("not-a-level"), Severity::Error);
//! ```
//!
//! # See also
//!
//! - `logging-sink` for the writer-backed [`Dispatch`] implementations.
//! - `logging` for the facade that synchronises thresholds process-wide.

mod dispatch;
mod severity;

pub use dispatch::Dispatch;
pub use severity::{ParseSeverityError, Severity};
