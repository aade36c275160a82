//! crates/levels/src/severity.rs
//! Severity ordering and the textual level codec.

use std::fmt;
use std::str::FromStr;

/// Severity of a log record, doubling as a filtering threshold.
///
/// The declaration order defines the total order used for filtering:
/// `Trace` admits everything while `Silent` admits nothing. A record is
/// emitted when its severity is at or above the active threshold and is
/// not [`Severity::Silent`] itself.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Finest-grained diagnostics.
    Trace,
    /// Developer-facing diagnostics.
    Debug,
    /// Routine informational output.
    Info,
    /// Conditions worth attention that do not prevent progress.
    Warn,
    /// Failures.
    Error,
    /// Threshold that suppresses all output; never an emission severity.
    Silent,
}

impl Severity {
    /// Returns the canonical upper-case name of the severity.
    ///
    /// This is the form written to persistent storage and the exact inverse
    /// of the strict parser for the six canonical levels, so a value that
    /// round-trips through [`as_str`](Self::as_str) always parses back to
    /// itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use levels::Severity;
    ///
    /// assert_eq!(Severity::Trace.as_str(), "TRACE");
    /// assert_eq!(Severity::Silent.as_str(), "SILENT");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Silent => "SILENT",
        }
    }

    /// Returns the lowercase label used when rendering a record.
    ///
    /// Sinks prepend this label to each line they write. Keeping it here
    /// saves every backend from maintaining its own copy of the wording.
    ///
    /// # Examples
    ///
    /// ```
    /// use levels::Severity;
    ///
    /// assert_eq!(Severity::Warn.label(), "warn");
    /// assert_eq!(Severity::Error.label(), "error");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Silent => "silent",
        }
    }

    /// Parses a level name, mapping anything unrecognised to
    /// [`Severity::Error`].
    ///
    /// Matching is case-insensitive. This is the entry point for level
    /// strings arriving from callers at runtime: a typo in a level name
    /// must degrade to the safe default rather than fail, so the facade
    /// never surfaces a parse error on its emission path. Call sites that
    /// need to distinguish "unknown" from "ERROR" use the strict
    /// [`FromStr`] implementation instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use levels::Severity;
    ///
    /// assert_eq!(Severity::parse_lossy("debug"), Severity::Debug);
    /// assert_eq!(Severity::parse_lossy("WARN"), Severity::Warn);
    /// assert_eq!(Severity::parse_lossy("verbose"), Severity::Error);
    /// ```
    #[must_use]
    pub fn parse_lossy(input: &str) -> Self {
        input.parse().unwrap_or(Self::Error)
    }

    /// Reports whether this severity suppresses all output when used as a
    /// threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use levels::Severity;
    ///
    /// assert!(Severity::Silent.is_silent());
    /// assert!(!Severity::Error.is_silent());
    /// ```
    #[must_use]
    pub const fn is_silent(self) -> bool {
        matches!(self, Self::Silent)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when strictly parsing a [`Severity`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognised severity level")]
pub struct ParseSeverityError {
    _private: (),
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let candidates = [
            Self::Trace,
            Self::Debug,
            Self::Info,
            Self::Warn,
            Self::Error,
            Self::Silent,
        ];
        candidates
            .into_iter()
            .find(|level| input.eq_ignore_ascii_case(level.as_str()))
            .ok_or(ParseSeverityError { _private: () })
    }
}
