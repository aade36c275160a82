//! crates/logging/src/logger.rs
//! The per-handle logging surface.

use std::fmt;
use std::sync::Arc;

use levels::{Dispatch, Severity};

use crate::hub::LevelHub;

/// A logging handle bound to a [`LevelHub`].
///
/// A `Logger` carries no level of its own; reading the level consults the
/// hub and changing it changes it for every handle in the process. Named
/// handles prepend a `[name]` prefix to each message, with the prefix
/// string composed once when the handle is created.
///
/// Handles are cheap to clone and live for the rest of the process; there
/// is no way to destroy one.
#[derive(Clone)]
pub struct Logger {
    hub: Arc<LevelHub>,
    dispatch: Arc<dyn Dispatch>,
    name: Option<String>,
    prefix: String,
}

impl Logger {
    /// Creates the anonymous root handle for `hub`.
    #[must_use]
    pub fn root(hub: Arc<LevelHub>) -> Self {
        let dispatch = hub.root_dispatch();
        Self {
            hub,
            dispatch,
            name: None,
            prefix: String::new(),
        }
    }

    /// Creates the handle named `name` on `hub`.
    #[must_use]
    pub fn named_on(hub: Arc<LevelHub>, name: &str) -> Self {
        let dispatch = hub.dispatch_for(name);
        Self {
            hub,
            dispatch,
            name: Some(name.to_string()),
            prefix: format!("[{name}] "),
        }
    }

    /// Returns this handle's name, or `None` for the root handle.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns a child handle.
    ///
    /// Children of the root are named `child`; children of a named handle
    /// extend the name with a colon, so `auth` begets `auth:session`.
    /// Handles for the same name share one underlying dispatch.
    #[must_use]
    pub fn named(&self, child: &str) -> Self {
        let name = match &self.name {
            Some(parent) => format!("{parent}:{child}"),
            None => child.to_string(),
        };
        Self::named_on(Arc::clone(&self.hub), &name)
    }

    /// Returns the process-wide level.
    #[must_use]
    pub fn level(&self) -> Severity {
        self.hub.level()
    }

    /// Installs `level` process-wide and persists it.
    ///
    /// Persistence is the default so a chosen level survives restarts; use
    /// [`set_level_transient`](Self::set_level_transient) to change the
    /// level for this run only. Either way the change is visible on every
    /// handle before this returns.
    pub fn set_level(&self, level: Severity) {
        self.hub.set_level(level, true);
    }

    /// Installs `level` process-wide without touching the store.
    pub fn set_level_transient(&self, level: Severity) {
        self.hub.set_level(level, false);
    }

    /// Installs the level named by `level` process-wide and persists it.
    ///
    /// The name is parsed leniently: case is ignored and anything
    /// unrecognised falls back to [`Severity::Error`]. A bad level string
    /// quiets the process, it never breaks it.
    pub fn set_level_str(&self, level: &str) {
        self.hub.set_level(Severity::parse_lossy(level), true);
    }

    /// Installs the level named by `level` without touching the store.
    pub fn set_level_str_transient(&self, level: &str) {
        self.hub.set_level(Severity::parse_lossy(level), false);
    }

    fn emit(&self, severity: Severity, message: &dyn fmt::Display) {
        if severity.is_silent() || severity < self.dispatch.threshold() {
            return;
        }
        if self.prefix.is_empty() {
            self.dispatch.emit(severity, &message.to_string());
        } else {
            self.dispatch
                .emit(severity, &format!("{}{message}", self.prefix));
        }
    }

    /// Records `message` at TRACE.
    pub fn trace(&self, message: impl fmt::Display) {
        self.emit(Severity::Trace, &message);
    }

    /// Records `message` at DEBUG.
    pub fn debug(&self, message: impl fmt::Display) {
        self.emit(Severity::Debug, &message);
    }

    /// Records `message` at DEBUG.
    ///
    /// Alias kept for callers used to console-style loggers where `log` is
    /// the generic method; it carries no severity of its own.
    pub fn log(&self, message: impl fmt::Display) {
        self.emit(Severity::Debug, &message);
    }

    /// Records `message` at INFO.
    pub fn info(&self, message: impl fmt::Display) {
        self.emit(Severity::Info, &message);
    }

    /// Records `message` at WARN.
    pub fn warn(&self, message: impl fmt::Display) {
        self.emit(Severity::Warn, &message);
    }

    /// Records `message` at ERROR.
    pub fn error(&self, message: impl fmt::Display) {
        self.emit(Severity::Error, &message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}
