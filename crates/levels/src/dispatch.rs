//! crates/levels/src/dispatch.rs
//! The seam between the level-management core and record emission.

use std::sync::Arc;

use crate::Severity;

/// A backend that receives log records and decides whether to render them.
///
/// The facade core never performs output itself; every record crosses this
/// trait. Implementations own their threshold so emission takes no shared
/// lock, and the hub pushes threshold changes through
/// [`set_threshold`](Self::set_threshold) ahead of time.
///
/// A record must be rendered exactly when `severity >= threshold` and the
/// severity is not [`Severity::Silent`]. A `Silent` threshold therefore
/// suppresses everything.
pub trait Dispatch: Send + Sync {
    /// Hands a record to the backend. Records below the threshold are
    /// dropped silently.
    fn emit(&self, severity: Severity, message: &str);

    /// Replaces the backend's filtering threshold.
    fn set_threshold(&self, severity: Severity);

    /// Returns the backend's current filtering threshold.
    fn threshold(&self) -> Severity;

    /// Creates a sibling handle for the given logger name.
    ///
    /// The sibling shares the backend's output target but carries its own
    /// threshold, seeded from this handle's current value.
    fn create_named(&self, name: &str) -> Arc<dyn Dispatch>;
}
