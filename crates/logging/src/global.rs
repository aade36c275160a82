//! crates/logging/src/global.rs
//! The process-global default logger.

use std::sync::{Arc, OnceLock};

use levels::Severity;
use logging_sink::WriterSink;

use crate::config::{ConfigUpdate, LoggerConfig};
use crate::hub::LevelHub;
use crate::logger::Logger;
use crate::store::FileStore;

static DEFAULT_HUB: OnceLock<Arc<LevelHub>> = OnceLock::new();

/// The lazily-created hub behind the free functions below: stderr output,
/// a file store at the conventional state location, default configuration.
fn default_hub() -> &'static Arc<LevelHub> {
    DEFAULT_HUB.get_or_init(|| {
        LevelHub::new(
            Arc::new(WriterSink::stderr()),
            Arc::new(FileStore::default_location()),
            LoggerConfig::default(),
        )
    })
}

/// Returns the process-global root logger.
///
/// The first call builds the default hub; a level persisted by a previous
/// run is re-adopted at that moment. Every program that just wants to log
/// starts here, while embedders and tests construct their own
/// [`LevelHub`] and [`Logger::root`] instead.
#[must_use]
pub fn logger() -> Logger {
    Logger::root(Arc::clone(default_hub()))
}

/// Returns a named logger on the process-global hub.
#[must_use]
pub fn named(name: &str) -> Logger {
    Logger::named_on(Arc::clone(default_hub()), name)
}

/// Applies a partial configuration update to the process-global hub.
///
/// Unsupplied fields keep their current values; the effective level is
/// recomputed and broadcast before this returns.
pub fn configure_logger(update: ConfigUpdate) {
    default_hub().reconfigure(update);
}

/// Installs `level` on the process-global hub and persists it.
pub fn set_level(level: Severity) {
    default_hub().set_level(level, true);
}

/// Installs `level` on the process-global hub without touching the store.
pub fn set_level_transient(level: Severity) {
    default_hub().set_level(level, false);
}

/// Returns the process-global level.
#[must_use]
pub fn current_level() -> Severity {
    default_hub().level()
}
