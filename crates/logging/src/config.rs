//! crates/logging/src/config.rs
//! Facade configuration and partial reconfiguration.

use levels::Severity;

/// Storage key used when a configuration does not name its own.
pub const DEFAULT_STORAGE_KEY: &str = "loghub.level";

/// Process-wide facade configuration.
///
/// The defaults are deliberately quiet: only errors pass, and the level
/// chosen at runtime is persisted under [`DEFAULT_STORAGE_KEY`] so it
/// survives a restart.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoggerConfig {
    /// Level applied when no usable persisted value exists.
    pub default_level: Severity,
    /// Key identifying the persisted slot. `None` disables persistence
    /// outright, regardless of [`enable_persistence`](Self::enable_persistence).
    pub storage_key: Option<String>,
    /// Master switch for reading the persisted value at startup and writing
    /// it back on level changes.
    pub enable_persistence: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            default_level: Severity::Error,
            storage_key: Some(DEFAULT_STORAGE_KEY.to_string()),
            enable_persistence: true,
        }
    }
}

impl LoggerConfig {
    /// Returns the storage key if persistence is active, `None` otherwise.
    ///
    /// Both the master switch and the key must be present for persistence
    /// to participate; a `None` here means reads are skipped entirely and
    /// writes are suppressed.
    #[must_use]
    pub fn persistence_key(&self) -> Option<&str> {
        if self.enable_persistence {
            self.storage_key.as_deref()
        } else {
            None
        }
    }

    /// Overwrites the fields supplied in `update`, leaving the rest alone.
    pub fn merge(&mut self, update: ConfigUpdate) {
        if let Some(level) = update.default_level {
            self.default_level = level;
        }
        if let Some(key) = update.storage_key {
            self.storage_key = key;
        }
        if let Some(enabled) = update.enable_persistence {
            self.enable_persistence = enabled;
        }
    }
}

/// A partial update applied over an existing [`LoggerConfig`].
///
/// Every field is optional; only supplied fields are written during
/// [`LoggerConfig::merge`]. The `storage_key` field is doubly optional so
/// "leave the key as it is" (`None`) stays distinguishable from "clear the
/// key" (`Some(None)`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigUpdate {
    /// New fallback level, if supplied.
    pub default_level: Option<Severity>,
    /// New storage key, if supplied. `Some(None)` clears the key.
    pub storage_key: Option<Option<String>>,
    /// New persistence switch, if supplied.
    pub enable_persistence: Option<bool>,
}

impl ConfigUpdate {
    /// Creates an update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fallback level.
    #[must_use]
    pub fn default_level(mut self, level: Severity) -> Self {
        self.default_level = Some(level);
        self
    }

    /// Replaces the storage key.
    #[must_use]
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(Some(key.into()));
        self
    }

    /// Clears the storage key, disabling persistence outright.
    #[must_use]
    pub fn clear_storage_key(mut self) -> Self {
        self.storage_key = Some(None);
        self
    }

    /// Sets the persistence master switch.
    #[must_use]
    pub fn enable_persistence(mut self, enabled: bool) -> Self {
        self.enable_persistence = Some(enabled);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_quiet_and_persistent() {
        let config = LoggerConfig::default();
        assert_eq!(config.default_level, Severity::Error);
        assert_eq!(config.storage_key.as_deref(), Some(DEFAULT_STORAGE_KEY));
        assert!(config.enable_persistence);
    }

    #[test]
    fn persistence_key_requires_switch_and_key() {
        let config = LoggerConfig::default();
        assert_eq!(config.persistence_key(), Some(DEFAULT_STORAGE_KEY));

        let disabled = LoggerConfig {
            enable_persistence: false,
            ..LoggerConfig::default()
        };
        assert_eq!(disabled.persistence_key(), None);

        let keyless = LoggerConfig {
            storage_key: None,
            ..LoggerConfig::default()
        };
        assert_eq!(keyless.persistence_key(), None);
    }

    #[test]
    fn merge_overwrites_only_supplied_fields() {
        let mut config = LoggerConfig::default();
        config.merge(ConfigUpdate::new().default_level(Severity::Info));

        assert_eq!(config.default_level, Severity::Info);
        assert_eq!(config.storage_key.as_deref(), Some(DEFAULT_STORAGE_KEY));
        assert!(config.enable_persistence);
    }

    #[test]
    fn merge_distinguishes_absent_key_from_cleared_key() {
        let mut untouched = LoggerConfig::default();
        untouched.merge(ConfigUpdate::new().enable_persistence(false));
        assert_eq!(untouched.storage_key.as_deref(), Some(DEFAULT_STORAGE_KEY));

        let mut cleared = LoggerConfig::default();
        cleared.merge(ConfigUpdate::new().clear_storage_key());
        assert_eq!(cleared.storage_key, None);
    }

    #[test]
    fn merge_replaces_storage_key() {
        let mut config = LoggerConfig::default();
        config.merge(ConfigUpdate::new().storage_key("app.level"));
        assert_eq!(config.storage_key.as_deref(), Some("app.level"));
    }

    #[test]
    fn empty_update_changes_nothing() {
        let mut config = LoggerConfig {
            default_level: Severity::Trace,
            storage_key: Some("custom".to_string()),
            enable_persistence: false,
        };
        let before = config.clone();
        config.merge(ConfigUpdate::new());
        assert_eq!(config, before);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn logger_config_serde_round_trip() {
            let config = LoggerConfig {
                default_level: Severity::Warn,
                storage_key: Some("app.level".to_string()),
                enable_persistence: false,
            };

            let json = serde_json::to_string(&config).unwrap();
            let decoded: LoggerConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, config);
        }
    }
}
