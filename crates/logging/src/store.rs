//! crates/logging/src/store.rs
//! Best-effort persistence for the process-wide level setting.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// A key-value store holding the persisted level preference.
///
/// Both operations are best-effort by contract. A read that fails for any
/// reason (missing backing storage, permission denied, unreadable content)
/// reports `None`, and a failed write is dropped. The facade treats an
/// unavailable store exactly like an empty one, so persistence problems can
/// never disable logging itself.
pub trait LevelStore: Send + Sync {
    /// Returns the value stored at `key`, or `None` when absent or
    /// unreadable.
    fn read(&self, key: &str) -> Option<String>;

    /// Stores `value` at `key`, silently dropping failures.
    fn write(&self, key: &str, value: &str);
}

/// Replaces characters that are risky in file names so a storage key maps
/// to exactly one file under the store's base directory.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// A [`LevelStore`] keeping one file per key under a base directory.
///
/// The directory is created lazily on the first write. Reads trim trailing
/// whitespace so a hand-edited file with a trailing newline still parses.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `base`.
    #[must_use]
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Creates a store at the conventional per-user state location.
    ///
    /// Resolution order is `$XDG_STATE_HOME/loghub`, then
    /// `$HOME/.local/state/loghub`, then a `loghub` directory under the
    /// system temp directory when neither variable is usable.
    #[must_use]
    pub fn default_location() -> Self {
        Self::new(default_base())
    }

    /// Returns the directory this store keeps its files under.
    #[must_use]
    pub fn base(&self) -> &std::path::Path {
        &self.base
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(sanitize_key(key))
    }
}

fn default_base() -> PathBuf {
    if let Some(dir) = env::var_os("XDG_STATE_HOME") {
        if !dir.is_empty() {
            return PathBuf::from(dir).join("loghub");
        }
    }
    if let Some(home) = env::var_os("HOME") {
        if !home.is_empty() {
            return PathBuf::from(home).join(".local").join("state").join("loghub");
        }
    }
    env::temp_dir().join("loghub")
}

impl LevelStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        let contents = fs::read_to_string(self.path_for(key)).ok()?;
        Some(contents.trim_end().to_string())
    }

    fn write(&self, key: &str, value: &str) {
        let _ = fs::create_dir_all(&self.base);
        let _ = fs::write(self.path_for(key), value);
    }
}

/// A [`LevelStore`] backed by an in-process map.
///
/// Useful in tests and for embedders that want the persistence semantics
/// without touching the filesystem. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LevelStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }
}
