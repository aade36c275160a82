//! crates/logging/src/hub.rs
//! Process-wide level state and registry synchronisation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use levels::{Dispatch, Severity};

use crate::config::{ConfigUpdate, LoggerConfig};
use crate::store::LevelStore;

struct HubState {
    config: LoggerConfig,
    current: Severity,
    root: Arc<dyn Dispatch>,
    named: HashMap<String, Arc<dyn Dispatch>>,
}

/// Owner of the level every logger in a process shares.
///
/// The hub holds the configuration, the current level, the root dispatch,
/// and the cache of named dispatch handles, all behind one mutex. Every
/// mutation runs its full update-broadcast-persist sequence under that
/// lock, so two concurrent level changes cannot interleave and a handle can
/// never observe a half-propagated state. Emission itself takes no hub
/// lock; handles filter against the threshold that was pushed to them ahead
/// of time.
///
/// Constructing a hub immediately resolves the effective level, which is
/// how a freshly started process re-adopts the value a previous run
/// persisted.
pub struct LevelHub {
    state: Mutex<HubState>,
    store: Arc<dyn LevelStore>,
}

impl LevelHub {
    /// Creates a hub over the given root dispatch, store, and
    /// configuration, then resolves and broadcasts the initial level.
    #[must_use]
    pub fn new(
        root: Arc<dyn Dispatch>,
        store: Arc<dyn LevelStore>,
        config: LoggerConfig,
    ) -> Arc<Self> {
        let hub = Arc::new(Self {
            state: Mutex::new(HubState {
                current: config.default_level,
                config,
                root,
                named: HashMap::new(),
            }),
            store,
        });
        {
            let mut state = hub.lock();
            let level = hub.resolve_level(&state.config);
            state.current = level;
            Self::broadcast(&mut state, level);
        }
        hub
    }

    fn lock(&self) -> MutexGuard<'_, HubState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Next effective level for `config`: the persisted value when
    /// persistence is active and the stored text parses strictly, the
    /// configured default otherwise. The store is not consulted at all when
    /// persistence is inactive.
    fn resolve_level(&self, config: &LoggerConfig) -> Severity {
        config
            .persistence_key()
            .and_then(|key| self.store.read(key))
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(config.default_level)
    }

    fn broadcast(state: &mut HubState, level: Severity) {
        state.root.set_threshold(level);
        for dispatch in state.named.values() {
            dispatch.set_threshold(level);
        }
    }

    /// Returns the current process-wide level.
    #[must_use]
    pub fn level(&self) -> Severity {
        self.lock().current
    }

    /// Returns a snapshot of the current configuration.
    #[must_use]
    pub fn config(&self) -> LoggerConfig {
        self.lock().config.clone()
    }

    /// Installs `level` as the process-wide threshold.
    ///
    /// The new level is pushed to the root dispatch and every cached named
    /// dispatch before this returns, so an emission issued afterwards
    /// observes it on any handle, including handles created earlier. When
    /// `persist` is true and persistence is active, the canonical text form
    /// is written to the store as the final step.
    pub fn set_level(&self, level: Severity, persist: bool) {
        let mut state = self.lock();
        state.current = level;
        Self::broadcast(&mut state, level);
        if persist {
            if let Some(key) = state.config.persistence_key() {
                self.store.write(key, level.as_str());
            }
        }
    }

    /// Returns the dispatch handle for `name`, creating and registering it
    /// on first use.
    ///
    /// A freshly created handle is seeded with the current level before it
    /// is returned, and from then on participates in every broadcast.
    /// Repeated requests for the same name share one handle.
    pub fn dispatch_for(&self, name: &str) -> Arc<dyn Dispatch> {
        let mut state = self.lock();
        if let Some(dispatch) = state.named.get(name) {
            return Arc::clone(dispatch);
        }
        let dispatch = state.root.create_named(name);
        dispatch.set_threshold(state.current);
        state.named.insert(name.to_string(), Arc::clone(&dispatch));
        dispatch
    }

    /// Returns the root dispatch handle.
    #[must_use]
    pub fn root_dispatch(&self) -> Arc<dyn Dispatch> {
        Arc::clone(&self.lock().root)
    }

    /// Merges `update` into the configuration and recomputes the effective
    /// level.
    ///
    /// The recomputed level follows the same precedence as construction: a
    /// strictly parseable persisted value wins while persistence is active,
    /// the merged `default_level` otherwise. The result is broadcast but
    /// never written back; reconfiguration adopts state, it does not create
    /// it.
    pub fn reconfigure(&self, update: ConfigUpdate) {
        let mut state = self.lock();
        state.config.merge(update);
        let level = self.resolve_level(&state.config);
        state.current = level;
        Self::broadcast(&mut state, level);
    }
}
