//! Best score persistence
//!
//! A single integer stored under one key in a key-value facility
//! (LocalStorage on web). Availability is probed once at startup; after that
//! any storage failure is swallowed here and turns the adapter into a no-op
//! for the rest of the process.

pub mod memory;

pub use memory::MemoryStore;

/// Sentinel key used by [`probe`]
pub const PROBE_KEY: &str = "__storage_test__";

/// Failure reported by a key-value backend
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No storage facility exists (e.g. `window.localStorage` is null)
    #[error("storage is not available")]
    Unavailable,
    /// The backend rejected the operation (quota, security policy, ...)
    #[error("storage operation failed: {0}")]
    Backend(String),
}

/// Minimal string key-value store, shaped after the Web Storage API
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Whether the backing store may be used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Available,
    Unavailable,
}

impl Capability {
    pub fn is_available(self) -> bool {
        self == Capability::Available
    }
}

/// Write then delete a sentinel key to find out if `store` works
pub fn probe<S: KeyValueStore>(store: &mut S) -> Capability {
    let result = store
        .set_item(PROBE_KEY, "1")
        .and_then(|()| store.remove_item(PROBE_KEY));

    match result {
        Ok(()) => Capability::Available,
        Err(e) => {
            log::warn!("Storage is not available, best score persistence disabled: {e}");
            Capability::Unavailable
        }
    }
}

/// Persistence adapter for the best score
#[derive(Debug)]
pub struct BestScoreStore<S> {
    store: S,
    key: String,
    capability: Capability,
}

impl<S: KeyValueStore> BestScoreStore<S> {
    /// Wrap `store` with an already probed capability
    pub fn new(store: S, key: impl Into<String>, capability: Capability) -> Self {
        Self {
            store,
            key: key.into(),
            capability,
        }
    }

    /// Probe `store` and wrap it
    pub fn probed(mut store: S, key: impl Into<String>) -> Self {
        let capability = probe(&mut store);
        Self::new(store, key, capability)
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Stored best score, or `None` if unset, unreadable or unavailable
    pub fn load(&mut self) -> Option<u32> {
        if !self.capability.is_available() {
            return None;
        }

        match self.store.get_item(&self.key) {
            Ok(Some(value)) => match value.trim().parse::<u32>() {
                Ok(score) => Some(score),
                Err(_) => {
                    log::warn!("Ignoring malformed best score {value:?}");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                self.downgrade(&e);
                None
            }
        }
    }

    /// Persist `score` as the best score
    pub fn save(&mut self, score: u32) {
        if !self.capability.is_available() {
            return;
        }

        match self.store.set_item(&self.key, &score.to_string()) {
            Ok(()) => log::info!("Best score saved ({score} attempts)"),
            Err(e) => self.downgrade(&e),
        }
    }

    /// Forget the best score
    pub fn clear(&mut self) {
        if !self.capability.is_available() {
            return;
        }

        match self.store.remove_item(&self.key) {
            Ok(()) => log::info!("Best score cleared"),
            Err(e) => self.downgrade(&e),
        }
    }

    fn downgrade(&mut self, error: &StorageError) {
        log::warn!("Storage failed ({error}), best score persistence disabled");
        self.capability = Capability::Unavailable;
    }
}
