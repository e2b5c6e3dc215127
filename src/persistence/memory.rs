//! In-memory key-value store
//!
//! Backs the native build (scores last for the process) and the tests.

use std::collections::HashMap;

use super::{KeyValueStore, StorageError};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails, like a blocked LocalStorage
    pub fn failing() -> Self {
        Self {
            items: HashMap::new(),
            failing: true,
        }
    }

    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.failing {
            Err(StorageError::Backend("memory store is in failing mode".into()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.items.remove(key);
        Ok(())
    }
}
