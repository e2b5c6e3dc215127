//! `window.localStorage` as a [`KeyValueStore`]

use wasm_bindgen::JsValue;

use crate::persistence::{KeyValueStore, StorageError};

/// LocalStorage handle; `None` when the browser exposes no storage
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    /// Grab LocalStorage from the current window
    ///
    /// Never fails: a missing or blocked storage yields a store whose every
    /// call errors, which the startup probe turns into `Unavailable`.
    pub fn from_window() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("window.localStorage is not accessible");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

fn backend_error(e: JsValue) -> StorageError {
    StorageError::Backend(format!("{e:?}"))
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(backend_error)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(backend_error)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage()?.remove_item(key).map_err(backend_error)
    }
}
