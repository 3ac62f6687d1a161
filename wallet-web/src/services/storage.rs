//! `localStorage` access

use lib_wallet::{KeyValueStore, MemoryStore, StorageError};
use web_sys::Storage;

use super::wallet_kit::js_error_message;

/// `window.localStorage` behind [`KeyValueStore`].
pub struct BrowserStore {
    storage: Storage,
}

impl BrowserStore {
    pub fn local() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_error_message(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;

        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Read(js_error_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(js_error_message(&e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StorageError::Write(js_error_message(&e)))
    }
}

/// Browser storage when the page may use it, memory otherwise.
pub enum AppStore {
    Browser(BrowserStore),
    Memory(MemoryStore),
}

impl AppStore {
    pub fn open() -> Self {
        match BrowserStore::local() {
            Ok(store) => AppStore::Browser(store),
            Err(e) => {
                log::warn!("{}; wallet connection will not survive a reload", e);
                AppStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for AppStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            AppStore::Browser(store) => store.get(key),
            AppStore::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            AppStore::Browser(store) => store.set(key, value),
            AppStore::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match self {
            AppStore::Browser(store) => store.remove(key),
            AppStore::Memory(store) => store.remove(key),
        }
    }
}
