//! # Connection Persistence
//!
//! [`KeyValueStore`] abstracts `window.localStorage`; [`ConnectionStore`] binds a
//! store to the configured key and applies [`PersistEffect`]s produced by the
//! record reducer.
//!
//! [`MemoryStore`] backs tests and is the fallback when the browser refuses
//! storage access (private mode, disabled cookies).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;
use crate::record::PersistEffect;

/// String key-value storage with `localStorage` semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    /// Current value without going through the `Result`-returning trait.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.peek(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// The single persisted connection entry.
pub struct ConnectionStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ConnectionStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Raw persisted value. Read failures are logged and treated as "nothing stored".
    pub fn read_raw(&self) -> Option<String> {
        match self.store.get(&self.key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Could not read stored wallet connection: {}", e);
                None
            }
        }
    }

    pub fn apply(&self, effect: &PersistEffect) -> Result<(), StorageError> {
        match effect {
            PersistEffect::None => Ok(()),
            PersistEffect::Write(stored) => {
                let json = serde_json::to_string(stored)
                    .map_err(|e| StorageError::Write(e.to_string()))?;
                self.store.set(&self.key, &json)
            }
            PersistEffect::Remove => self.store.remove(&self.key),
        }
    }
}
