//! Storage Layer
//!
//! String key-value storage for the two persisted lists.
//! `BrowserStorage` wraps `window.localStorage`; `MemoryStorage` backs tests.

use std::collections::HashMap;

use crate::config::StorageKeys;
use crate::error::{StorageError, StorageResult};
use crate::models::TodoItem;

/// Raw string storage, keyed by string
///
/// Serialization is handled by `load_lists` / `persist_lists`, not the backend.
pub trait KeyValueStorage {
    /// Read the value under `key`; `None` if never written
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the value under `key`
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

/// `window.localStorage`
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no global window".to_string()))?;
        let inner = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { inner })
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get_item(key).map_err(|e| StorageError::Backend {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.inner.set_item(key, value).map_err(|e| StorageError::Backend {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }
}

/// In-process storage, used when the browser store is unavailable and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read one list; an absent key yields an empty list
pub fn load_list<S: KeyValueStorage + ?Sized>(
    storage: &S,
    key: &str,
) -> StorageResult<Vec<TodoItem>> {
    match storage.get(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(|source| StorageError::Malformed {
            key: key.to_string(),
            source,
        }),
        None => Ok(Vec::new()),
    }
}

fn write_list<S: KeyValueStorage + ?Sized>(
    storage: &mut S,
    key: &str,
    items: &[TodoItem],
) -> StorageResult<()> {
    let raw = serde_json::to_string(items).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    storage.set(key, &raw)
}

/// Read `(active, removed)`, each key on its own so one bad entry
/// does not hide the other list
pub fn load_lists<S: KeyValueStorage + ?Sized>(
    storage: &S,
    keys: &StorageKeys,
) -> (StorageResult<Vec<TodoItem>>, StorageResult<Vec<TodoItem>>) {
    (load_list(storage, &keys.active), load_list(storage, &keys.removed))
}

/// Write both lists as two independent writes, active first
pub fn persist_lists<S: KeyValueStorage + ?Sized>(
    storage: &mut S,
    keys: &StorageKeys,
    active: &[TodoItem],
    removed: &[TodoItem],
) -> StorageResult<()> {
    write_list(storage, &keys.active, active)?;
    write_list(storage, &keys.removed, removed)
}
