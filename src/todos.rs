//! Todo Store
//!
//! Owns the active and removed lists and mirrors every change to storage.

use std::collections::HashSet;

use crate::config::StorageKeys;
use crate::error::{StorageError, StorageResult, ValidationError};
use crate::models::{generate_id, TodoItem};
use crate::storage::{load_lists, persist_lists, KeyValueStorage};

/// Active and removed lists backed by a key-value storage
///
/// Every id lives in exactly one of the two lists, and no two active
/// items share the same text.
pub struct TodoStore<S> {
    storage: S,
    keys: StorageKeys,
    active: Vec<TodoItem>,
    removed: Vec<TodoItem>,
    random: Box<dyn FnMut() -> f64>,
}

impl<S: KeyValueStorage> TodoStore<S> {
    /// Wrap already loaded lists, drawing ids from `Math.random`
    pub fn new(
        storage: S,
        keys: StorageKeys,
        active: Vec<TodoItem>,
        removed: Vec<TodoItem>,
    ) -> Self {
        let (active, removed) = drop_repeated_ids(active, removed);
        let (active, removed) = demote_invalid_texts(active, removed);
        log::debug!("loaded {} active, {} removed", active.len(), removed.len());
        Self {
            storage,
            keys,
            active,
            removed,
            random: Box::new(js_sys::Math::random),
        }
    }

    /// Load both lists from `storage`.
    ///
    /// A key that cannot be read starts empty and its error is returned;
    /// the other list is kept as stored.
    pub fn open(storage: S, keys: StorageKeys) -> (Self, Vec<StorageError>) {
        let (active, removed) = load_lists(&storage, &keys);
        let mut errors = Vec::new();
        let mut keep_or_empty = |list: StorageResult<Vec<TodoItem>>| {
            list.unwrap_or_else(|e| {
                errors.push(e);
                Vec::new()
            })
        };
        let active = keep_or_empty(active);
        let removed = keep_or_empty(removed);
        (Self::new(storage, keys, active, removed), errors)
    }

    #[cfg(test)]
    pub(crate) fn with_random(mut self, random: impl FnMut() -> f64 + 'static) -> Self {
        self.random = Box::new(random);
        self
    }

    #[cfg(test)]
    pub(crate) fn load_with_random(
        storage: S,
        keys: StorageKeys,
        random: impl FnMut() -> f64 + 'static,
    ) -> StorageResult<Self> {
        let (store, errors) = Self::open(storage, keys);
        match errors.into_iter().next() {
            Some(e) => Err(e),
            None => Ok(store.with_random(random)),
        }
    }

    pub fn active(&self) -> &[TodoItem] {
        &self.active
    }

    pub fn removed(&self) -> &[TodoItem] {
        &self.removed
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[cfg(test)]
    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn contains_active_text(&self, text: &str) -> bool {
        self.active.iter().any(|item| item.text == text)
    }

    /// Append a new item to the active list
    pub fn create(&mut self, text: &str) -> Result<TodoItem, ValidationError> {
        if self.contains_active_text(text) {
            log::info!("rejected duplicate todo {:?}", text);
            return Err(ValidationError::DuplicateText);
        }
        if text.is_empty() {
            log::info!("rejected empty todo");
            return Err(ValidationError::EmptyText);
        }

        let item = TodoItem::new(self.fresh_id(), text.to_string());
        log::debug!("created {}", item.id);
        self.active.push(item.clone());
        self.persist_logged();
        Ok(item)
    }

    /// Move an active item to the end of the removed list.
    ///
    /// Returns `false` without touching storage when `id` is not active.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(index) = self.active.iter().position(|item| item.id == id) else {
            log::warn!("remove: {} is not in the active list", id);
            return false;
        };
        let item = self.active.remove(index);
        log::debug!("removed {}", item.id);
        self.removed.push(item);
        self.persist_logged();
        true
    }

    /// Move a removed item back to the end of the active list.
    ///
    /// `Ok(false)` when `id` is not in the removed list. Fails with
    /// `DuplicateText` if an active item already has the same text, and
    /// with `EmptyText` for an empty item demoted at load.
    pub fn restore(&mut self, id: &str) -> Result<bool, ValidationError> {
        let Some(index) = self.removed.iter().position(|item| item.id == id) else {
            log::warn!("restore: {} is not in the removed list", id);
            return Ok(false);
        };
        if self.removed[index].text.is_empty() {
            log::info!("rejected restore of {}: empty text", id);
            return Err(ValidationError::EmptyText);
        }
        if self.contains_active_text(&self.removed[index].text) {
            log::info!("rejected restore of {}: text already active", id);
            return Err(ValidationError::DuplicateText);
        }
        let item = self.removed.remove(index);
        log::debug!("restored {}", item.id);
        self.active.push(item);
        self.persist_logged();
        Ok(true)
    }

    /// Write both lists to storage
    pub fn persist(&mut self) -> StorageResult<()> {
        persist_lists(&mut self.storage, &self.keys, &self.active, &self.removed)
    }

    fn persist_logged(&mut self) {
        if let Err(e) = self.persist() {
            log::error!("failed to persist todos: {}", e);
        }
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let id = generate_id(&mut *self.random);
            let taken = self
                .active
                .iter()
                .chain(self.removed.iter())
                .any(|item| item.id == id);
            if !taken {
                return id;
            }
            log::debug!("id collision on {}, regenerating", id);
        }
    }
}

/// Keep the first occurrence of each id, scanning active before removed
fn drop_repeated_ids(
    active: Vec<TodoItem>,
    removed: Vec<TodoItem>,
) -> (Vec<TodoItem>, Vec<TodoItem>) {
    let mut seen = HashSet::new();
    let mut keep = |item: &TodoItem| {
        let fresh = seen.insert(item.id.clone());
        if !fresh {
            log::warn!("dropping stored todo with repeated id {}", item.id);
        }
        fresh
    };
    let active: Vec<TodoItem> = active.into_iter().filter(|item| keep(item)).collect();
    let removed: Vec<TodoItem> = removed.into_iter().filter(|item| keep(item)).collect();
    (active, removed)
}

/// Move active items with empty or already active text to the end of removed
fn demote_invalid_texts(
    active: Vec<TodoItem>,
    mut removed: Vec<TodoItem>,
) -> (Vec<TodoItem>, Vec<TodoItem>) {
    let mut texts = HashSet::new();
    let mut kept = Vec::with_capacity(active.len());
    for item in active {
        if item.text.is_empty() || !texts.insert(item.text.clone()) {
            log::warn!("moving stored todo {} with invalid text to removed", item.id);
            removed.push(item);
        } else {
            kept.push(item);
        }
    }
    (kept, removed)
}
