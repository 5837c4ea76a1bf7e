//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the
//! transient input state. The lists themselves live in `TodoStore`.

use leptos::prelude::*;
use reactive_stores::Store;

/// Transient presentation state
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Pending text in the input field
    pub draft: String,
    /// Message shown in the error banner, if any
    pub error: Option<String>,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_draft(store: &UiStore) -> String {
    store.draft().get()
}

/// Replace the draft; any visible error is cleared with it
pub fn store_set_draft(store: &UiStore, text: String) {
    store.draft().set(text);
    store.error().set(None);
}

pub fn store_clear_draft(store: &UiStore) {
    store.draft().set(String::new());
}

pub fn store_error(store: &UiStore) -> Option<String> {
    store.error().get()
}

pub fn store_show_error(store: &UiStore, message: impl Into<String>) {
    store.error().set(Some(message.into()));
}

pub fn store_dismiss_error(store: &UiStore) {
    store.error().set(None);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The owner must outlive the store, so callers hold on to it
    fn new_store() -> (Owner, UiStore) {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(UiState::default());
        (owner, store)
    }

    #[test]
    fn test_editing_draft_clears_error() {
        let (_owner, store) = new_store();
        store_set_draft(&store, "Buy milk".to_string());
        store_show_error(&store, "Cannot add duplicate todo.");
        assert!(store_error(&store).is_some());

        store_set_draft(&store, "Buy milk!".to_string());
        assert_eq!(store_error(&store), None);
        assert_eq!(store_draft(&store), "Buy milk!");
    }

    #[test]
    fn test_dismiss_keeps_draft() {
        let (_owner, store) = new_store();
        store_set_draft(&store, "x".to_string());
        store_show_error(&store, "oops");
        store_dismiss_error(&store);
        assert_eq!(store_error(&store), None);
        assert_eq!(store_draft(&store), "x");
    }
}
