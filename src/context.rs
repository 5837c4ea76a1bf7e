//! Application Context
//!
//! Shared state provided via Leptos Context API. Components forward user
//! intents here; this is the only place the todo lists are mutated.

use leptos::prelude::*;

use crate::models::TodoItem;
use crate::storage::KeyValueStorage;
use crate::store::{self, UiStore};
use crate::todos::TodoStore;

/// Storage handle the widget runs on: the browser store, or memory as a fallback
pub type DynStorage = Box<dyn KeyValueStorage>;

/// Which rendered list an item click came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Active,
    Removed,
}

impl ListKind {
    /// Section heading shown above the list
    pub fn title(&self) -> &'static str {
        match self {
            ListKind::Active => "todos",
            ListKind::Removed => "removed-todos",
        }
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    todos: RwSignal<TodoStore<DynStorage>, LocalStorage>,
    /// Draft text and error banner
    pub ui: UiStore,
}

impl TodoContext {
    pub fn new(todos: TodoStore<DynStorage>, ui: UiStore) -> Self {
        Self {
            todos: RwSignal::new_local(todos),
            ui,
        }
    }

    /// Snapshot of one list, tracked for re-rendering
    pub fn items(&self, list: ListKind) -> Vec<TodoItem> {
        self.todos.with(|todos| match list {
            ListKind::Active => todos.active().to_vec(),
            ListKind::Removed => todos.removed().to_vec(),
        })
    }

    /// Try to add the pending draft as a new item
    pub fn submit_draft(&self) {
        let text = store::store_draft(&self.ui);
        let result = self.todos.try_update(|todos| todos.create(&text));
        match result {
            Some(Ok(_)) => store::store_clear_draft(&self.ui),
            Some(Err(e)) => store::store_show_error(&self.ui, e.to_string()),
            None => log::error!("todo store disposed, dropping submit"),
        }
    }

    /// Route a click: active items are removed, removed items restored
    pub fn item_clicked(&self, list: ListKind, id: &str) {
        match list {
            ListKind::Active => {
                self.todos.update(|todos| {
                    todos.remove(id);
                });
            }
            ListKind::Removed => {
                let result = self.todos.try_update(|todos| todos.restore(id));
                if let Some(Err(e)) = result {
                    store::store_show_error(&self.ui, e.to_string());
                }
            }
        }
    }

    pub fn set_draft(&self, text: String) {
        store::store_set_draft(&self.ui, text);
    }

    pub fn dismiss_error(&self) {
        store::store_dismiss_error(&self.ui);
    }
}

/// Get the todo context provided by `App`
pub fn use_todos() -> TodoContext {
    expect_context::<TodoContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageKeys;
    use crate::storage::MemoryStorage;
    use reactive_stores::Store;

    /// The owner must outlive the context, so callers hold on to it
    fn new_context() -> (Owner, TodoContext) {
        let owner = Owner::new();
        owner.set();
        let mut n = 0usize;
        let storage: DynStorage = Box::new(MemoryStorage::new());
        let todos = TodoStore::load_with_random(storage, StorageKeys::default(), move || {
            n += 1;
            ((n - 1) / 10 % 26) as f64 / 26.0 + 0.001
        })
        .unwrap();
        let ctx = TodoContext::new(todos, Store::new(Default::default()));
        (owner, ctx)
    }

    fn texts(ctx: &TodoContext, list: ListKind) -> Vec<String> {
        ctx.items(list).into_iter().map(|item| item.text).collect()
    }

    #[test]
    fn test_submit_clears_draft() {
        let (_owner, ctx) = new_context();
        ctx.set_draft("Buy milk".to_string());
        ctx.submit_draft();
        assert_eq!(texts(&ctx, ListKind::Active), vec!["Buy milk"]);
        assert_eq!(store::store_draft(&ctx.ui), "");
        assert_eq!(store::store_error(&ctx.ui), None);
    }

    #[test]
    fn test_rejected_submit_keeps_draft_and_shows_error() {
        let (_owner, ctx) = new_context();
        ctx.set_draft("Buy milk".to_string());
        ctx.submit_draft();
        ctx.set_draft("Buy milk".to_string());
        ctx.submit_draft();

        assert_eq!(store::store_draft(&ctx.ui), "Buy milk");
        assert_eq!(
            store::store_error(&ctx.ui).as_deref(),
            Some("Cannot add duplicate todo.")
        );

        ctx.dismiss_error();
        assert_eq!(store::store_error(&ctx.ui), None);
    }

    #[test]
    fn test_empty_submit_shows_error() {
        let (_owner, ctx) = new_context();
        ctx.submit_draft();
        assert_eq!(
            store::store_error(&ctx.ui).as_deref(),
            Some("Cannot add empty todo.")
        );
        assert!(ctx.items(ListKind::Active).is_empty());
    }

    #[test]
    fn test_clicks_route_by_list() {
        let (_owner, ctx) = new_context();
        ctx.set_draft("a".to_string());
        ctx.submit_draft();
        let id = ctx.items(ListKind::Active)[0].id.clone();

        ctx.item_clicked(ListKind::Active, &id);
        assert!(ctx.items(ListKind::Active).is_empty());
        assert_eq!(texts(&ctx, ListKind::Removed), vec!["a"]);

        ctx.item_clicked(ListKind::Removed, &id);
        assert_eq!(texts(&ctx, ListKind::Active), vec!["a"]);
        assert!(ctx.items(ListKind::Removed).is_empty());
    }

    #[test]
    fn test_rejected_restore_shows_error() {
        let (_owner, ctx) = new_context();
        ctx.set_draft("a".to_string());
        ctx.submit_draft();
        let old = ctx.items(ListKind::Active)[0].id.clone();
        ctx.item_clicked(ListKind::Active, &old);
        ctx.set_draft("a".to_string());
        ctx.submit_draft();

        ctx.item_clicked(ListKind::Removed, &old);
        assert_eq!(
            store::store_error(&ctx.ui).as_deref(),
            Some("Cannot add duplicate todo.")
        );
        assert_eq!(texts(&ctx, ListKind::Active), vec!["a"]);
        assert_eq!(texts(&ctx, ListKind::Removed), vec!["a"]);
    }
}
