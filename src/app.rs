//! Todo Widget App
//!
//! Root component: loads the lists once and provides the todo context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ErrorBanner, TodoInput, TodoList};
use crate::config::AppConfig;
use crate::context::{DynStorage, ListKind, TodoContext};
use crate::storage::{BrowserStorage, MemoryStorage};
use crate::store::{store_show_error, UiState};
use crate::todos::TodoStore;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();
    let ui = Store::new(UiState::default());

    let storage: DynStorage = match BrowserStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::error!("{}; todos will not survive a reload", e);
            Box::new(MemoryStorage::new())
        }
    };

    let (todos, errors) = TodoStore::open(storage, config.storage_keys);
    for e in &errors {
        log::error!("failed to load todos: {}", e);
    }
    if !errors.is_empty() {
        store_show_error(&ui, "Stored todos could not be read.");
    }

    provide_context(TodoContext::new(todos, ui));

    view! {
        <div class="todo-container">
            <h1>"Todos"</h1>
            <ErrorBanner />
            <TodoInput />
            <TodoList list=ListKind::Active />
            <TodoList list=ListKind::Removed />
        </div>
    }
}
