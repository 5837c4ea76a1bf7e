//! Todo List Component
//!
//! Renders one of the two lists; hidden while the list is empty.

use leptos::prelude::*;

use crate::components::TodoEntry;
use crate::context::{use_todos, ListKind};

/// One titled list section
///
/// Clicking an entry removes it from the active list, or restores it from
/// the removed list.
#[component]
pub fn TodoList(list: ListKind) -> impl IntoView {
    let ctx = use_todos();

    let items = move || ctx.items(list);
    let on_click = Callback::new(move |id: String| ctx.item_clicked(list, &id));

    view! {
        <Show when=move || !items().is_empty()>
            <div class=format!("todos-{}", list.title())>
                <h2>{list.title()}</h2>
                <div class="todo-list">
                    <For
                        each=items
                        key=|item| item.id.clone()
                        children=move |item| view! { <TodoEntry item=item on_click=on_click /> }
                    />
                </div>
            </div>
        </Show>
    }
}
