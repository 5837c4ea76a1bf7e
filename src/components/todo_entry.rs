//! Todo Entry Component
//!
//! A single clickable item in a list.

use leptos::prelude::*;

use crate::models::TodoItem;

#[component]
pub fn TodoEntry(
    item: TodoItem,
    #[prop(into)] on_click: Callback<String>,
) -> impl IntoView {
    let id = item.id.clone();

    view! {
        <div
            class="todo"
            data-key=item.id
            on:click=move |_| on_click.run(id.clone())
        >
            {item.text}
        </div>
    }
}
