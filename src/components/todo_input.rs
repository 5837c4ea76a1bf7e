//! Todo Input Component
//!
//! Text field and "Add" button for creating new items.

use leptos::prelude::*;

use crate::context::use_todos;
use crate::store::store_draft;

/// Form for creating new items; Enter submits as well as the button
#[component]
pub fn TodoInput() -> impl IntoView {
    let ctx = use_todos();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_draft();
    };

    view! {
        <form class="input-container" on:submit=submit>
            <label for="text">
                <input
                    name="text"
                    id="text"
                    type="text"
                    prop:value=move || store_draft(&ctx.ui)
                    on:input=move |ev| ctx.set_draft(event_target_value(&ev))
                />
            </label>
            <div>
                <button type="submit">"Add"</button>
            </div>
        </form>
    }
}
