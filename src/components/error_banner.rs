//! Error Banner Component

use leptos::prelude::*;

use crate::context::use_todos;
use crate::store::store_error;

/// Dismissible validation message above the input row
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_todos();

    view! {
        <div class="error-container">
            {move || store_error(&ctx.ui).map(|message| view! {
                <div class="error-message">
                    {message}
                    <button type="button" on:click=move |_| ctx.dismiss_error()>"X"</button>
                </div>
            })}
        </div>
    }
}
