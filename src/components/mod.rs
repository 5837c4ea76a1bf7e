//! UI Components
//!
//! Leptos components rendering the todo widget.

mod error_banner;
mod todo_entry;
mod todo_input;
mod todo_list;

pub use error_banner::ErrorBanner;
pub use todo_entry::TodoEntry;
pub use todo_input::TodoInput;
pub use todo_list::TodoList;
