//! UI Components
//!
//! Leptos components for the todo page.

mod new_todo_form;
mod todo_row;
mod todo_lists;
mod loader_modal;
mod status_line;
mod error_banner;

pub use new_todo_form::NewTodoForm;
pub use todo_row::TodoRow;
pub use todo_lists::TodoLists;
pub use loader_modal::LoaderModal;
pub use status_line::StatusLine;
pub use error_banner::ErrorBanner;
