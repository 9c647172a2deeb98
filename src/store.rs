//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{StatusReport, TodoItem};
use crate::sync::LoadGate;

/// Client state. `items` is replaced wholesale by every refresh.
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last fetched collection
    pub items: Vec<TodoItem>,
    /// First-load gate for the loading indicator
    pub gate: LoadGate,
    /// Message of the last failed request, cleared by a successful refresh
    pub error: Option<String>,
    /// Backend connectivity, once known
    pub status: Option<StatusReport>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Record a failed request for the error banner
pub fn store_report_error(store: &AppStore, action: &str, err: String) {
    web_sys::console::error_1(&format!("[APP] {} failed: {}", action, err).into());
    store.error().set(Some(format!("{} failed: {}", action, err)));
}
