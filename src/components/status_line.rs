//! Status Line Component
//!
//! Shows whether the backend reached its document store.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatusLine() -> impl IntoView {
    let store = use_app_store();

    let status = move || store.status().get();

    view! {
        <p id="dbStatus" class=move || match status() {
            Some(s) if s.connected => "db-status connected",
            Some(_) => "db-status disconnected",
            None => "db-status",
        }>
            {move || match status() {
                Some(s) if s.connected => "Connected to document store".to_string(),
                Some(s) => format!("Not connected to document store (using {} storage)", s.strategy),
                None => String::new(),
            }}
        </p>
    }
}
