//! Error Banner Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Last request failure; dismissable, and cleared by the next good refresh
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || store.error().get().is_some()>
            <div class="error-banner" role="alert">
                <span>{move || store.error().get().unwrap_or_default()}</span>
                <button class="dismiss-btn" on:click=move |_| store.error().set(None)>"×"</button>
            </div>
        </Show>
    }
}
