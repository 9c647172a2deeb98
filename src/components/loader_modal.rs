//! Loader Modal Component
//!
//! Visible only until the first refresh settles.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn LoaderModal() -> impl IntoView {
    let store = use_app_store();
    let visible = move || store.gate().get().show_loader();

    view! {
        <div id="loaderModal" class="loader-modal" style:display=move || if visible() { "flex" } else { "none" }>
            <div class="loader"></div>
        </div>
    }
}
