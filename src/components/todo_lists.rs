//! Todo Lists Component
//!
//! Pending and completed lists, rebuilt from scratch from the store on
//! every refresh, plus the empty-collection placeholder.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::render::partition;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoLists() -> impl IntoView {
    let store = use_app_store();

    let parts = Memo::new(move |_| partition(&store.items().get()));

    view! {
        <section class="todo-lists">
            <p
                id="placeholder"
                class="placeholder"
                style:display=move || if parts.get().show_placeholder() { "block" } else { "none" }
            >
                "Nothing to do yet. Add a todo above."
            </p>

            <h2>"To do"</h2>
            <ul id="todoList" class="todo-list">
                {move || {
                    parts.get().pending.into_iter()
                        .map(|item| view! { <TodoRow item=item /> })
                        .collect_view()
                }}
            </ul>

            <h2>"Completed"</h2>
            <ul id="completedList" class="todo-list completed">
                {move || {
                    parts.get().completed.into_iter()
                        .map(|item| view! { <TodoRow item=item /> })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}
