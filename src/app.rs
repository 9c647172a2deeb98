//! Todolist Frontend App
//!
//! Single page: new-todo form, pending and completed lists, backend status.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorBanner, LoaderModal, NewTodoForm, StatusLine, TodoLists};
use crate::context::AppContext;
use crate::store::{AppState, AppStore};
use crate::sync;

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = AppStore::new(AppState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));

    // Refetch the whole collection on mount and after every mutation
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Refreshing todos, trigger={}", trigger).into());
        spawn_local(sync::refresh(store));
    });

    spawn_local(sync::load_status(store));

    view! {
        <main class="app-layout">
            <LoaderModal />

            <h1>"Todo List"</h1>
            <StatusLine />
            <ErrorBanner />

            <NewTodoForm />
            <TodoLists />
        </main>
    }
}
