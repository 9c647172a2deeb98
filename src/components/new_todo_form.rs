//! New Todo Form Component
//!
//! Text input plus Add button. Empty text never reaches the backend.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::store::{store_report_error, use_app_store};

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());
    let input_ref = NodeRef::<Input>::new();

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.is_empty() { return; }

        spawn_local(async move {
            match commands::create_todo(&text).await {
                Ok(_) => {
                    set_new_text.set(String::new());
                    if let Some(input) = input_ref.get() {
                        let _ = input.focus();
                    }
                    ctx.reload();
                }
                Err(e) => store_report_error(&store, "Adding todo", e),
            }
        });
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                id="newTodo"
                placeholder="Add new todo..."
                node_ref=input_ref
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
