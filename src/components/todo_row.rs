//! Todo Row Component
//!
//! A single item with its toggle action, and delete while still pending.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::models::TodoItem;
use crate::render::RowView;
use crate::store::{store_report_error, use_app_store};

#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let row = RowView::for_item(&item);
    let completed = item.completed;
    let id = item.id.clone();

    let toggle_id = id.clone();
    let on_toggle = move |_: web_sys::MouseEvent| {
        let id = toggle_id.clone();
        spawn_local(async move {
            match commands::set_completed(&id, !completed).await {
                Ok(_) => ctx.reload(),
                Err(e) => store_report_error(&store, "Updating todo", e),
            }
        });
    };

    let delete_button = row.can_delete.then(|| {
        let delete_id = id.clone();
        let on_delete = move |_: web_sys::MouseEvent| {
            let id = delete_id.clone();
            spawn_local(async move {
                match commands::delete_todo(&id).await {
                    Ok(()) => ctx.reload(),
                    Err(e) => store_report_error(&store, "Deleting todo", e),
                }
            });
        };
        view! { <button class="delete-btn" on:click=on_delete>"Delete"</button> }
    });

    view! {
        <li class="todo-row" data-id=id>
            <span class=row.text_class>{item.text}</span>
            <div class="todo-actions">
                <button class=row.toggle_class on:click=on_toggle>{row.toggle_label}</button>
                {delete_button}
            </div>
        </li>
    }
}
