//! Render Model
//!
//! Splits the fetched collection into the two displayed lists and derives
//! what each row shows. Components rebuild both lists from this on every
//! refresh.

use crate::models::TodoItem;

/// The collection split by completion, each side in collection order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partitioned {
    pub pending: Vec<TodoItem>,
    pub completed: Vec<TodoItem>,
}

impl Partitioned {
    /// Placeholder is shown only when both lists are empty
    pub fn show_placeholder(&self) -> bool {
        self.pending.is_empty() && self.completed.is_empty()
    }
}

pub fn partition(items: &[TodoItem]) -> Partitioned {
    let (completed, pending): (Vec<TodoItem>, Vec<TodoItem>) =
        items.iter().cloned().partition(|item| item.completed);
    Partitioned { pending, completed }
}

/// Per-row display decisions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub text_class: &'static str,
    pub toggle_label: &'static str,
    pub toggle_class: &'static str,
    /// Delete is offered only on pending items
    pub can_delete: bool,
}

impl RowView {
    pub fn for_item(item: &TodoItem) -> Self {
        if item.completed {
            Self {
                text_class: "todo-text completed",
                toggle_label: "Uncomplete",
                toggle_class: "toggle-btn uncomplete",
                can_delete: false,
            }
        } else {
            Self {
                text_class: "todo-text",
                toggle_label: "Complete",
                toggle_class: "toggle-btn complete",
                can_delete: true,
            }
        }
    }
}
