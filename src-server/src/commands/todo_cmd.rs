//! Todo Commands
//!
//! `/items` CRUD. No validation beyond extraction; `text` may be empty.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::{TodoId, TodoItem};
use crate::AppState;
use super::CommandResult;

#[derive(Debug, Deserialize)]
pub struct CreateTodoBody {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodoBody {
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct DeleteConfirmation {
    pub message: &'static str,
}

/// List all todos
#[tracing::instrument(skip(state))]
pub async fn list_todos(State(state): State<AppState>) -> CommandResult<Json<Vec<TodoItem>>> {
    let todos = state.repo.list().await?;
    Ok(Json(todos))
}

/// Create a new todo
#[tracing::instrument(skip(state))]
pub async fn create_todo(
    State(state): State<AppState>,
    Json(body): Json<CreateTodoBody>,
) -> CommandResult<Json<TodoItem>> {
    let todo = state.repo.create(body.text).await?;
    tracing::info!(id = %todo.id, "todo created");
    Ok(Json(todo))
}

/// Mark a todo completed or not
#[tracing::instrument(skip(state))]
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateTodoBody>,
) -> CommandResult<Json<TodoItem>> {
    let todo = state.repo.update(&TodoId::new(id), body.completed).await?;
    Ok(Json(todo))
}

/// Delete a todo
#[tracing::instrument(skip(state))]
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CommandResult<Json<DeleteConfirmation>> {
    state.repo.delete(&TodoId::new(id)).await?;
    Ok(Json(DeleteConfirmation {
        message: "Todo successfully deleted",
    }))
}
