//! Todo Requests
//!
//! Wrappers for the `/items` endpoints.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::models::TodoItem;
use super::{api_url, read_json};

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
struct CreateTodoArgs<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct SetCompletedArgs {
    completed: bool,
}

#[derive(Deserialize)]
struct DeleteConfirmation {
    #[allow(dead_code)]
    message: String,
}

fn item_url(id: &str) -> Result<String, String> {
    api_url(&format!("/items/{}", utf8_percent_encode(id, NON_ALPHANUMERIC)))
}

// ========================
// Requests
// ========================

pub async fn list_todos() -> Result<Vec<TodoItem>, String> {
    let response = reqwest::get(api_url("/items")?)
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn create_todo(text: &str) -> Result<TodoItem, String> {
    let response = reqwest::Client::new()
        .post(api_url("/items")?)
        .json(&CreateTodoArgs { text })
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn set_completed(id: &str, completed: bool) -> Result<TodoItem, String> {
    let response = reqwest::Client::new()
        .put(item_url(id)?)
        .json(&SetCompletedArgs { completed })
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn delete_todo(id: &str) -> Result<(), String> {
    let response = reqwest::Client::new()
        .delete(item_url(id)?)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json::<DeleteConfirmation>(response).await.map(|_| ())
}
