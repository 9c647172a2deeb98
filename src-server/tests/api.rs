//! HTTP API tests
//!
//! Drive the router in-process against a file store in a temp directory,
//! and against a document store that never connected.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use todolist_server_lib::config::DocumentConfig;
use todolist_server_lib::repository::{DocumentStore, FileStore};
use todolist_server_lib::{build_router, AppState};

async fn file_app() -> (TempDir, Router) {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = FileStore::open(dir.path().join("todos.json")).await;
    (dir, build_router(AppState::new(Arc::new(store))))
}

fn disconnected_app() -> Router {
    let store = DocumentStore::new(DocumentConfig::new("user", "password"));
    build_router(AppState::new(Arc::new(store)))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

#[tokio::test]
async fn empty_collection_lists_as_empty_array() {
    let (_dir, app) = file_app().await;
    let (status, body) = send(&app, "GET", "/items", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_returns_incomplete_item_and_grows_list() {
    let (_dir, app) = file_app().await;

    let (status, created) = send(&app, "POST", "/items", Some(json!({"text": "buy milk"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created, json!({"id": "0", "text": "buy milk", "completed": false}));

    let (_, list) = send(&app, "GET", "/items", None).await;
    assert_eq!(list.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn create_accepts_empty_text() {
    let (_dir, app) = file_app().await;
    let (status, created) = send(&app, "POST", "/items", Some(json!({"text": ""}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["text"], "");

    let (status, created) = send(&app, "POST", "/items", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["text"], "");
}

#[tokio::test]
async fn update_marks_item_completed() {
    let (_dir, app) = file_app().await;
    send(&app, "POST", "/items", Some(json!({"text": "a"}))).await;
    send(&app, "POST", "/items", Some(json!({"text": "b"}))).await;

    let (status, updated) = send(&app, "PUT", "/items/1", Some(json!({"completed": true}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({"id": "1", "text": "b", "completed": true}));

    let (_, list) = send(&app, "GET", "/items", None).await;
    assert_eq!(list[0]["completed"], false);
    assert_eq!(list[1]["completed"], true);
}

#[tokio::test]
async fn update_unknown_id_is_404_with_error() {
    let (_dir, app) = file_app().await;
    let (status, body) = send(&app, "PUT", "/items/42", Some(json!({"completed": true}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn non_canonical_positional_ids_do_not_alias() {
    let (_dir, app) = file_app().await;
    send(&app, "POST", "/items", Some(json!({"text": "only"}))).await;

    for uri in ["/items/00", "/items/+0"] {
        let (status, _) = send(&app, "PUT", uri, Some(json!({"completed": true}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        let (status, _) = send(&app, "DELETE", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    }

    let (_, list) = send(&app, "GET", "/items", None).await;
    assert_eq!(list, json!([{"id": "0", "text": "only", "completed": false}]));
}

#[tokio::test]
async fn create_without_json_content_type_is_rejected() {
    let (_dir, app) = file_app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/items")
        .body(Body::from(json!({"text": "x"}).to_string()))
        .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let (_, list) = send(&app, "GET", "/items", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn delete_last_item_empties_collection() {
    let (_dir, app) = file_app().await;
    send(&app, "POST", "/items", Some(json!({"text": "only"}))).await;

    let (status, body) = send(&app, "DELETE", "/items/0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Todo successfully deleted"}));

    let (_, list) = send(&app, "GET", "/items", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn delete_unknown_id_is_404() {
    let (_dir, app) = file_app().await;
    let (status, body) = send(&app, "DELETE", "/items/0", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn status_under_file_strategy_reports_disconnected() {
    let (_dir, app) = file_app().await;
    let (status, body) = send(&app, "GET", "/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"connected": false, "strategy": "file"}));
}

#[tokio::test]
async fn disconnected_document_store_fails_instead_of_listing_empty() {
    let app = disconnected_app();

    let (status, body) = send(&app, "GET", "/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"connected": false, "strategy": "document"}));

    let (status, body) = send(&app, "GET", "/items", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());

    let (status, _) = send(&app, "POST", "/items", Some(json!({"text": "x"}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = send(&app, "DELETE", "/items/0", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn restart_reloads_same_items_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.json");

    let first = build_router(AppState::new(Arc::new(FileStore::open(&path).await)));
    for text in ["one", "two", "three"] {
        send(&first, "POST", "/items", Some(json!({"text": text}))).await;
    }
    let (_, before) = send(&first, "GET", "/items", None).await;

    let second = build_router(AppState::new(Arc::new(FileStore::open(&path).await)));
    let (_, after) = send(&second, "GET", "/items", None).await;
    assert_eq!(before, after);
}
