//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for todo persistence.
//! Implementations: flat JSON file, MongoDB document store.

use async_trait::async_trait;
use serde::Serialize;
use crate::domain::{DomainResult, TodoId, TodoItem};

/// Which persistence strategy backs a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Document,
    File,
}

/// Uniform CRUD over the todo collection.
///
/// All operations are async to support both backends.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All items in the strategy's natural storage order
    async fn list(&self) -> DomainResult<Vec<TodoItem>>;

    /// Store a new item with `completed = false`
    async fn create(&self, text: String) -> DomainResult<TodoItem>;

    /// Set the completion flag of an existing item
    async fn update(&self, id: &TodoId, completed: bool) -> DomainResult<TodoItem>;

    /// Remove an item
    async fn delete(&self, id: &TodoId) -> DomainResult<()>;

    fn strategy(&self) -> Strategy;

    /// Whether a document store connection is live. The file store has
    /// no connection and always reports false.
    fn is_connected(&self) -> bool;
}
