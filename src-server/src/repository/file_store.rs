//! File Store
//!
//! Keeps the whole collection in memory and rewrites the backing JSON file
//! after every mutation. Ids are positions in the collection.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, TodoId, TodoItem};
use super::traits::{Strategy, TodoRepository};

/// On-disk record. Position in the array is the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTodo {
    pub text: String,
    pub completed: bool,
}

impl StoredTodo {
    fn to_item(&self, index: usize) -> TodoItem {
        TodoItem {
            id: TodoId::from_index(index),
            text: self.text.clone(),
            completed: self.completed,
        }
    }
}

pub struct FileStore {
    path: PathBuf,
    todos: Mutex<Vec<StoredTodo>>,
}

impl FileStore {
    /// Open the store, loading whatever the file holds.
    ///
    /// A missing or unparsable file starts an empty collection.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let todos = load_todos(&path).await;
        tracing::info!(path = %path.display(), count = todos.len(), "file store loaded");
        Self {
            path,
            todos: Mutex::new(todos),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to a copy of the collection, persist it, then commit.
    /// On a failed write the in-memory collection stays as it was.
    async fn mutate<T>(
        &self,
        change: impl FnOnce(&mut Vec<StoredTodo>) -> DomainResult<T>,
    ) -> DomainResult<T> {
        let mut todos = self.todos.lock().await;
        let mut next = todos.clone();
        let out = change(&mut next)?;
        save_todos(&self.path, &next).await?;
        *todos = next;
        Ok(out)
    }
}

async fn load_todos(path: &Path) -> Vec<StoredTodo> {
    let data = match tokio::fs::read_to_string(path).await {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read todos file, starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_str(&data) {
        Ok(todos) => todos,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not parse todos file, starting empty");
            Vec::new()
        }
    }
}

/// Sibling of `path` the next collection is staged in before it replaces the file
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write the collection to a staging file and rename it over `path`, so a
/// crash mid-write never leaves a truncated todos file behind.
async fn save_todos(path: &Path, todos: &[StoredTodo]) -> DomainResult<()> {
    let json = serde_json::to_string_pretty(todos).map_err(DomainError::persistence)?;
    let staging = staging_path(path);
    let written = match tokio::fs::write(&staging, json).await {
        Ok(()) => tokio::fs::rename(&staging, path).await,
        Err(e) => Err(e),
    };
    written.map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "error saving todos file");
        DomainError::Persistence(format!("Error saving todos to {}: {}", path.display(), e))
    })
}

#[async_trait]
impl TodoRepository for FileStore {
    async fn list(&self) -> DomainResult<Vec<TodoItem>> {
        let todos = self.todos.lock().await;
        Ok(todos.iter().enumerate().map(|(i, t)| t.to_item(i)).collect())
    }

    async fn create(&self, text: String) -> DomainResult<TodoItem> {
        self.mutate(|todos| {
            todos.push(StoredTodo { text, completed: false });
            let index = todos.len() - 1;
            Ok(todos[index].to_item(index))
        })
        .await
    }

    async fn update(&self, id: &TodoId, completed: bool) -> DomainResult<TodoItem> {
        self.mutate(|todos| {
            let index = id
                .as_index()
                .filter(|&i| i < todos.len())
                .ok_or_else(|| DomainError::not_found(id))?;
            todos[index].completed = completed;
            Ok(todos[index].to_item(index))
        })
        .await
    }

    async fn delete(&self, id: &TodoId) -> DomainResult<()> {
        self.mutate(|todos| {
            let index = id
                .as_index()
                .filter(|&i| i < todos.len())
                .ok_or_else(|| DomainError::not_found(id))?;
            todos.remove(index);
            Ok(())
        })
        .await
    }

    fn strategy(&self) -> Strategy {
        Strategy::File
    }

    fn is_connected(&self) -> bool {
        false
    }
}
