//! Document Store
//!
//! MongoDB-backed repository. The connection is attempted once, in the
//! background; until it succeeds (and forever after it fails) every
//! operation reports a persistence error. There is no retry and no fallback
//! to the file store.

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::{ClientOptions, ReturnDocument};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

use crate::config::DocumentConfig;
use crate::domain::{DomainError, DomainResult, TodoId, TodoItem};
use super::traits::{Strategy, TodoRepository};

const COLLECTION_NAME: &str = "todos";
const APP_NAME: &str = "todolist";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TodoDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    text: String,
    completed: bool,
}

impl TodoDocument {
    fn into_item(self) -> DomainResult<TodoItem> {
        let id = self
            .id
            .ok_or_else(|| DomainError::Persistence("document without _id".to_string()))?;
        Ok(TodoItem {
            id: TodoId::new(id.to_hex()),
            text: self.text,
            completed: self.completed,
        })
    }
}

enum ConnectionState {
    Pending,
    Connected(Collection<TodoDocument>),
    Failed(String),
}

pub struct DocumentStore {
    config: DocumentConfig,
    state: RwLock<ConnectionState>,
}

impl DocumentStore {
    /// Create a store that is not connected yet. Call [`DocumentStore::connect`].
    pub fn new(config: DocumentConfig) -> Self {
        Self {
            config,
            state: RwLock::new(ConnectionState::Pending),
        }
    }

    /// Attempt the connection once and record the outcome.
    pub async fn connect(&self) -> DomainResult<()> {
        let outcome = open_collection(&self.config).await;
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        match outcome {
            Ok(collection) => {
                tracing::info!(host = %self.config.host, port = self.config.port, database = %self.config.database, "connected to document store");
                *state = ConnectionState::Connected(collection);
                Ok(())
            }
            Err(e) => {
                tracing::error!(host = %self.config.host, port = self.config.port, error = %e, "error connecting to document store");
                *state = ConnectionState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    fn collection(&self) -> DomainResult<Collection<TodoDocument>> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        match &*state {
            ConnectionState::Connected(collection) => Ok(collection.clone()),
            ConnectionState::Pending => Err(DomainError::Persistence(
                "document store is not connected".to_string(),
            )),
            ConnectionState::Failed(reason) => Err(DomainError::Persistence(format!(
                "document store is not connected: {}",
                reason
            ))),
        }
    }
}

async fn open_collection(config: &DocumentConfig) -> DomainResult<Collection<TodoDocument>> {
    let mut options = ClientOptions::parse(config.uri())
        .await
        .map_err(DomainError::persistence)?;
    options.app_name = Some(APP_NAME.to_string());
    if let Some(timeout) = config.timeout {
        options.server_selection_timeout = Some(timeout);
        options.connect_timeout = Some(timeout);
    }
    let client = Client::with_options(options).map_err(DomainError::persistence)?;
    let database = client.database(&config.database);
    database
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(DomainError::persistence)?;
    Ok(database.collection::<TodoDocument>(COLLECTION_NAME))
}

/// A string that is not an ObjectId cannot match any document.
fn parse_object_id(id: &TodoId) -> DomainResult<ObjectId> {
    ObjectId::parse_str(id.as_str()).map_err(|_| DomainError::not_found(id))
}

#[async_trait]
impl TodoRepository for DocumentStore {
    async fn list(&self) -> DomainResult<Vec<TodoItem>> {
        let collection = self.collection()?;
        let mut cursor = collection
            .find(doc! {})
            .await
            .map_err(|e| DomainError::Persistence(format!("Error retrieving todos: {}", e)))?;

        let mut items = Vec::new();
        while cursor.advance().await.map_err(DomainError::persistence)? {
            let document = cursor.deserialize_current().map_err(DomainError::persistence)?;
            items.push(document.into_item()?);
        }
        Ok(items)
    }

    async fn create(&self, text: String) -> DomainResult<TodoItem> {
        let collection = self.collection()?;
        let mut document = TodoDocument {
            id: None,
            text,
            completed: false,
        };
        let result = collection
            .insert_one(&document)
            .await
            .map_err(|e| DomainError::Persistence(format!("Error saving todo: {}", e)))?;
        document.id = result.inserted_id.as_object_id();
        document.into_item()
    }

    async fn update(&self, id: &TodoId, completed: bool) -> DomainResult<TodoItem> {
        let collection = self.collection()?;
        let oid = parse_object_id(id)?;
        collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": { "completed": completed } })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| DomainError::Persistence(format!("Error updating todo: {}", e)))?
            .ok_or_else(|| DomainError::not_found(id))?
            .into_item()
    }

    async fn delete(&self, id: &TodoId) -> DomainResult<()> {
        let collection = self.collection()?;
        let oid = parse_object_id(id)?;
        let result = collection
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(|e| DomainError::Persistence(format!("Error deleting todo: {}", e)))?;
        if result.deleted_count == 0 {
            return Err(DomainError::not_found(id));
        }
        Ok(())
    }

    fn strategy(&self) -> Strategy {
        Strategy::Document
    }

    fn is_connected(&self) -> bool {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        matches!(*state, ConnectionState::Connected(_))
    }
}
