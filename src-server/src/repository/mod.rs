//! Repository Layer
//!
//! Data access abstractions and the two persistence strategies.

mod traits;
mod file_store;
mod document_store;


use std::sync::Arc;

use crate::config::StorageConfig;

pub use traits::{Strategy, TodoRepository};
pub use file_store::{FileStore, StoredTodo};
pub use document_store::DocumentStore;

/// Open the repository selected by configuration.
///
/// The file store is loaded before this returns. The document store is
/// returned immediately and connects in the background.
pub async fn open_repository(config: &StorageConfig) -> Arc<dyn TodoRepository> {
    match config {
        StorageConfig::File { path } => {
            tracing::info!("document store not configured, using local file");
            let store: Arc<dyn TodoRepository> = Arc::new(FileStore::open(path.clone()).await);
            store
        }
        StorageConfig::Document(doc) => {
            let store = Arc::new(DocumentStore::new(doc.clone()));
            let connecting = store.clone();
            tokio::spawn(async move {
                match connecting.connect().await {
                    Ok(()) => {
                        let _ = rolling_logger::info("Document store connected");
                    }
                    Err(e) => {
                        let _ = rolling_logger::error(&format!("Document store connection failed: {}", e));
                    }
                }
            });
            store as Arc<dyn TodoRepository>
        }
    }
}
