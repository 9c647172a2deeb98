//! Todolist Backend
//!
//! Layered architecture:
//! - domain: Core entity and errors
//! - repository: Persistence abstraction with file and document strategies
//! - commands: HTTP handlers
//! - config: Startup configuration

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;

pub mod config;
pub mod domain;
pub mod repository;
pub mod commands;

use config::ServerConfig;
use repository::{open_repository, TodoRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn TodoRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/items", get(commands::list_todos).post(commands::create_todo))
        .route(
            "/items/:id",
            axum::routing::put(commands::update_todo).delete(commands::delete_todo),
        )
        .route("/status", get(commands::get_status))
        .with_state(state)
}

/// Start the server with configuration from the environment
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();

    rolling_logger::init_logger(config.log_dir.clone(), "todolist")?;
    tracing::info!(port = config.port, "server starting");

    let repo = open_repository(&config.storage).await;
    tracing::info!(strategy = ?repo.strategy(), "storage selected");
    let app = build_router(AppState::new(repo));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
