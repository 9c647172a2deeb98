//! Commands Layer
//!
//! HTTP handlers that bridge the browser client to the repository.

mod todo_cmd;
mod status_cmd;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::domain::DomainError;

pub use todo_cmd::*;
pub use status_cmd::*;

/// Domain error on its way out of a handler
#[derive(Debug)]
pub struct CommandError(pub DomainError);

impl From<DomainError> for CommandError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for CommandError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            DomainError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            DomainError::Persistence(msg) => {
                tracing::error!(error = %msg, "persistence failure");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type CommandResult<T> = Result<T, CommandError>;
