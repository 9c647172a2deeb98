//! Frontend Models
//!
//! Data structures matching backend responses.

use serde::{Deserialize, Serialize};

/// Todo item (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// Backend connectivity report (matches backend `/status`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub connected: bool,
    pub strategy: String,
}

/// Error payload returned with 4xx/5xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
