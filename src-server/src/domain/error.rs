//! Domain Layer - Errors
//!
//! Failures every repository operation can report.

use serde::{Deserialize, Serialize};

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    /// No item matches the requested id under the active strategy
    NotFound(String),
    /// The underlying store rejected the operation or is unreachable
    Persistence(String),
}

impl DomainError {
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        DomainError::NotFound(format!("Todo {} not found", id))
    }

    pub fn persistence(err: impl std::fmt::Display) -> Self {
        DomainError::Persistence(err.to_string())
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::Persistence(msg) => write!(f, "Persistence error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
