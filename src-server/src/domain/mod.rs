//! Domain Layer
//!
//! Contains the todo item and its errors.
//! This layer has NO external dependencies (except serde for serialization).

mod error;
mod todo;

pub use error::{DomainError, DomainResult};
pub use todo::{TodoId, TodoItem};
