//! Todo Item
//!
//! A single todo item. `text` is fixed at creation; only `completed` changes.

use serde::{Deserialize, Serialize};

/// Opaque item identifier.
///
/// Document strategy: the store-assigned ObjectId in hex.
/// File strategy: the item's current position in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn from_index(index: usize) -> Self {
        Self(index.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret the id as a position. Only the canonical decimal form
    /// (as produced by [`TodoId::from_index`]) addresses an item, so `"00"`
    /// and `"+0"` do not alias `"0"`.
    pub fn as_index(&self) -> Option<usize> {
        self.0
            .parse::<usize>()
            .ok()
            .filter(|index| index.to_string() == self.0)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A todo item as exposed by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Strategy-scoped identifier
    pub id: TodoId,
    /// Display text
    pub text: String,
    /// Completion status
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_as_index() {
        assert_eq!(TodoId::new("3").as_index(), Some(3));
        assert_eq!(TodoId::new("-1").as_index(), None);
        assert_eq!(TodoId::new("65a1f0c2e4b0a1b2c3d4e5f6").as_index(), None);
    }

    #[test]
    fn test_id_as_index_rejects_non_canonical_forms() {
        assert_eq!(TodoId::new("0").as_index(), Some(0));
        assert_eq!(TodoId::new("00").as_index(), None);
        assert_eq!(TodoId::new("+0").as_index(), None);
        assert_eq!(TodoId::new("01").as_index(), None);
        assert_eq!(TodoId::from_index(12).as_index(), Some(12));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let todo = TodoItem {
            id: TodoId::new("abc"),
            text: "x".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json, serde_json::json!({"id": "abc", "text": "x", "completed": false}));
    }
}
