//! Todo record definitions

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A single todo record
///
/// `id` is absent until the store assigns one on insert; the field is
/// skipped during serialization so the database generates the key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub task: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// Create a new, not yet persisted record
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            id: None,
            task: task.into(),
            completed: false,
        }
    }
}

/// Validated todo identifier
///
/// Wraps the store-assigned key. Construction from a request string is
/// the single place malformed identifiers are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodoId(ObjectId);

impl TodoId {
    /// Parse an identifier from its 24-character hex form
    pub fn parse(s: &str) -> Result<Self> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| Error::InvalidId(s.to_string()))
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for TodoId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_create_todo() {
        let todo = Todo::new("Test task");
        assert!(todo.id.is_none());
        assert_eq!(todo.task, "Test task");
        assert!(!todo.completed);
    }

    #[test]
    fn test_unpersisted_todo_omits_id() {
        let doc = bson::to_document(&Todo::new("write tests")).unwrap();
        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get_str("task").unwrap(), "write tests");
        assert_eq!(doc.get_bool("completed").unwrap(), false);
    }

    #[test]
    fn test_persisted_todo_keeps_object_id() {
        let mut todo = Todo::new("write tests");
        let oid = ObjectId::new();
        todo.id = Some(oid);

        let doc = bson::to_document(&todo).unwrap();
        assert_eq!(doc.get_object_id("_id").unwrap(), oid);
    }

    #[test]
    fn test_completed_defaults_to_false_on_decode() {
        let doc = bson::doc! { "task": "older record" };
        let todo: Todo = bson::from_document(doc).unwrap();
        assert!(!todo.completed);
    }

    #[test]
    fn test_parse_valid_id() {
        let oid = ObjectId::new();
        let id = TodoId::parse(&oid.to_hex()).unwrap();
        assert_eq!(id.as_object_id(), oid);
    }

    #[test]
    fn test_parse_invalid_id() {
        let result = TodoId::parse("not-a-hex-id");
        assert!(matches!(result, Err(Error::InvalidId(_))));
    }

    #[test]
    fn test_id_display_round_trips() {
        let id = TodoId::from(ObjectId::new());
        let reparsed = TodoId::parse(&id.to_string()).unwrap();
        assert_eq!(id, reparsed);
    }
}
