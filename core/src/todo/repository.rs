//! Todo repository trait
//!
//! Defines the interface for todo storage operations.

use async_trait::async_trait;

use super::model::{Todo, TodoId};
use crate::Result;

/// Repository interface for todo CRUD operations
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Insert a new record, returning it with the store-assigned id
    async fn create(&self, todo: Todo) -> Result<Todo>;

    /// Get all records, in store order
    async fn list(&self) -> Result<Vec<Todo>>;

    /// Mark the matching record completed; a missing record is a no-op
    async fn complete(&self, id: &TodoId) -> Result<()>;

    /// Remove the matching record; a missing record is a no-op
    async fn delete(&self, id: &TodoId) -> Result<()>;
}
