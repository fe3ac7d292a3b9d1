//! In-memory todo storage
//!
//! Backs the HTTP layer in tests, where no database is running. Assigns
//! fresh ObjectIds on create so identifiers look the same as production.

use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::model::{Todo, TodoId};
use super::repository::TodoRepository;
use crate::Result;

/// In-memory todo store
#[derive(Default)]
pub struct MemoryTodoStore {
    records: RwLock<HashMap<ObjectId, Todo>>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for MemoryTodoStore {
    async fn create(&self, mut todo: Todo) -> Result<Todo> {
        let id = ObjectId::new();
        todo.id = Some(id);

        let mut records = self.records.write().await;
        records.insert(id, todo.clone());
        Ok(todo)
    }

    async fn list(&self) -> Result<Vec<Todo>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn complete(&self, id: &TodoId) -> Result<()> {
        let mut records = self.records.write().await;
        if let Some(todo) = records.get_mut(&id.as_object_id()) {
            todo.completed = true;
        }
        Ok(())
    }

    async fn delete(&self, id: &TodoId) -> Result<()> {
        let mut records = self.records.write().await;
        records.remove(&id.as_object_id());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_id() {
        let store = MemoryTodoStore::new();

        let created = store.create(Todo::new("buy milk")).await.unwrap();
        assert!(created.id.is_some());
        assert_eq!(created.task, "buy milk");
        assert!(!created.completed);
    }

    #[tokio::test]
    async fn test_created_records_show_up_in_list() {
        let store = MemoryTodoStore::new();

        store.create(Todo::new("task 1")).await.unwrap();
        store.create(Todo::new("task 2")).await.unwrap();

        let todos = store.list().await.unwrap();
        assert_eq!(todos.len(), 2);
        assert!(todos.iter().all(|t| t.id.is_some()));
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let store = MemoryTodoStore::new();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_complete_is_one_way_and_idempotent() {
        let store = MemoryTodoStore::new();

        let created = store.create(Todo::new("finish report")).await.unwrap();
        let id = TodoId::from(created.id.unwrap());

        store.complete(&id).await.unwrap();
        let todos = store.list().await.unwrap();
        assert!(todos[0].completed);

        // Completing again stays completed.
        store.complete(&id).await.unwrap();
        let todos = store.list().await.unwrap();
        assert!(todos[0].completed);
    }

    #[tokio::test]
    async fn test_complete_missing_record_is_noop() {
        let store = MemoryTodoStore::new();
        store.create(Todo::new("keep me")).await.unwrap();

        let absent = TodoId::from(ObjectId::new());
        store.complete(&absent).await.unwrap();

        let todos = store.list().await.unwrap();
        assert_eq!(todos.len(), 1);
        assert!(!todos[0].completed);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = MemoryTodoStore::new();

        let created = store.create(Todo::new("throw away")).await.unwrap();
        let id = TodoId::from(created.id.unwrap());

        store.delete(&id).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());

        // Deleting again is still a success.
        store.delete(&id).await.unwrap();
    }
}
