//! MongoDB-backed todo storage
//!
//! Thin wrapper over a single collection; every operation maps to one
//! driver call. Matched-count for update/delete is deliberately ignored.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection};

use super::model::{Todo, TodoId};
use super::repository::TodoRepository;
use crate::{Error, Result};

const DB_NAME: &str = "resolution";
const COLLECTION_NAME: &str = "todos";

/// Store scoped to the `todos` collection
#[derive(Clone)]
pub struct MongoTodoStore {
    collection: Collection<Todo>,
}

impl MongoTodoStore {
    /// Connect to the database named in the connection string's deployment
    ///
    /// Issues a ping so an unreachable server fails here, at startup,
    /// rather than on the first request.
    pub async fn connect(uri: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(DB_NAME);
        db.run_command(doc! { "ping": 1 }).await?;

        Ok(Self {
            collection: db.collection(COLLECTION_NAME),
        })
    }
}

#[async_trait]
impl TodoRepository for MongoTodoStore {
    async fn create(&self, mut todo: Todo) -> Result<Todo> {
        let inserted = self.collection.insert_one(&todo).await?;
        let id = inserted
            .inserted_id
            .as_object_id()
            .ok_or_else(|| Error::Storage("insert returned a non-ObjectId key".to_string()))?;
        todo.id = Some(id);
        Ok(todo)
    }

    async fn list(&self) -> Result<Vec<Todo>> {
        let cursor = self.collection.find(doc! {}).await?;
        let todos: Vec<Todo> = cursor.try_collect().await?;
        Ok(todos)
    }

    async fn complete(&self, id: &TodoId) -> Result<()> {
        self.collection
            .update_one(
                doc! { "_id": id.as_object_id() },
                doc! { "$set": { "completed": true } },
            )
            .await?;
        Ok(())
    }

    async fn delete(&self, id: &TodoId) -> Result<()> {
        self.collection
            .delete_one(doc! { "_id": id.as_object_id() })
            .await?;
        Ok(())
    }
}
