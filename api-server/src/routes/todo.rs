//! Todo API endpoints
//!
//! RESTful API for todo CRUD operations. Each handler validates its
//! input, makes one store call, and serializes a typed response.

use axum::extract::{Path, State};
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use resolution_core::todo::{Todo, TodoId};

use crate::error::ApiError;
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub task: String,
}

/// A todo record on the wire, with the identifier in hex form
#[derive(Debug, Serialize)]
pub struct TodoResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub task: String,
    pub completed: bool,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id.map(|oid| oid.to_hex()),
            task: todo.task,
            completed: todo.completed,
        }
    }
}

/// Generic confirmation payload, shared with the client-error responses
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/todos - List all todos
async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    let todos = state.store().list().await?;
    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// POST /api/todos - Create a new todo
async fn create_todo(
    State(state): State<AppState>,
    Json(req): Json<CreateTodoRequest>,
) -> Result<Json<TodoResponse>, ApiError> {
    if req.task.trim().is_empty() {
        return Err(ApiError::EmptyTask);
    }

    let created = state.store().create(Todo::new(req.task)).await?;
    Ok(Json(TodoResponse::from(created)))
}

/// PATCH /api/todos/:id - Mark a todo completed
async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = TodoId::parse(&id).map_err(|_| ApiError::InvalidId)?;
    state.store().complete(&id).await?;

    Ok(Json(MessageResponse {
        message: "update success".to_string(),
    }))
}

/// DELETE /api/todos/:id - Delete a todo
async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = TodoId::parse(&id).map_err(|_| ApiError::InvalidId)?;
    state.store().delete(&id).await?;

    Ok(Json(MessageResponse {
        message: "delete success".to_string(),
    }))
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", patch(update_todo).delete(delete_todo))
}
