//! Route handlers for `/todos` and `/todos/{id}`.
//!
//! Extractors are taken as `Result` so that malformed paths and bodies are
//! reported through `ApiError` with a JSON message, like every other failure.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{Method, StatusCode, Uri},
    Json,
};
use tracing::debug;

use crate::{
    error::ApiError,
    store::TodoStore,
    types::{Todo, TodoData, UpdateTodo},
};

pub async fn list_todos(State(store): State<TodoStore>) -> Json<Vec<Todo>> {
    let todos = store.get_all().await;
    debug!(count = todos.len(), "listing todos");
    Json(todos)
}

pub async fn create_todo(
    State(store): State<TodoStore>,
    payload: Result<Json<TodoData>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(data) = payload?;
    let todo = store.create(data).await.ok_or(ApiError::IdsExhausted)?;
    let total = store.len().await;
    debug!(id = todo.id, total, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn get_todo(
    State(store): State<TodoStore>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = path?;
    store
        .get_by_id(id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

pub async fn update_todo(
    State(store): State<TodoStore>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = path?;
    let Json(input) = payload?;
    if let Some(body_id) = input.id.filter(|body_id| *body_id != id) {
        return Err(ApiError::IdMismatch { path: id, body: body_id });
    }

    let replacement = Todo {
        id,
        summary: input.summary,
        description: input.description,
    };
    let updated = store
        .update(id, replacement)
        .await
        .ok_or(ApiError::NotFound(id))?;
    debug!(id, "updated todo");
    Ok(Json(updated))
}

pub async fn delete_todo(
    State(store): State<TodoStore>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    store.delete(id).await.ok_or(ApiError::NotFound(id))?;
    let remaining = store.len().await;
    debug!(id, remaining, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for paths that match no route.
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        method,
        path: uri.path().to_string(),
    }
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method,
        path: uri.path().to_string(),
    }
}
