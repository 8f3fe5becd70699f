//! REST backend for the todo list.
//!
//! One resource, five operations. Handlers translate each request into a
//! single `TodoStore` call and map the outcome to a status code; they hold no
//! state of their own.

pub mod config;
pub mod error;
pub mod model;
pub mod store;

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tokio::net::TcpListener;

pub use config::ServerConfig;
pub use error::ServiceError;
pub use model::{CreateTodo, Message, Todo, TodoPatch, UpdateTodo};
pub use store::{MemoryStore, SharedStore, SledStore, StoreError, TodoStore};

pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route(
            "/api/todos",
            get(list_todos).post(create_todo).delete(delete_all_todos),
        )
        .route("/api/todos/{id}", put(update_todo).delete(delete_todo))
        .with_state(store)
}

/// Router over a fresh in-memory store.
pub fn in_memory_app() -> Router {
    app(Arc::new(MemoryStore::new()))
}

pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

async fn list_todos(State(store): State<SharedStore>) -> Result<Json<Vec<Todo>>, ServiceError> {
    let todos = store
        .list_all()
        .map_err(ServiceError::store(StatusCode::INTERNAL_SERVER_ERROR))?;
    Ok(Json(todos))
}

async fn create_todo(
    State(store): State<SharedStore>,
    input: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ServiceError> {
    let Json(input) = input.map_err(|rejection| ServiceError::Validation(rejection.body_text()))?;
    model::validate_title(&input.title).map_err(ServiceError::Validation)?;

    let todo = store
        .insert(input.title)
        .map_err(ServiceError::store(StatusCode::BAD_REQUEST))?;
    tracing::debug!(id = %todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    input: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<Todo>, ServiceError> {
    let Json(input) = input.map_err(|rejection| ServiceError::Validation(rejection.body_text()))?;
    let patch = TodoPatch::try_from(input).map_err(ServiceError::Validation)?;

    let todo = store
        .update_by_id(&id, &patch)
        .map_err(ServiceError::store(StatusCode::BAD_REQUEST))?
        .ok_or(ServiceError::NotFound)?;
    tracing::debug!(%id, "updated todo");
    Ok(Json(todo))
}

async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ServiceError> {
    let removed = store
        .delete_by_id(&id)
        .map_err(ServiceError::store(StatusCode::INTERNAL_SERVER_ERROR))?;
    tracing::debug!(%id, removed, "deleted todo");
    Ok(Json(Message::new("Deleted successfully")))
}

async fn delete_all_todos(State(store): State<SharedStore>) -> Result<Json<Message>, ServiceError> {
    let removed = store
        .delete_all()
        .map_err(ServiceError::store(StatusCode::INTERNAL_SERVER_ERROR))?;
    tracing::debug!(removed, "cleared todos");
    Ok(Json(Message::new("All todos cleared")))
}
