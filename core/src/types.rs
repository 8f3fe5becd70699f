//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently, so
//! the client never links against Axum. Integration tests catch any schema
//! drift between the two crates.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A single todo item returned by the API. Ids are opaque strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// Partial update as it travels on the wire. Only the fields present in the
/// JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// A partial update, tagged by which fields it touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoPatch {
    Title(String),
    Completed(bool),
    Both { title: String, completed: bool },
}

impl TodoPatch {
    /// Build a patch from optional fields. `None` when both are absent.
    pub fn from_fields(title: Option<String>, completed: Option<bool>) -> Option<Self> {
        match (title, completed) {
            (Some(title), Some(completed)) => Some(TodoPatch::Both { title, completed }),
            (Some(title), None) => Some(TodoPatch::Title(title)),
            (None, Some(completed)) => Some(TodoPatch::Completed(completed)),
            (None, None) => None,
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        match self {
            TodoPatch::Title(title) | TodoPatch::Both { title, .. } => validate_title(title),
            TodoPatch::Completed(_) => Ok(()),
        }
    }

    pub fn to_wire(&self) -> UpdateTodo {
        match self.clone() {
            TodoPatch::Title(title) => UpdateTodo {
                title: Some(title),
                completed: None,
            },
            TodoPatch::Completed(completed) => UpdateTodo {
                title: None,
                completed: Some(completed),
            },
            TodoPatch::Both { title, completed } => UpdateTodo {
                title: Some(title),
                completed: Some(completed),
            },
        }
    }
}

/// Confirmation and error body: `{"message": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

pub(crate) fn validate_title(title: &str) -> Result<(), ApiError> {
    if title.trim().is_empty() {
        return Err(ApiError::Validation("title must not be empty".to_string()));
    }
    Ok(())
}
