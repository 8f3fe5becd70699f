//! Wire and storage types for the todo resource.
//!
//! The persisted record and the JSON body share one shape, `{id, title,
//! completed}`, so `Todo` serves both roles.

use serde::{Deserialize, Serialize};

/// A single persisted todo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Apply a validated patch in place.
    pub fn apply(&mut self, patch: &TodoPatch) {
        if let Some(title) = patch.title() {
            self.title = title.to_string();
        }
        if let Some(completed) = patch.completed() {
            self.completed = completed;
        }
    }
}

/// Body of `POST /api/todos`. Extra fields (including `completed`) are ignored.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// Body of `PUT /api/todos/{id}` as it arrives on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// A validated partial update. At least one field is always present and a
/// title is never blank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoPatch {
    Title(String),
    Completed(bool),
    Both { title: String, completed: bool },
}

impl TodoPatch {
    pub fn title(&self) -> Option<&str> {
        match self {
            TodoPatch::Title(title) | TodoPatch::Both { title, .. } => Some(title),
            TodoPatch::Completed(_) => None,
        }
    }

    pub fn completed(&self) -> Option<bool> {
        match self {
            TodoPatch::Completed(completed) | TodoPatch::Both { completed, .. } => Some(*completed),
            TodoPatch::Title(_) => None,
        }
    }
}

impl TryFrom<UpdateTodo> for TodoPatch {
    type Error = String;

    fn try_from(input: UpdateTodo) -> Result<Self, Self::Error> {
        if let Some(title) = &input.title {
            validate_title(title)?;
        }
        match (input.title, input.completed) {
            (Some(title), Some(completed)) => Ok(TodoPatch::Both { title, completed }),
            (Some(title), None) => Ok(TodoPatch::Title(title)),
            (None, Some(completed)) => Ok(TodoPatch::Completed(completed)),
            (None, None) => Err("update must set title or completed".to_string()),
        }
    }
}

/// Reject titles that are empty or whitespace-only.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("title must not be empty".to_string());
    }
    Ok(())
}

/// Confirmation or error body: `{"message": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
