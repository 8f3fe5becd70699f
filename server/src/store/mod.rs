//! Persistence for the todo collection.
//!
//! Handlers only see `SharedStore`; the backend is picked at startup from
//! configuration. Every operation touches a single record (or clears the
//! whole collection), so each backend only needs per-record atomicity.

mod memory;
mod sled_store;

use std::sync::Arc;

pub use memory::MemoryStore;
pub use sled_store::SledStore;

use crate::model::{Todo, TodoPatch};

/// Store handle shared across request handlers.
pub type SharedStore = Arc<dyn TodoStore>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store lock poisoned")]
    Poisoned,

    #[error("database error: {0}")]
    Database(#[from] sled::Error),

    #[error("corrupt record {key}: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait TodoStore: Send + Sync {
    /// Every stored todo in insertion order.
    fn list_all(&self) -> Result<Vec<Todo>, StoreError>;

    /// Create a todo with a fresh id and `completed = false`.
    fn insert(&self, title: String) -> Result<Todo, StoreError>;

    /// Returns `None` when `id` is absent; nothing is mutated in that case.
    fn update_by_id(&self, id: &str, patch: &TodoPatch) -> Result<Option<Todo>, StoreError>;

    /// Delete-if-present. Returns whether a record was removed.
    fn delete_by_id(&self, id: &str) -> Result<bool, StoreError>;

    /// Returns the number of records removed.
    fn delete_all(&self) -> Result<usize, StoreError>;
}
