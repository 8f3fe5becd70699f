use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use super::{StoreError, TodoStore};
use crate::model::{Todo, TodoPatch};

/// Volatile store used when no database path is configured.
#[derive(Debug, Default)]
pub struct MemoryStore {
    todos: RwLock<Vec<Todo>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Todo>>, StoreError> {
        self.todos.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Todo>>, StoreError> {
        self.todos.write().map_err(|_| StoreError::Poisoned)
    }
}

impl TodoStore for MemoryStore {
    fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.read()?.clone())
    }

    fn insert(&self, title: String) -> Result<Todo, StoreError> {
        let todo = Todo {
            id: Uuid::new_v4().to_string(),
            title,
            completed: false,
        };
        self.write()?.push(todo.clone());
        Ok(todo)
    }

    fn update_by_id(&self, id: &str, patch: &TodoPatch) -> Result<Option<Todo>, StoreError> {
        let mut todos = self.write()?;
        Ok(todos.iter_mut().find(|t| t.id == id).map(|todo| {
            todo.apply(patch);
            todo.clone()
        }))
    }

    fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let mut todos = self.write()?;
        let before = todos.len();
        todos.retain(|t| t.id != id);
        Ok(todos.len() != before)
    }

    fn delete_all(&self) -> Result<usize, StoreError> {
        let mut todos = self.write()?;
        let removed = todos.len();
        todos.clear();
        Ok(removed)
    }
}
