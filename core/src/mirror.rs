//! The client's local, non-authoritative copy of the todo collection.
//!
//! Every mutator takes a value the server has already confirmed; nothing here
//! invents state of its own.

use crate::types::Todo;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoMirror {
    todos: Vec<Todo>,
}

impl TodoMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a full fetch.
    pub fn replace(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    pub fn push(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Swap in the server's copy of a record. Unknown ids are ignored.
    pub fn patch(&mut self, todo: Todo) {
        if let Some(slot) = self.todos.iter_mut().find(|t| t.id == todo.id) {
            *slot = todo;
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.todos.retain(|t| t.id != id);
    }

    pub fn clear(&mut self) {
        self.todos.clear();
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// Share of completed todos in `0.0..=100.0`; `0.0` when empty.
    pub fn completion_percentage(&self) -> f64 {
        if self.todos.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.todos.len() as f64 * 100.0
    }
}
