//! Viewing/editing state for a single todo row.

use crate::types::{Todo, TodoPatch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMode {
    Viewing,
    Editing { draft: String },
}

/// Tracks whether a row is being edited and what the user has typed.
///
/// `save` only hands back a patch; the caller sends it and applies the
/// confirmed result to the mirror.
#[derive(Debug, Clone)]
pub struct ItemEditor {
    id: String,
    title: String,
    mode: EditMode,
}

impl ItemEditor {
    pub fn new(todo: &Todo) -> Self {
        Self {
            id: todo.id.clone(),
            title: todo.title.clone(),
            mode: EditMode::Viewing,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing { .. })
    }

    /// Enter editing with the current title as the draft. No-op while editing.
    pub fn begin_edit(&mut self) {
        if !self.is_editing() {
            self.mode = EditMode::Editing {
                draft: self.title.clone(),
            };
        }
    }

    /// Replace the draft. Ignored unless editing.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let EditMode::Editing { draft } = &mut self.mode {
            *draft = text.into();
        }
    }

    /// Finish editing. A blank draft keeps the editor open and yields nothing.
    pub fn save(&mut self) -> Option<TodoPatch> {
        let EditMode::Editing { draft } = &self.mode else {
            return None;
        };
        if draft.trim().is_empty() {
            return None;
        }
        let patch = TodoPatch::Title(draft.clone());
        self.mode = EditMode::Viewing;
        Some(patch)
    }

    /// Drop the draft without producing a request.
    pub fn cancel(&mut self) {
        self.mode = EditMode::Viewing;
    }

    /// Refresh the displayed title after the server confirmed a change.
    pub fn sync(&mut self, todo: &Todo) {
        if todo.id == self.id {
            self.title = todo.title.clone();
        }
    }
}

/// The one-step completion flip.
pub fn toggle_patch(todo: &Todo) -> TodoPatch {
    TodoPatch::Completed(!todo.completed)
}
