//! Application state for a todo front-end.
//!
//! # Design
//! `TodoSession` owns the client, the host's transport and the mirror. Every
//! mutation is request, then confirmation, then a patch of the mirror; a
//! failed exchange is logged and leaves the mirror exactly as it was. There
//! are no retries.

use crate::client::TodoClient;
use crate::editor::{toggle_patch, ItemEditor};
use crate::error::ApiError;
use crate::http::Transport;
use crate::mirror::TodoMirror;
use crate::types::{Todo, TodoPatch};

pub struct TodoSession<T> {
    client: TodoClient,
    transport: T,
    mirror: TodoMirror,
}

impl<T: Transport> TodoSession<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self {
            client,
            transport,
            mirror: TodoMirror::new(),
        }
    }

    pub fn mirror(&self) -> &TodoMirror {
        &self.mirror
    }

    pub fn client(&self) -> &TodoClient {
        &self.client
    }

    /// Replace the mirror with the server's full collection.
    pub fn refresh(&mut self) -> Result<(), ApiError> {
        let result = self
            .transport
            .execute(self.client.build_list_todos())
            .and_then(|resp| self.client.parse_list_todos(resp));
        let todos = logged("fetch", result)?;
        self.mirror.replace(todos);
        Ok(())
    }

    pub fn add(&mut self, title: &str) -> Result<Todo, ApiError> {
        let result = self
            .client
            .build_create_todo(title)
            .and_then(|req| self.transport.execute(req))
            .and_then(|resp| self.client.parse_create_todo(resp));
        let todo = logged("add", result)?;
        self.mirror.push(todo.clone());
        Ok(todo)
    }

    pub fn update(&mut self, id: &str, patch: &TodoPatch) -> Result<Todo, ApiError> {
        let result = self
            .client
            .build_update_todo(id, patch)
            .and_then(|req| self.transport.execute(req))
            .and_then(|resp| self.client.parse_update_todo(resp));
        let todo = logged("update", result)?;
        self.mirror.patch(todo.clone());
        Ok(todo)
    }

    /// Flip `completed` for a todo currently in the mirror.
    pub fn toggle(&mut self, id: &str) -> Result<Todo, ApiError> {
        let patch = match self.mirror.get(id) {
            Some(todo) => toggle_patch(todo),
            None => return logged("toggle", Err(ApiError::NotFound)),
        };
        self.update(id, &patch)
    }

    /// Rename through the edit flow; a blank title never leaves the client.
    pub fn rename(&mut self, id: &str, title: &str) -> Result<Todo, ApiError> {
        let mut editor = match self.mirror.get(id) {
            Some(todo) => ItemEditor::new(todo),
            None => return logged("rename", Err(ApiError::NotFound)),
        };
        editor.begin_edit();
        editor.set_draft(title);
        match editor.save() {
            Some(patch) => self.update(editor.id(), &patch),
            None => logged(
                "rename",
                Err(ApiError::Validation("title must not be empty".to_string())),
            ),
        }
    }

    pub fn delete(&mut self, id: &str) -> Result<(), ApiError> {
        let result = self
            .transport
            .execute(self.client.build_delete_todo(id))
            .and_then(|resp| self.client.parse_delete_todo(resp));
        let message = logged("delete", result)?;
        tracing::debug!(%id, %message, "deleted todo");
        self.mirror.remove(id);
        Ok(())
    }

    pub fn delete_all(&mut self) -> Result<(), ApiError> {
        let result = self
            .transport
            .execute(self.client.build_delete_all_todos())
            .and_then(|resp| self.client.parse_delete_all_todos(resp));
        let message = logged("delete all", result)?;
        tracing::debug!(%message, "cleared todos");
        self.mirror.clear();
        Ok(())
    }
}

fn logged<V>(action: &str, result: Result<V, ApiError>) -> Result<V, ApiError> {
    if let Err(err) = &result {
        tracing::warn!(action, error = %err, "todo request failed");
    }
    result
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};

    /// Replays canned responses and records every request it sees.
    #[derive(Default)]
    struct Scripted {
        responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl Scripted {
        fn reply(self, status: u16, body: &str) -> Self {
            self.responses.borrow_mut().push_back(Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            }));
            self
        }

        fn fail(self) -> Self {
            self.responses
                .borrow_mut()
                .push_back(Err(ApiError::Transport("connection refused".into())));
            self
        }
    }

    impl Transport for &Scripted {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.seen.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("unexpected request")
        }
    }

    const TWO_TODOS: &str = r#"[
        {"id":"A","title":"Buy milk","completed":false},
        {"id":"B","title":"Walk dog","completed":true}
    ]"#;

    fn session(transport: &Scripted) -> TodoSession<&Scripted> {
        TodoSession::new(TodoClient::new("http://test"), transport)
    }

    #[test]
    fn refresh_replaces_mirror() {
        let transport = Scripted::default().reply(200, TWO_TODOS);
        let mut session = session(&transport);
        session.refresh().unwrap();

        assert_eq!(session.mirror().len(), 2);
        assert_eq!(session.mirror().completion_percentage(), 50.0);
    }

    #[test]
    fn add_appends_confirmed_todo() {
        let transport = Scripted::default()
            .reply(200, "[]")
            .reply(201, r#"{"id":"A","title":"Buy milk","completed":false}"#);
        let mut session = session(&transport);
        session.refresh().unwrap();

        let todo = session.add("Buy milk").unwrap();
        assert_eq!(session.mirror().todos(), &[todo]);
    }

    #[test]
    fn blank_add_sends_nothing() {
        let transport = Scripted::default();
        let mut session = session(&transport);

        assert!(matches!(session.add("  "), Err(ApiError::Validation(_))));
        assert!(transport.seen.borrow().is_empty());
    }

    #[test]
    fn failed_requests_leave_mirror_unchanged() {
        let transport = Scripted::default()
            .reply(200, TWO_TODOS)
            .fail()
            .reply(500, r#"{"message":"database error"}"#)
            .reply(400, r#"{"message":"database error"}"#)
            .fail();
        let mut session = session(&transport);
        session.refresh().unwrap();
        let before = session.mirror().clone();

        assert!(matches!(session.refresh(), Err(ApiError::Transport(_))));
        assert!(matches!(
            session.delete("A"),
            Err(ApiError::HttpError { status: 500, .. })
        ));
        assert!(session.toggle("A").is_err());
        assert!(session.delete_all().is_err());

        assert_eq!(session.mirror(), &before);
    }

    #[test]
    fn toggle_sends_flipped_completed() {
        let transport = Scripted::default()
            .reply(200, TWO_TODOS)
            .reply(200, r#"{"id":"A","title":"Buy milk","completed":true}"#);
        let mut session = session(&transport);
        session.refresh().unwrap();

        let todo = session.toggle("A").unwrap();
        assert!(todo.completed);
        assert!(session.mirror().get("A").unwrap().completed);

        let seen = transport.seen.borrow();
        let last = seen.last().unwrap();
        assert_eq!(last.method, HttpMethod::Put);
        assert_eq!(last.path, "http://test/api/todos/A");
        assert_eq!(last.body.as_deref(), Some(r#"{"completed":true}"#));
    }

    #[test]
    fn toggle_unknown_id_sends_nothing() {
        let transport = Scripted::default().reply(200, TWO_TODOS);
        let mut session = session(&transport);
        session.refresh().unwrap();

        assert!(matches!(session.toggle("Z"), Err(ApiError::NotFound)));
        assert_eq!(transport.seen.borrow().len(), 1);
    }

    #[test]
    fn rename_goes_through_editor() {
        let transport = Scripted::default()
            .reply(200, TWO_TODOS)
            .reply(200, r#"{"id":"B","title":"Walk cat","completed":true}"#);
        let mut session = session(&transport);
        session.refresh().unwrap();

        assert!(matches!(session.rename("B", ""), Err(ApiError::Validation(_))));
        assert_eq!(transport.seen.borrow().len(), 1);

        session.rename("B", "Walk cat").unwrap();
        assert_eq!(session.mirror().get("B").unwrap().title, "Walk cat");
    }

    #[test]
    fn update_not_found_keeps_mirror() {
        let transport = Scripted::default()
            .reply(200, TWO_TODOS)
            .reply(404, r#"{"message":"Todo not found"}"#);
        let mut session = session(&transport);
        session.refresh().unwrap();

        let err = session
            .update("A", &TodoPatch::Title("x".to_string()))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
        assert_eq!(session.mirror().get("A").unwrap().title, "Buy milk");
    }

    #[test]
    fn delete_and_delete_all_patch_mirror() {
        let transport = Scripted::default()
            .reply(200, TWO_TODOS)
            .reply(200, r#"{"message":"Deleted successfully"}"#)
            .reply(200, r#"{"message":"All todos cleared"}"#);
        let mut session = session(&transport);
        session.refresh().unwrap();

        session.delete("A").unwrap();
        assert_eq!(session.mirror().len(), 1);
        assert!(session.mirror().get("A").is_none());

        session.delete_all().unwrap();
        assert!(session.mirror().is_empty());
        assert_eq!(session.mirror().completion_percentage(), 0.0);
    }
}
