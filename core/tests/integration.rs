//! Full lifecycle against the live server.
//!
//! # Design
//! Starts the server on a random port, then drives a `TodoSession` over real
//! HTTP using ureq. Validates that request building, response parsing and
//! mirror updates agree with the actual server.

use std::sync::Arc;

use todo_core::{
    ApiError, HttpMethod, HttpRequest, HttpResponse, TodoClient, TodoPatch, TodoSession,
};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => agent
            .put(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    }
    .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener, Arc::new(todo_server::MemoryStore::new())).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn crud_lifecycle() {
    let base_url = start_server();
    let mut session = TodoSession::new(TodoClient::new(&base_url), execute);

    // Step 1: fetch — should be empty.
    session.refresh().unwrap();
    assert!(session.mirror().is_empty(), "expected empty list");
    assert_eq!(session.mirror().completion_percentage(), 0.0);

    // Step 2: create.
    let created = session.add("Buy milk").unwrap();
    assert_eq!(created.title, "Buy milk");
    assert!(!created.completed);
    let id = created.id.clone();

    // Step 3: a fresh fetch agrees with the mirror.
    session.refresh().unwrap();
    assert_eq!(session.mirror().todos(), &[created]);

    // Step 4: toggle completed.
    let updated = session.toggle(&id).unwrap();
    assert!(updated.completed);
    assert_eq!(session.mirror().completion_percentage(), 100.0);

    // Step 5: rename.
    let renamed = session.rename(&id, "Buy oat milk").unwrap();
    assert_eq!(renamed.title, "Buy oat milk");
    assert!(renamed.completed);

    // Step 6: update a missing id — NotFound, nothing changes.
    let err = session
        .update("missing", &TodoPatch::Completed(false))
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
    assert_eq!(session.mirror().len(), 1);

    // Step 7: delete twice — idempotent.
    session.delete(&id).unwrap();
    session.delete(&id).unwrap();
    assert!(session.mirror().is_empty());

    // Step 8: ids with reserved characters stay one path segment.
    let err = session
        .update("no/such id?", &TodoPatch::Completed(true))
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
    session.delete("no/such id?").unwrap();

    // Step 9: delete all.
    session.add("one").unwrap();
    session.add("two").unwrap();
    session.refresh().unwrap();
    assert_eq!(session.mirror().len(), 2);
    session.delete_all().unwrap();
    session.refresh().unwrap();
    assert!(session.mirror().is_empty(), "expected empty list after clear");
}

#[test]
fn server_rejects_blank_title() {
    let base_url = start_server();

    // Bypass the client-side guard to check the server's own validation.
    let req = HttpRequest {
        method: HttpMethod::Post,
        path: format!("{base_url}/api/todos"),
        headers: Vec::new(),
        body: Some(r#"{"title":""}"#.to_string()),
    };
    let resp = execute(req).unwrap();
    assert_eq!(resp.status, 400);

    let err = TodoClient::new(&base_url).parse_create_todo(resp).unwrap_err();
    assert!(matches!(err, ApiError::HttpError { status: 400, ref message } if message == "title must not be empty"));
}

#[test]
fn unreachable_server_is_a_transport_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let mut session = TodoSession::new(TodoClient::new(&format!("http://{addr}")), execute);

    assert!(matches!(session.refresh(), Err(ApiError::Transport(_))));
    assert!(session.mirror().is_empty());
}
