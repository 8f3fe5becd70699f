//! Synchronous client core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The host supplies a
//! `Transport`; `TodoSession` ties the two together with the local mirror.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - The mirror changes only after the server confirms a request.
//! - DTOs are defined independently from the server crate; integration tests
//!   catch schema drift.

pub mod client;
pub mod editor;
pub mod error;
pub mod http;
pub mod mirror;
pub mod session;
pub mod types;

pub use client::{TodoClient, DEFAULT_BASE_URL};
pub use editor::{toggle_patch, EditMode, ItemEditor};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use mirror::TodoMirror;
pub use session::TodoSession;
pub use types::{CreateTodo, Message, Todo, TodoPatch, UpdateTodo};
