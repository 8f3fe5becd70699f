//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers distinguish "the todo
//! does not exist" from "the server returned an unexpected status." All other
//! non-2xx responses land in `HttpError` with the status code and the
//! server's message. `Validation` is raised before a request is ever built.

/// Errors returned by `TodoClient`, `Transport` implementations and
/// `TodoSession`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Input rejected locally; no request was sent.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The server returned 404, or the todo is not in the local mirror.
    #[error("todo not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),
}
