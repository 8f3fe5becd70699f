//! Mapping from service failures to HTTP responses.
//!
//! Every failure is rendered as `{"message": "..."}` with no structured error
//! code. Store failures carry the status chosen by the handler, since the same
//! `StoreError` maps to 400 on writes of a single record and 500 elsewhere.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::model::Message;
use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("Todo not found")]
    NotFound,

    #[error("{source}")]
    Store {
        status: StatusCode,
        #[source]
        source: StoreError,
    },
}

impl ServiceError {
    /// Adapter for `map_err` that tags a store failure with `status`.
    pub fn store(status: StatusCode) -> impl FnOnce(StoreError) -> Self {
        move |source| ServiceError::Store { status, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Store { status, .. } => *status,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ServiceError::Store { source, .. } => {
                tracing::error!(%status, error = %source, "store operation failed");
            }
            other => tracing::debug!(%status, error = %other, "request rejected"),
        }
        (status, Json(Message::new(self.to_string()))).into_response()
    }
}
