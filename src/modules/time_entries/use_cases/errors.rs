use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::modules::time_entries::core::errors::EntryError;
use crate::shared::infrastructure::entry_store::StoreError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] EntryError),

    #[error("Event not found")]
    NotFound(i64),

    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApplicationError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApplicationError::Validation(_) | ApplicationError::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
