//! API error types with JSON responses.
//!
//! Every error leaves the server as `{ "error": { "message": "..." } }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use noteful_core::ValidationError;
use noteful_store::StoreError;
use serde::Serialize;

/// Message returned when a folder id matches no row.
pub const FOLDER_NOT_FOUND: &str = "Folder does not exist";

/// Message returned when a note id matches no row.
pub const NOTE_NOT_FOUND: &str = "Note does not exist";

/// Message returned for any failure the client cannot act on.
pub const INTERNAL_ERROR: &str = "Internal server error";

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request (400), e.g. an unparseable body.
    #[error("{0}")]
    BadRequest(String),

    /// Request input failed validation (400).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Not found (404).
    #[error("{0}")]
    NotFound(String),

    /// Store error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Store(StoreError::FolderNotFound(_) | StoreError::NoteNotFound(_)) => {
                "NOT_FOUND"
            }
            Self::Store(_) => "STORAGE_ERROR",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(e) => match e {
                StoreError::FolderNotFound(_) | StoreError::NoteNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Message shown to the client. Store failures are not described.
    pub fn message(&self) -> String {
        match self {
            Self::Store(StoreError::FolderNotFound(_)) => FOLDER_NOT_FOUND.to_string(),
            Self::Store(StoreError::NoteNotFound(_)) => NOTE_NOT_FOUND.to_string(),
            Self::Store(_) => INTERNAL_ERROR.to_string(),
            other => other.to_string(),
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error details.
    pub error: ErrorDetails,
}

/// Error details within the response.
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    /// Human-readable error message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(code = self.code(), error = %self, "Request failed");
        } else {
            tracing::debug!(code = self.code(), error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            error: ErrorDetails {
                message: self.message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
