//! Unified error handling for the admin API.
//!
//! The taxonomy mirrors how failures surface to the operator:
//!
//! - validation failures are caught before the mutation pipeline and come
//!   back as 400 with a field-specific message;
//! - store failures (download/upload) are 502 with a generic message, and
//!   the in-memory catalogue keeps its last-known-good state;
//! - image upload failures carry the underlying store message inline, since
//!   the admin form shows it next to the upload control.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tiendita_core::ValidationError;
use tiendita_store::StoreError;

/// Application-level error type for the admin panel.
#[derive(Debug, Error)]
pub enum AppError {
    /// Product input failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Remote store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Image upload failed.
    #[error("Upload error: {0}")]
    Upload(StoreError),

    /// Malformed multipart request.
    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    /// Session read/write failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Not logged in, or wrong admin key.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Store(_) | Self::Upload(_) | Self::Session(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Validation(_) | Self::Multipart(_) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Store(_) | Self::Upload(_) => StatusCode::BAD_GATEWAY,
            Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        };

        let message = match &self {
            // The upload control shows the underlying store message inline.
            Self::Upload(err) => format!("Error subiendo imagen: {err}"),
            Self::Store(_) => "Error guardando productos".to_string(),
            Self::Session(_) => "Error interno".to_string(),
            Self::Validation(err) => err.to_string(),
            _ => self.to_string(),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
