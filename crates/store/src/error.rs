//! Store-layer error type.

use thiserror::Error;

/// Errors from remote store interactions.
///
/// An absent object is not represented here: downloads signal it as
/// `Ok(None)` and catalogue loads recover to an empty list.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with an unexpected status.
    #[error("store returned {status}: {message}")]
    Unexpected {
        /// HTTP status code.
        status: u16,
        /// Body snippet from the store, for diagnostics.
        message: String,
    },

    /// Serializing the catalogue document failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
