//! Admin authentication extractor.
//!
//! Authentication is a shared-secret comparison at login; success sets a
//! session flag and nothing else. There is no user model, no server-side
//! account state, and the flag disappears with the session.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

/// Session keys.
pub mod keys {
    /// Key for the "logged in as admin" flag.
    pub const IS_ADMIN: &str = "is_admin";
}

/// Extractor that requires an authenticated admin session.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(_admin: RequireAdmin) -> impl IntoResponse {
///     "solo admins"
/// }
/// ```
pub struct RequireAdmin;

/// Rejection when the session is not authenticated.
pub struct Unauthorized;

impl IntoResponse for Unauthorized {
    fn into_response(self) -> Response {
        StatusCode::UNAUTHORIZED.into_response()
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = Unauthorized;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts.extensions.get::<Session>().ok_or(Unauthorized)?;

        let is_admin = session
            .get::<bool>(keys::IS_ADMIN)
            .await
            .ok()
            .flatten()
            .unwrap_or(false);

        if is_admin { Ok(Self) } else { Err(Unauthorized) }
    }
}

/// Mark the session as an authenticated admin.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::IS_ADMIN, true).await
}

/// Clear the admin flag (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<bool>(keys::IS_ADMIN).await?;
    Ok(())
}
