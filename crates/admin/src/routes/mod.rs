//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Auth
//! POST /auth/login             - Shared-secret login ({password})
//! POST /auth/logout            - Clear the admin session
//!
//! # Products (require admin session)
//! GET    /api/products         - In-memory listing (?q=, ?categoria=)
//! POST   /api/products         - Create (server-assigned id)
//! PUT    /api/products/{id}    - Update in place
//! DELETE /api/products/{id}    - Delete (idempotent)
//! POST   /api/catalog/reload   - Re-download, reset baseline
//!
//! # Images (require admin session)
//! POST /api/images             - Multipart upload, responds {url}
//! ```

pub mod auth;
pub mod catalog;
pub mod images;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the protected API router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::index).post(products::create))
        .route(
            "/products/{id}",
            axum::routing::put(products::update).delete(products::remove),
        )
        .route("/catalog/reload", post(catalog::reload))
        .route("/images", post(images::upload))
}

/// Create all routes for the admin panel.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest("/api", api_routes())
}
