//! HTTP route handlers for the public storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                    - Health check
//!
//! # Catalogue
//! GET  /api/products              - Product listing (?q=, ?categoria=)
//! GET  /api/categories            - Distinct category names
//! GET  /api/categories/overview   - Category cards (count + cover image)
//!
//! # Cart (session-held)
//! GET  /api/cart                  - Current cart
//! POST /api/cart/add              - Add a product ({id, cantidad})
//! POST /api/cart/update           - Replace a line quantity ({id, cantidad})
//! POST /api/cart/remove           - Remove a line ({id})
//! POST /api/cart/clear            - Empty the cart
//!
//! # Order
//! GET  /api/order/whatsapp        - Composed wa.me deep link for the cart
//! ```

pub mod cart;
pub mod order;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the catalogue routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::index))
        .route("/categories", get(products::categories))
        .route("/categories/overview", get(products::categories_overview))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(Router::new().nest("/api", catalog_routes()))
        .nest("/api/cart", cart_routes())
        .route("/api/order/whatsapp", get(order::whatsapp))
}
