//! Session-held cart state.
//!
//! The cart lives entirely in the visitor's session: it is never persisted
//! to the remote store and disappears with the session.

use tiendita_core::Cart;
use tower_sessions::Session;

/// Session keys.
pub mod keys {
    /// Key for storing the visitor's cart.
    pub const CART: &str = "cart";
}

/// Read the cart from the session, defaulting to empty.
pub async fn get_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Write the cart back to the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn save_cart(
    session: &Session,
    cart: &Cart,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CART, cart).await
}
