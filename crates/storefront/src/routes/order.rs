//! Order route handler: cart to WhatsApp deep link.

use axum::{Json, extract::State};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::session::get_cart;
use crate::order::{OrderMessage, compose_order};
use crate::state::AppState;

/// Compose the WhatsApp order for the session's cart.
///
/// The client opens the returned `url`; the cart itself is left untouched so
/// the visitor can keep editing if the message is never sent.
#[instrument(skip(state, session))]
pub async fn whatsapp(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<OrderMessage>> {
    let cart = get_cart(&session).await;
    if cart.is_empty() {
        return Err(AppError::BadRequest("El carrito está vacío".to_string()));
    }

    Ok(Json(compose_order(&cart, &state.config().whatsapp_number)))
}
