//! Cart route handlers.
//!
//! The cart is session state only: add-time snapshots of name and price,
//! never persisted to the remote store. Adding looks the product up in a
//! fresh catalogue load so the snapshot reflects the current price.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tiendita_core::{Cart, CartLine, Catalog, ProductId};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::session::{get_cart, save_cart};
use crate::state::AppState;

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    #[serde(rename = "lineas")]
    pub lines: Vec<CartLine>,
    pub total: Decimal,
    #[serde(rename = "articulos")]
    pub item_count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().to_vec(),
            total: cart.total(),
            item_count: cart.item_count(),
        }
    }
}

fn default_quantity() -> u32 {
    1
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub id: i64,
    #[serde(default = "default_quantity")]
    pub cantidad: u32,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub id: i64,
    pub cantidad: u32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub id: i64,
}

/// Show the current cart.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CartView>> {
    let cart = get_cart(&session).await;
    Ok(Json(CartView::from(&cart)))
}

/// Add a product to the cart.
///
/// Looks the product up in a fresh catalogue load; the snapshot taken here
/// is what the cart keeps even if the catalogue changes later.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<AddToCartForm>,
) -> Result<Json<CartView>> {
    let catalog = Catalog::from_remote(state.catalog().load().await?);
    let id = ProductId::new(form.id);
    let product = catalog
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("producto {id}")))?;

    let mut cart = get_cart(&session).await;
    cart.add(product, form.cantidad);
    save_cart(&session, &cart).await?;

    Ok(Json(CartView::from(&cart)))
}

/// Replace a line's quantity. Quantity zero removes the line.
#[instrument(skip(session))]
pub async fn update(session: Session, Json(form): Json<UpdateCartForm>) -> Result<Json<CartView>> {
    let mut cart = get_cart(&session).await;
    cart.set_quantity(ProductId::new(form.id), form.cantidad);
    save_cart(&session, &cart).await?;

    Ok(Json(CartView::from(&cart)))
}

/// Remove a line. No-op if the product is not in the cart.
#[instrument(skip(session))]
pub async fn remove(session: Session, Json(form): Json<RemoveFromCartForm>) -> Result<Json<CartView>> {
    let mut cart = get_cart(&session).await;
    cart.remove(ProductId::new(form.id));
    save_cart(&session, &cart).await?;

    Ok(Json(CartView::from(&cart)))
}

/// Empty the cart.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Json<CartView>> {
    let mut cart = get_cart(&session).await;
    cart.clear();
    save_cart(&session, &cart).await?;

    Ok(Json(CartView::from(&cart)))
}
