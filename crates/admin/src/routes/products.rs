//! Product CRUD over the mutation pipeline.
//!
//! Reads come from the in-memory catalogue; writes go through
//! [`AppState::apply_and_persist`] so every change is validated first,
//! merged against the live document, and only adopted locally after the
//! upload succeeds.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use tiendita_core::{Product, ProductId, ProductInput};
use tracing::instrument;

use crate::{
    error::{AppError, Result},
    middleware::RequireAdmin,
    state::AppState,
};

/// Query parameters for the admin product listing.
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    /// Free-text search over name, category, and price.
    #[serde(default)]
    pub q: String,
    /// Exact category filter.
    pub categoria: Option<String>,
}

/// GET /api/products - list the in-memory catalogue.
#[instrument(skip(state, _admin))]
pub async fn index(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Json<Vec<Product>> {
    let category = query.categoria.as_deref().filter(|c| !c.is_empty());
    let products = state
        .with_catalog(|catalog| {
            catalog
                .filter(&query.q, category)
                .into_iter()
                .cloned()
                .collect()
        })
        .await;

    Json(products)
}

/// POST /api/products - create a product with a server-assigned id.
#[instrument(skip(state, _admin, input))]
pub async fn create(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<ProductInput>,
) -> Result<(StatusCode, Json<Product>)> {
    let validated = input.validate()?;

    let created = state
        .apply_and_persist(|catalog| {
            let product = validated.into_product(catalog.next_id());
            catalog.upsert(product.clone());
            product
        })
        .await?;

    tracing::info!(id = %created.id, name = %created.name, "product created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/products/{id} - replace an existing product in place.
#[instrument(skip(state, _admin, input))]
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<ProductInput>,
) -> Result<Json<Product>> {
    let id = ProductId::new(id);
    let validated = input.validate()?;

    let exists = state.with_catalog(|catalog| catalog.get(id).is_some()).await;
    if !exists {
        return Err(AppError::NotFound(format!("producto {id}")));
    }

    let updated = state
        .apply_and_persist(|catalog| {
            let product = validated.into_product(id);
            catalog.upsert(product.clone());
            product
        })
        .await?;

    tracing::info!(id = %updated.id, "product updated");
    Ok(Json(updated))
}

/// DELETE /api/products/{id} - remove a product.
///
/// Deleting an id that is already gone still persists (a no-op merge) and
/// responds 200, so retries are safe.
#[instrument(skip(state, _admin))]
pub async fn remove(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>> {
    let id = ProductId::new(id);

    let removed = state
        .apply_and_persist(|catalog| catalog.remove(id))
        .await?;

    tracing::info!(%id, removed, "product deleted");
    Ok(Json(serde_json::json!({ "ok": true, "removed": removed })))
}
