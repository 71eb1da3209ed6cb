//! Catalogue reload endpoint.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::{error::Result, middleware::RequireAdmin, state::AppState};

/// POST /api/catalog/reload - re-download the document and reset the
/// baseline snapshot, discarding any unpersisted in-memory state.
#[instrument(skip(state, _admin))]
pub async fn reload(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>> {
    let count = state.reload().await?;
    Ok(Json(serde_json::json!({ "ok": true, "productos": count })))
}
