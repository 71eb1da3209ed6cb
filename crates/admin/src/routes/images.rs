//! Product image upload.
//!
//! Accepts a multipart form with a single file field, stores the blob under
//! a timestamped sanitized name, and responds with the public URL the admin
//! form writes into the product's `imagen` field.

use axum::{Json, extract::Multipart, extract::State};
use tracing::instrument;

use tiendita_store::images;

use crate::{
    error::{AppError, Result},
    middleware::RequireAdmin,
    state::AppState,
};

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// POST /api/images - upload an image, respond `{url}`.
#[instrument(skip(state, _admin, multipart))]
pub async fn upload(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>> {
    while let Some(field) = multipart.next_field().await? {
        let Some(file_name) = field.file_name().map(ToString::to_string) else {
            // Not a file field (e.g. a stray text part); keep scanning.
            continue;
        };
        let content_type = field
            .content_type()
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();
        let bytes = field.bytes().await?.to_vec();

        if bytes.is_empty() {
            return Err(AppError::BadRequest("archivo vacío".to_string()));
        }

        let url = images::upload_image(
            state.store().store(),
            &state.config().image_bucket,
            &file_name,
            bytes,
            &content_type,
        )
        .await
        .map_err(AppError::Upload)?;

        tracing::info!(%file_name, %url, "image uploaded");
        return Ok(Json(serde_json::json!({ "url": url })));
    }

    Err(AppError::BadRequest("falta el archivo".to_string()))
}
