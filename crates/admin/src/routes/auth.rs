//! Shared-secret login and logout.

use axum::{Json, extract::State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::{
    config::admin_key_matches,
    error::{AppError, Result},
    middleware::auth::{clear_admin, set_admin},
    state::AppState,
};

/// Login form payload.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub password: String,
}

/// POST /auth/login - compare the submitted key against the configured
/// secret and mark the session on success.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<LoginForm>,
) -> Result<Json<serde_json::Value>> {
    if !admin_key_matches(state.config(), &form.password) {
        tracing::warn!("failed admin login attempt");
        return Err(AppError::Unauthorized("Contraseña incorrecta".to_string()));
    }

    set_admin(&session).await?;
    tracing::info!("admin logged in");
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// POST /auth/logout - drop the admin flag.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Json<serde_json::Value>> {
    clear_admin(&session).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
