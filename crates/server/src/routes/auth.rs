// crates/server/src/routes/auth.rs
//! The session/credential gate: login, logout, and current identity.
//!
//! Failure is signalled by the absence of an identity from the upstream
//! gate, never by an error value; the handler maps that absence to a 401.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use cluster_view_core::Claims;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ApiError, ApiResult};
use crate::extract::CurrentSession;
use crate::metrics::RequestTimer;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login: the minted bearer token plus the identity claims.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: Claims,
}

/// POST /api/auth/login - Validate credentials against the upstream backend.
///
/// The gate's authenticate call fully resolves before any dependent request
/// can be issued: no token exists until this returns.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let timer = RequestTimer::new("auth_login");

    let Some(user) = state.client.authenticate(&req.username, &req.password).await else {
        // No identity came back: wrong credentials, empty payload, or the
        // endpoint was unreachable. All of them read as "not authenticated".
        timer.finish_err(401);
        return Err(ApiError::Unauthorized);
    };

    let session = state.sessions.create(user.claims, user.backend_token);
    tracing::info!(username = %session.claims.username, "Login succeeded");

    timer.finish_ok();
    Ok(Json(LoginResponse { token: session.token.clone(), user: session.claims }))
}

/// POST /api/auth/logout - Destroy the current session.
pub async fn logout(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
) -> Json<serde_json::Value> {
    state.sessions.remove(&session.token);
    tracing::info!(username = %session.claims.username, "Logged out");
    Json(serde_json::json!({ "ok": true }))
}

/// GET /api/auth/me - Claims for the current session.
pub async fn me(CurrentSession(session): CurrentSession) -> Json<Claims> {
    Json(session.claims)
}

/// Create the auth routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
}
