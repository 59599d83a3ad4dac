// crates/server/src/routes/users.rs
//! User administration proxy.
//!
//! These handlers relay CRUD calls to the upstream backend under the
//! caller's bearer token; the backend owns authorization and storage.
//! Role strings pass through the closed [`Role`] enum on both directions,
//! so a drifted value is rejected at the boundary instead of leaking into
//! the admin table.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use cluster_view_core::UserAccount;
use serde::Serialize;
use ts_rs::TS;

use crate::error::ApiResult;
use crate::extract::CurrentSession;
use crate::metrics::RequestTimer;
use crate::state::AppState;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct UserMutationResponse {
    pub ok: bool,
    pub username: String,
}

/// GET /api/users - List all accounts.
pub async fn list(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
) -> ApiResult<Json<Vec<UserAccount>>> {
    let timer = RequestTimer::new("users_list");

    match state.client.list_users(session.upstream_bearer()).await {
        Ok(users) => {
            timer.finish_ok();
            Ok(Json(users))
        }
        Err(e) => {
            tracing::error!(error = %e, "User list failed");
            timer.finish_err(e.status().unwrap_or(502));
            Err(e.into())
        }
    }
}

/// POST /api/users - Create an account.
pub async fn create(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
    Json(user): Json<UserAccount>,
) -> ApiResult<Json<UserMutationResponse>> {
    let timer = RequestTimer::new("users_create");
    let username = user.username.clone();

    if let Err(e) = state.client.create_user(session.upstream_bearer(), &user).await {
        tracing::error!(username = %username, error = %e, "User create failed");
        timer.finish_err(e.status().unwrap_or(502));
        return Err(e.into());
    }

    tracing::info!(username = %username, "User created");
    timer.finish_ok();
    Ok(Json(UserMutationResponse { ok: true, username }))
}

/// PUT /api/users/{username} - Update an account.
pub async fn update(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
    Path(username): Path<String>,
    Json(user): Json<UserAccount>,
) -> ApiResult<Json<UserMutationResponse>> {
    let timer = RequestTimer::new("users_update");

    if let Err(e) = state
        .client
        .update_user(session.upstream_bearer(), &username, &user)
        .await
    {
        tracing::error!(username = %username, error = %e, "User update failed");
        timer.finish_err(e.status().unwrap_or(502));
        return Err(e.into());
    }

    tracing::info!(username = %username, "User updated");
    timer.finish_ok();
    Ok(Json(UserMutationResponse { ok: true, username }))
}

/// DELETE /api/users/{username} - Remove an account.
pub async fn remove(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
    Path(username): Path<String>,
) -> ApiResult<Json<UserMutationResponse>> {
    let timer = RequestTimer::new("users_delete");

    if let Err(e) = state.client.delete_user(session.upstream_bearer(), &username).await {
        tracing::error!(username = %username, error = %e, "User delete failed");
        timer.finish_err(e.status().unwrap_or(502));
        return Err(e.into());
    }

    tracing::info!(username = %username, "User deleted");
    timer.finish_ok();
    Ok(Json(UserMutationResponse { ok: true, username }))
}

/// Create the user administration router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list).post(create))
        .route("/users/{username}", put(update).delete(remove))
}
