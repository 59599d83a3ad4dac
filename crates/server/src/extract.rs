// crates/server/src/extract.rs
//! Bearer-token extractor for protected routes.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::error::ApiError;
use crate::session::Session;
use crate::state::AppState;

/// The authenticated session for the request's `Authorization: Bearer`
/// header. Rejects with 401 when the header is missing, malformed, or names
/// a token the store does not know (logged out or expired).
pub struct CurrentSession(pub Session);

impl FromRequestParts<Arc<AppState>> for CurrentSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or(ApiError::Unauthorized)?;

        state
            .sessions
            .get(token)
            .map(CurrentSession)
            .ok_or(ApiError::Unauthorized)
    }
}
