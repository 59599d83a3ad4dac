//! API route handlers for the cluster-view server.

pub mod auth;
pub mod dashboard;
pub mod geo;
pub mod health;
pub mod locations;
pub mod upload;
pub mod users;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

/// Create the combined API router with all routes under /api prefix.
///
/// Routes:
/// - GET  /api/health - Health check
/// - GET  /api/metrics - Prometheus metrics
/// - POST /api/auth/login - Credential login, mints a session token
/// - POST /api/auth/logout - Destroy the current session
/// - GET  /api/auth/me - Claims for the current session
/// - GET  /api/dashboard - Aggregated dashboard view-model
/// - GET  /api/geo/provinces - Per-province counts with choropleth colors
/// - GET  /api/locations/provinces - Province lookup for the upload form
/// - GET  /api/locations/districts?pcode= - Districts for a province (supersede-guarded)
/// - POST /api/upload - Validated multipart upload, forwarded upstream
/// - GET/POST /api/users, PUT/DELETE /api/users/{username} - User CRUD proxy
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", health::router())
        .nest("/api", auth::router())
        .nest("/api", dashboard::router())
        .nest("/api", geo::router())
        .nest("/api", locations::router())
        .nest("/api", upload::router())
        .nest("/api", users::router())
        .with_state(state)
}
