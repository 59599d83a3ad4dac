// crates/server/src/lib.rs
//! HTTP server for the cluster-view dashboard.
//!
//! Thin web tier over two collaborators: the pure aggregation code in
//! `cluster-view-core` and the upstream REST backend reached through
//! `cluster-view-client`. Handlers fetch, shape, and relay; no state beyond
//! login sessions and the district supersede guard lives here.

pub mod error;
pub mod extract;
pub mod metrics;
pub mod routes;
pub mod session;
pub mod state;

use axum::Router;
use cluster_view_client::BackendClient;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router for the given backend client.
pub fn create_app(client: BackendClient) -> Router {
    let state = AppState::new(client);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes::api_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
