// crates/server/src/routes/dashboard.rs
//! The aggregated dashboard endpoint.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use cluster_view_core::{build_dashboard, DashboardViewModel};

use crate::error::ApiResult;
use crate::metrics::RequestTimer;
use crate::state::AppState;

/// GET /api/dashboard - Full dashboard view-model.
///
/// Fetches the raw record list from the upstream backend and shapes it into
/// the groupings, scatter series, and preview table the dashboard page
/// renders. Aggregation itself cannot fail; only the fetch can.
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DashboardViewModel>> {
    let timer = RequestTimer::new("dashboard");

    let records = match state.client.fetch_records().await {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(endpoint = "dashboard", error = %e, "Failed to fetch records");
            timer.finish_err(502);
            return Err(e.into());
        }
    };

    let view_model = build_dashboard(&records);
    tracing::debug!(
        total = view_model.total_clusters,
        risk_buckets = view_model.risk_summary.len(),
        "Dashboard aggregated"
    );

    timer.finish_ok();
    Ok(Json(view_model))
}

/// Create the dashboard routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(dashboard))
}
