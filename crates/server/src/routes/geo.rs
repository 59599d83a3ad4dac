// crates/server/src/routes/geo.rs
//! Per-region counts for the choropleth map.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use cluster_view_core::{color_bucket, region_counts};
use serde::Serialize;
use ts_rs::TS;

use crate::error::ApiResult;
use crate::metrics::RequestTimer;
use crate::state::AppState;

/// One region's count plus its choropleth fill color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct RegionCount {
    /// Exact join key against the GeoJSON shape properties. The map
    /// collaborator matches case- and accent-sensitively; a shape with no
    /// entry here reads as count 0.
    pub name: String,
    #[ts(type = "number")]
    pub count: u64,
    pub color: &'static str,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct GeoSummaryResponse {
    pub regions: Vec<RegionCount>,
    /// Fill color for shapes whose name matches no region.
    pub zero_color: &'static str,
}

/// GET /api/geo/provinces - Record counts keyed by province name.
pub async fn province_summary(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<GeoSummaryResponse>> {
    let timer = RequestTimer::new("geo_provinces");

    let records = match state.client.fetch_records().await {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(endpoint = "geo_provinces", error = %e, "Failed to fetch records");
            timer.finish_err(502);
            return Err(e.into());
        }
    };

    let regions = region_counts(&records, |r| &r.province)
        .into_iter()
        .map(|(name, count)| RegionCount { color: color_bucket(count), name, count })
        .collect();

    timer.finish_ok();
    Ok(Json(GeoSummaryResponse { regions, zero_color: color_bucket(0) }))
}

/// Create the geo routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/geo/provinces", get(province_summary))
}
