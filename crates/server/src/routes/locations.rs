// crates/server/src/routes/locations.rs
//! Province and district lookups backing the upload form.
//!
//! District data causally depends on the session's most recently selected
//! province. Each district request is tagged by that session's supersede
//! guard; a request whose upstream fetch resolves after a newer selection
//! returns 409 and its data is discarded, so stale results can never replace
//! newer ones. The guard is per session, so users never supersede each
//! other.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use cluster_view_client::{District, Province};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ApiError, ApiResult};
use crate::extract::CurrentSession;
use crate::metrics::RequestTimer;
use crate::state::AppState;

/// Built-in province sample used when the upstream lookup fails. The upload
/// form stays usable; the failure is logged.
fn fallback_provinces() -> Vec<Province> {
    vec![
        Province { pcode: "TH10".to_string(), name: "Bangkok".to_string() },
        Province { pcode: "TH50".to_string(), name: "Chiang Mai".to_string() },
        Province { pcode: "TH57".to_string(), name: "Chiang Rai".to_string() },
    ]
}

/// District sample matching [`fallback_provinces`]. Unknown pcodes get an
/// empty list rather than another province's districts.
fn fallback_districts(pcode: &str) -> Vec<District> {
    let entries: &[(&str, &str)] = match pcode {
        "TH10" => &[("1001", "Phra Nakhon"), ("1002", "Dusit")],
        "TH50" => &[("5001", "Mueang Chiang Mai"), ("5002", "Chom Thong")],
        "TH57" => &[("5701", "Mueang Chiang Rai"), ("5702", "Wiang Chai")],
        _ => &[],
    };
    entries
        .iter()
        .map(|(code, name)| District { code: code.to_string(), name: name.to_string() })
        .collect()
}

/// GET /api/locations/provinces - Bearer-authenticated province lookup.
pub async fn provinces(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
) -> Json<Vec<Province>> {
    let timer = RequestTimer::new("locations_provinces");

    match state.client.fetch_provinces(session.upstream_bearer()).await {
        Ok(provinces) => {
            timer.finish_ok();
            Json(provinces)
        }
        Err(e) => {
            // The caller still gets a 200 with the sample list, so the
            // metric records the status actually served; the log carries
            // the upstream failure.
            tracing::warn!(error = %e, "Province lookup failed, serving fallback list");
            timer.finish_ok();
            Json(fallback_provinces())
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DistrictQuery {
    pub pcode: String,
}

/// Districts for the selected province, tagged with that selection.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct DistrictsResponse {
    pub pcode: String,
    pub districts: Vec<District>,
}

/// GET /api/locations/districts?pcode= - Districts for one province.
///
/// Tagged at entry; committed after the upstream fetch. A tag superseded by
/// a newer selection while the fetch was in flight yields 409, never stale
/// data presented as current.
pub async fn districts(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
    Query(query): Query<DistrictQuery>,
) -> ApiResult<Json<DistrictsResponse>> {
    let timer = RequestTimer::new("locations_districts");
    let tag = session.district_guard.begin();

    let districts = match state
        .client
        .fetch_districts(session.upstream_bearer(), &query.pcode)
        .await
    {
        Ok(d) => d,
        Err(e) => {
            tracing::warn!(pcode = %query.pcode, error = %e, "District lookup failed, serving fallback list");
            fallback_districts(&query.pcode)
        }
    };

    if !session.district_guard.commit(tag) {
        tracing::debug!(pcode = %query.pcode, "District result superseded, discarding");
        timer.finish_err(409);
        return Err(ApiError::Superseded);
    }

    timer.finish_ok();
    Ok(Json(DistrictsResponse { pcode: query.pcode, districts }))
}

/// Create the locations routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/locations/provinces", get(provinces))
        .route("/locations/districts", get(districts))
}
