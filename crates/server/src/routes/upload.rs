// crates/server/src/routes/upload.rs
//! Sequencing-result upload: multipart form relay to the upstream backend.
//!
//! The patient identifier is validated before anything leaves this process.
//! A submission failing that check costs zero upstream calls.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    routing::post,
    Json, Router,
};
use cluster_view_client::{UploadFile, UploadMetadata};
use serde::Serialize;
use ts_rs::TS;

use crate::error::{ApiError, ApiResult};
use crate::extract::CurrentSession;
use crate::metrics::RequestTimer;
use crate::state::AppState;

/// Fields collected from the multipart form before relay.
#[derive(Debug, Default)]
struct UploadForm {
    patient_id: String,
    collection_date: String,
    province: String,
    district: String,
    files: Vec<UploadFile>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub patient_id: String,
    /// Normalized collection date as relayed upstream (DD/Mon/YYYY or "NA").
    pub collection_date: String,
    pub files_received: usize,
}

async fn collect_form(mut multipart: Multipart) -> ApiResult<UploadForm> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "patient_id" => form.patient_id = read_text(field).await?,
            "collection_date" => form.collection_date = read_text(field).await?,
            "province" => form.province = read_text(field).await?,
            "district" => form.district = read_text(field).await?,
            "files" => {
                let filename = field.file_name().unwrap_or("upload.bin").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Unreadable file part: {e}")))?;
                form.files.push(UploadFile { filename, bytes: bytes.to_vec() });
            }
            other => {
                tracing::debug!(field = other, "Ignoring unrecognized form field");
            }
        }
    }

    Ok(form)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> ApiResult<String> {
    field
        .text()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Unreadable form field: {e}")))
}

/// POST /api/upload - Relay a sequencing-result submission upstream.
///
/// Validation order is fixed: the patient identifier is checked first, and a
/// blank one returns 422 without touching the network. The collection date is
/// normalized here so the upstream backend always sees DD/Mon/YYYY or "NA".
pub async fn upload(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
    multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let timer = RequestTimer::new("upload");

    let form = collect_form(multipart).await?;

    if form.patient_id.trim().is_empty() {
        timer.finish_err(422);
        return Err(ApiError::Validation("patient_id must not be empty".to_string()));
    }

    let metadata = UploadMetadata::new(
        form.patient_id.trim(),
        &form.collection_date,
        &form.province,
        &form.district,
    );
    let files_received = form.files.len();

    if let Err(e) = state
        .client
        .submit_upload(session.upstream_bearer(), &metadata, form.files)
        .await
    {
        tracing::error!(patient_id = %metadata.patient_id, error = %e, "Upload relay failed");
        timer.finish_err(e.status().unwrap_or(502));
        return Err(e.into());
    }

    tracing::info!(
        patient_id = %metadata.patient_id,
        files = files_received,
        "Upload relayed upstream"
    );

    timer.finish_ok();
    Ok(Json(UploadResponse {
        patient_id: metadata.patient_id,
        collection_date: metadata.collection_date,
        files_received,
    }))
}

/// Create the upload routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/upload", post(upload))
}
