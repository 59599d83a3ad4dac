// crates/client/src/upload.rs
//! Multipart submission of patient data and sample files.

use cluster_view_core::format_upload_date;
use reqwest::multipart::{Form, Part};
use serde::Serialize;

use crate::error::{status_error, ClientError};
use crate::BackendClient;

const ENDPOINT: &str = "/api/upload";

/// Patient metadata accompanying an upload. Serialized to a JSON string and
/// sent as the `metadata` part of the multipart form, the way the backend
/// expects it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UploadMetadata {
    pub patient_id: String,
    /// Already normalized to `DD/Mon/YYYY` or `NA`; see [`UploadMetadata::new`].
    pub collection_date: String,
    pub province: String,
    pub district: String,
}

impl UploadMetadata {
    /// Build metadata from raw form input, normalizing the ISO collection
    /// date at this boundary so it happens exactly once.
    pub fn new(patient_id: &str, iso_collection_date: &str, province: &str, district: &str) -> Self {
        Self {
            patient_id: patient_id.to_string(),
            collection_date: format_upload_date(iso_collection_date),
            province: province.to_string(),
            district: district.to_string(),
        }
    }
}

/// One file blob attached to the upload.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl BackendClient {
    /// Submit patient metadata plus file blobs as a bearer-authenticated
    /// multipart form. The caller validates required fields before calling;
    /// this function does transport only.
    pub async fn submit_upload(
        &self,
        bearer: &str,
        metadata: &UploadMetadata,
        files: Vec<UploadFile>,
    ) -> Result<(), ClientError> {
        let metadata_json = serde_json::to_string(metadata)
            .expect("upload metadata is plain strings and always serializes");

        let mut form = Form::new().text("metadata", metadata_json);
        for file in files {
            form = form.part("files", Part::bytes(file.bytes).file_name(file.filename));
        }

        let response = self
            .http()
            .post(self.url(ENDPOINT))
            .bearer_auth(bearer)
            .multipart(form)
            .send()
            .await
            .map_err(|source| ClientError::Network { endpoint: ENDPOINT, source })?;

        if !response.status().is_success() {
            return Err(status_error(ENDPOINT, response).await);
        }

        Ok(())
    }
}
