// crates/client/src/records.rs
//! Fetching the flat cluster record list.

use cluster_view_core::ClusterRecord;

use crate::error::{status_error, ClientError};
use crate::BackendClient;

const ENDPOINT: &str = "/api/csv";

impl BackendClient {
    /// Fetch all cluster records, preserving backend order. No dedup, no
    /// sort; the aggregation layer depends on input order for its preview.
    pub async fn fetch_records(&self) -> Result<Vec<ClusterRecord>, ClientError> {
        let response = self
            .http()
            .get(self.url(ENDPOINT))
            .send()
            .await
            .map_err(|source| ClientError::Network { endpoint: ENDPOINT, source })?;

        if !response.status().is_success() {
            return Err(status_error(ENDPOINT, response).await);
        }

        response
            .json()
            .await
            .map_err(|source| ClientError::Decode { endpoint: ENDPOINT, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_records_preserves_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/csv"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "sample_id": "S2", "overall_DR_genotype": "MDR-TB" },
                { "sample_id": "S1" }
            ])))
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        let records = client.fetch_records().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sample_id, "S2");
        assert_eq!(records[0].overall_dr_genotype, "MDR-TB");
        assert_eq!(records[1].sample_id, "S1");
    }

    #[tokio::test]
    async fn test_fetch_records_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/csv"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({ "error": "storage offline" })),
            )
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        let err = client.fetch_records().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("storage offline"));
    }
}
