// crates/client/src/locations.rs
//! Bearer-authenticated province and district lookups for the upload form.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{status_error, ClientError};
use crate::BackendClient;

const PROVINCES_ENDPOINT: &str = "/api/upload/provinces";
const DISTRICTS_ENDPOINT: &str = "/api/upload/districts";

/// One selectable province, identified by its pcode (e.g. `TH50`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
pub struct Province {
    #[serde(default)]
    pub pcode: String,
    #[serde(default)]
    pub name: String,
}

/// One district within the currently selected province.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
pub struct District {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
}

impl BackendClient {
    pub async fn fetch_provinces(&self, bearer: &str) -> Result<Vec<Province>, ClientError> {
        let response = self
            .http()
            .get(self.url(PROVINCES_ENDPOINT))
            .bearer_auth(bearer)
            .send()
            .await
            .map_err(|source| ClientError::Network { endpoint: PROVINCES_ENDPOINT, source })?;

        if !response.status().is_success() {
            return Err(status_error(PROVINCES_ENDPOINT, response).await);
        }

        response
            .json()
            .await
            .map_err(|source| ClientError::Decode { endpoint: PROVINCES_ENDPOINT, source })
    }

    /// Districts for one province. Causally depends on the caller's current
    /// province selection; callers racing selections must guard with
    /// [`cluster_view_core::SupersedeGuard`].
    pub async fn fetch_districts(
        &self,
        bearer: &str,
        pcode: &str,
    ) -> Result<Vec<District>, ClientError> {
        let response = self
            .http()
            .get(self.url(DISTRICTS_ENDPOINT))
            .query(&[("pcode", pcode)])
            .bearer_auth(bearer)
            .send()
            .await
            .map_err(|source| ClientError::Network { endpoint: DISTRICTS_ENDPOINT, source })?;

        if !response.status().is_success() {
            return Err(status_error(DISTRICTS_ENDPOINT, response).await);
        }

        response
            .json()
            .await
            .map_err(|source| ClientError::Decode { endpoint: DISTRICTS_ENDPOINT, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_provinces_sends_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/upload/provinces"))
            .and(header("authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "pcode": "TH50", "name": "Chiang Mai" },
                { "pcode": "TH57", "name": "Chiang Rai" }
            ])))
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        let provinces = client.fetch_provinces("tok-1").await.unwrap();
        assert_eq!(provinces.len(), 2);
        assert_eq!(provinces[0].pcode, "TH50");
    }

    #[tokio::test]
    async fn test_fetch_districts_passes_pcode() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/upload/districts"))
            .and(query_param("pcode", "TH50"))
            .and(header("authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "code": "5001", "name": "Mueang Chiang Mai" }
            ])))
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        let districts = client.fetch_districts("tok-1", "TH50").await.unwrap();
        assert_eq!(districts.len(), 1);
        assert_eq!(districts[0].name, "Mueang Chiang Mai");
    }

    #[tokio::test]
    async fn test_fetch_provinces_401_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/upload/provinces"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        let err = client.fetch_provinces("expired").await.unwrap_err();
        assert_eq!(err.status(), Some(401));
    }
}
