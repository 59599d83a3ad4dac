// crates/client/src/auth.rs
//! The credential gate against the backend `/login` endpoint.

use cluster_view_core::{Claims, LoginPayload};
use serde_json::json;

use crate::BackendClient;

/// A successfully authenticated identity: the claims to carry for the
/// session plus the bearer token the backend minted, when it minted one.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub claims: Claims,
    pub backend_token: Option<String>,
}

impl BackendClient {
    /// Validate a username/password pair against the backend.
    ///
    /// Returns `Some` identity on success, `None` on any failure (wrong
    /// credentials, empty payload, unreachable endpoint). Absence of
    /// identity is the failure signal; no error reaches the caller.
    /// Failures are logged here and the gate stays anonymous.
    pub async fn authenticate(&self, username: &str, password: &str) -> Option<AuthenticatedUser> {
        let response = match self
            .http()
            .post(self.url("/login"))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "Login endpoint unreachable");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::info!(status = %response.status(), username, "Login rejected");
            return None;
        }

        let payload: LoginPayload = match response.json().await {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(error = %e, "Login payload did not decode");
                return None;
            }
        };

        if payload.is_empty() {
            tracing::info!(username, "Login returned an empty payload");
            return None;
        }

        Some(AuthenticatedUser {
            claims: Claims::from_login(&payload, username),
            backend_token: payload.token.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_authenticate_success_merges_submitted_username() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(serde_json::json!({ "username": "jdoe", "password": "pw" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "42",
                "email": "jdoe@example.org",
                "token": "backend-token"
            })))
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        let user = client.authenticate("jdoe", "pw").await.expect("identity");

        // Backend omitted username; the submitted one fills in.
        assert_eq!(user.claims.username, "jdoe");
        assert_eq!(user.claims.id, "42");
        assert_eq!(user.backend_token.as_deref(), Some("backend-token"));
    }

    #[tokio::test]
    async fn test_authenticate_401_yields_no_identity() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        assert!(client.authenticate("baduser", "badpass").await.is_none());
    }

    #[tokio::test]
    async fn test_authenticate_empty_payload_yields_no_identity() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        assert!(client.authenticate("jdoe", "pw").await.is_none());
    }

    #[tokio::test]
    async fn test_authenticate_unreachable_endpoint_yields_no_identity() {
        // Nothing listens on this port.
        let client = BackendClient::new("http://127.0.0.1:1");
        assert!(client.authenticate("jdoe", "pw").await.is_none());
    }
}
