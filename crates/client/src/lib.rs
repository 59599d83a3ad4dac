// crates/client/src/lib.rs
//! Typed HTTP client for the upstream surveillance REST backend.
//!
//! One [`BackendClient`] instance is shared for the process lifetime (the
//! underlying `reqwest::Client` pools connections). Each module covers one
//! backend surface: credential login, record fetches, location lookups,
//! multipart upload, and user CRUD.

pub mod auth;
pub mod error;
pub mod locations;
pub mod records;
pub mod upload;
pub mod users;

pub use auth::AuthenticatedUser;
pub use error::ClientError;
pub use locations::{District, Province};
pub use upload::{UploadFile, UploadMetadata};

use std::time::Duration;

/// Default per-request timeout. There is no retry policy; a failed call
/// surfaces once and the caller decides what to do.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Handle to the upstream REST backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for the backend at `base_url` (scheme + host + port,
    /// no trailing slash required).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = BackendClient::new("http://localhost:3001/");
        assert_eq!(client.base_url(), "http://localhost:3001");
        assert_eq!(client.url("/api/csv"), "http://localhost:3001/api/csv");
    }
}
