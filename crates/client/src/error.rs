// crates/client/src/error.rs
use serde::Deserialize;
use thiserror::Error;

/// Errors from calls to the upstream backend.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error calling {endpoint}: {source}")]
    Network {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("backend returned {status} for {endpoint}: {message}")]
    Status {
        endpoint: &'static str,
        status: u16,
        message: String,
    },

    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    /// HTTP status of the upstream response, if the call got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error body shape the backend uses for non-2xx responses. Some endpoints
/// say `error`, others `message`; both are optional free text.
#[derive(Debug, Default, Deserialize)]
struct BackendErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Turn a non-2xx response into a [`ClientError::Status`], pulling the
/// human-readable message out of the body when one is there.
pub(crate) async fn status_error(endpoint: &'static str, response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();
    let raw = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<BackendErrorBody>(&raw)
        .ok()
        .and_then(|b| b.error.or(b.message))
        .unwrap_or(raw);
    ClientError::Status { endpoint, status, message }
}
