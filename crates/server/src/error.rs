// crates/server/src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cluster_view_client::ClientError;
use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

/// Structured JSON error response for API errors
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into(), details: None }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self { error: error.into(), details: Some(details.into()) }
    }
}

/// API error types that map to HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, unknown, or expired bearer token, or rejected credentials.
    #[error("Unauthorized")]
    Unauthorized,

    /// Request blocked before any upstream call (required field missing).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Malformed request body or multipart payload.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A dependent fetch finished after a newer selection superseded it.
    #[error("Selection superseded")]
    Superseded,

    /// Upstream backend call failed.
    #[error("Upstream error: {0}")]
    Upstream(#[from] ClientError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            ApiError::Unauthorized => {
                tracing::info!("Unauthorized request");
                (StatusCode::UNAUTHORIZED, ErrorResponse::new("Unauthorized"))
            }
            ApiError::Validation(msg) => {
                tracing::warn!(message = %msg, "Validation failure");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorResponse::with_details("Validation failed", msg.clone()),
                )
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(message = %msg, "Bad request");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_details("Bad request", msg.clone()),
                )
            }
            ApiError::Superseded => {
                tracing::debug!("Stale dependent fetch discarded");
                (
                    StatusCode::CONFLICT,
                    ErrorResponse::new("Selection superseded by a newer one"),
                )
            }
            ApiError::Upstream(client_err) => {
                tracing::error!(error = %client_err, "Upstream backend error");
                // Reflect the upstream status where we have one so the caller
                // can distinguish "their request was bad" from "backend down".
                let status = client_err
                    .status()
                    .and_then(|s| StatusCode::from_u16(s).ok())
                    .unwrap_or(StatusCode::BAD_GATEWAY);
                (
                    status,
                    ErrorResponse::with_details("Backend request failed", client_err.to_string()),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    /// Helper to extract status code and body from a response
    async fn extract_response(response: Response) -> (StatusCode, ErrorResponse) {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        (status, error_response)
    }

    #[tokio::test]
    async fn test_unauthorized_returns_401() {
        let (status, body) = extract_response(ApiError::Unauthorized.into_response()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error, "Unauthorized");
        assert!(body.details.is_none());
    }

    #[tokio::test]
    async fn test_validation_returns_422() {
        let err = ApiError::Validation("patient_id is required".to_string());
        let (status, body) = extract_response(err.into_response()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.error, "Validation failed");
        assert!(body.details.unwrap().contains("patient_id"));
    }

    #[tokio::test]
    async fn test_superseded_returns_409() {
        let (status, body) = extract_response(ApiError::Superseded.into_response()).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body.error.contains("superseded"));
    }

    #[tokio::test]
    async fn test_upstream_status_is_reflected() {
        let err = ApiError::Upstream(ClientError::Status {
            endpoint: "/api/users",
            status: 409,
            message: "exists".to_string(),
        });
        let (status, body) = extract_response(err.into_response()).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.error, "Backend request failed");
        assert!(body.details.unwrap().contains("exists"));
    }

    #[tokio::test]
    async fn test_upstream_without_status_is_502() {
        let err = ApiError::Upstream(ClientError::Status {
            endpoint: "/api/csv",
            status: 1, // not a valid HTTP status
            message: "weird".to_string(),
        });
        let (status, _) = extract_response(err.into_response()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::new("Test error");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"error\":\"Test error\""));
        assert!(!json.contains("details"));

        let response = ErrorResponse::with_details("Test error", "More info");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"details\":\"More info\""));
    }
}
