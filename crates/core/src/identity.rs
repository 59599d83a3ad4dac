// crates/core/src/identity.rs
//! Identity claims carried alongside a session token.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The raw user payload returned by the backend `/login` endpoint.
///
/// Every field is optional on the wire; the claims constructor fills the
/// gaps so downstream code never sees an absent field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub email_verified: Option<String>,
    /// Bearer token for subsequent backend calls, when the backend mints one.
    #[serde(default)]
    pub token: Option<String>,
}

impl LoginPayload {
    /// A payload with nothing in it carries no identity.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.username.is_none()
            && self.email.is_none()
            && self.name.is_none()
            && self.token.is_none()
    }
}

/// Identity attributes for an authenticated session.
///
/// Unset fields are empty strings rather than absent (`email_verified`
/// stays `None`), so consumers can render without presence checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub id: String,
    pub username: String,
    pub email: String,
    pub name: String,
    pub image: String,
    pub email_verified: Option<String>,
}

impl Claims {
    /// Merge the login payload with the username the user actually typed.
    ///
    /// The backend payload wins for every field it supplies; the submitted
    /// username fills in when the payload omits one (some backend versions
    /// never echo it back).
    pub fn from_login(payload: &LoginPayload, submitted_username: &str) -> Self {
        Self {
            id: payload.id.clone().unwrap_or_default(),
            username: payload
                .username
                .clone()
                .unwrap_or_else(|| submitted_username.to_string()),
            email: payload.email.clone().unwrap_or_default(),
            name: payload.name.clone().unwrap_or_default(),
            image: payload.image.clone().unwrap_or_default(),
            email_verified: payload.email_verified.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_from_full_payload() {
        let payload = LoginPayload {
            id: Some("42".to_string()),
            username: Some("jdoe".to_string()),
            email: Some("jdoe@example.org".to_string()),
            name: Some("Jane Doe".to_string()),
            image: Some("https://example.org/jdoe.png".to_string()),
            email_verified: Some("2024-01-01T00:00:00Z".to_string()),
            token: None,
        };
        let claims = Claims::from_login(&payload, "typed-name");
        assert_eq!(claims.username, "jdoe");
        assert_eq!(claims.email, "jdoe@example.org");
        assert_eq!(claims.email_verified.as_deref(), Some("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn test_submitted_username_fills_gap() {
        let payload = LoginPayload { id: Some("42".to_string()), ..Default::default() };
        let claims = Claims::from_login(&payload, "jdoe");
        assert_eq!(claims.username, "jdoe");
    }

    #[test]
    fn test_unset_fields_default_to_empty_string() {
        let claims = Claims::from_login(&LoginPayload::default(), "jdoe");
        assert_eq!(claims.id, "");
        assert_eq!(claims.email, "");
        assert_eq!(claims.name, "");
        assert_eq!(claims.image, "");
        assert_eq!(claims.email_verified, None);
    }

    #[test]
    fn test_payload_emptiness() {
        assert!(LoginPayload::default().is_empty());
        let payload = LoginPayload { id: Some("1".to_string()), ..Default::default() };
        assert!(!payload.is_empty());
    }
}
