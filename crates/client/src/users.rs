// crates/client/src/users.rs
//! Bearer-authenticated user CRUD against `/api/users`.

use cluster_view_core::UserAccount;

use crate::error::{status_error, ClientError};
use crate::BackendClient;

const ENDPOINT: &str = "/api/users";

impl BackendClient {
    pub async fn list_users(&self, bearer: &str) -> Result<Vec<UserAccount>, ClientError> {
        let response = self
            .http()
            .get(self.url(ENDPOINT))
            .bearer_auth(bearer)
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

    pub async fn create_user(&self, bearer: &str, user: &UserAccount) -> Result<(), ClientError> {
        let response = self
            .http()
            .post(self.url(ENDPOINT))
            .bearer_auth(bearer)
            .json(user)
            .send()
            .await
            .map_err(|source| ClientError::Network { endpoint: ENDPOINT, source })?;

        if !response.status().is_success() {
            return Err(status_error(ENDPOINT, response).await);
        }
        Ok(())
    }

    pub async fn update_user(
        &self,
        bearer: &str,
        username: &str,
        user: &UserAccount,
    ) -> Result<(), ClientError> {
        let response = self
            .http()
            .put(self.url(&format!("{ENDPOINT}/{username}")))
            .bearer_auth(bearer)
            .json(user)
            .send()
            .await
            .map_err(|source| ClientError::Network { endpoint: ENDPOINT, source })?;

        if !response.status().is_success() {
            return Err(status_error(ENDPOINT, response).await);
        }
        Ok(())
    }

    pub async fn delete_user(&self, bearer: &str, username: &str) -> Result<(), ClientError> {
        let response = self
            .http()
            .delete(self.url(&format!("{ENDPOINT}/{username}")))
            .bearer_auth(bearer)
            .send()
            .await
            .map_err(|source| ClientError::Network { endpoint: ENDPOINT, source })?;

        if !response.status().is_success() {
            return Err(status_error(ENDPOINT, response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cluster_view_core::Role;
    use wiremock::matchers::{body_json_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_users_decodes_accounts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .and(header("authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "username": "jdoe", "name": "Jane", "lastname": "Doe", "status": "STAFF", "is_active": true },
                { "username": "old", "name": "Old", "lastname": "Row", "status": "ADMIN" }
            ])))
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        let users = client.list_users("tok-1").await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].status, Role::Staff);
        // Legacy row decodes and pre-is_active rows default to active.
        assert_eq!(users[1].status, Role::Admin);
        assert!(users[1].is_active);
    }

    #[tokio::test]
    async fn test_create_user_posts_payload() {
        let user = UserAccount {
            username: "jdoe".to_string(),
            name: "Jane".to_string(),
            lastname: "Doe".to_string(),
            status: Role::User,
            is_active: true,
            password: Some("s3cret".to_string()),
        };
        let expected = serde_json::to_string(&user).unwrap();

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/users"))
            .and(body_json_string(expected))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "ok": true })))
            .expect(1)
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        client.create_user("tok-1", &user).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_user_targets_username_path() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/users/jdoe"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })))
            .expect(1)
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        let user = UserAccount { username: "jdoe".to_string(), ..Default::default() };
        client.update_user("tok-1", "jdoe", &user).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_user_conflict_surfaces_error() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/users/jdoe"))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_json(serde_json::json!({ "error": "user has open cases" })),
            )
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        let err = client.delete_user("tok-1", "jdoe").await.unwrap_err();
        assert_eq!(err.status(), Some(409));
        assert!(err.to_string().contains("user has open cases"));
    }
}
