//! Identity Service Client
//!
//! HTTP client for the external identity service that owns sign-in and
//! session state. This tier only ever calls two endpoints: the user
//! lookup behind [`SessionProvider`] and a health probe used at startup.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::{AuthError, SessionProvider, SessionUser};

/// Client for the identity service's REST API
pub struct IdentityClient {
    client: Client,
    config: IdentityConfig,
}

/// Configuration for the identity client
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Base URL of the identity service (e.g. "http://localhost:9999")
    pub base_url: String,
    /// Service API key, sent as the `apikey` header when present
    pub api_key: Option<String>,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9999".to_string(),
            api_key: None,
            request_timeout_ms: 5000,
        }
    }
}

/// User record returned by the identity service
#[derive(Debug, Deserialize)]
struct UserPayload {
    id: Uuid,
    email: Option<String>,
}

impl IdentityClient {
    /// Create a new client with the given configuration
    pub fn new(config: IdentityConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &IdentityConfig {
        &self.config
    }

    /// Check whether the identity service is reachable.
    ///
    /// Called once at startup; a failure is logged, not fatal, since the
    /// service may come up later.
    pub async fn health_check(&self) -> Result<(), AuthError> {
        let url = format!("{}/auth/v1/health", self.config.base_url);
        let response = self.with_api_key(self.client.get(&url)).send().await.map_err(classify)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AuthError::Unavailable)
        }
    }

    fn with_api_key(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.header("apikey", key),
            None => request,
        }
    }
}

/// Map transport failures onto the lookup error taxonomy
fn classify(error: reqwest::Error) -> AuthError {
    if error.is_timeout() {
        AuthError::Timeout
    } else if error.is_connect() {
        AuthError::Unavailable
    } else {
        AuthError::Request(error)
    }
}

#[async_trait]
impl SessionProvider for IdentityClient {
    async fn current_user(&self, token: &str) -> Result<Option<SessionUser>, AuthError> {
        let url = format!("{}/auth/v1/user", self.config.base_url);
        let request = self.with_api_key(self.client.get(&url).bearer_auth(token));
        let response = request.send().await.map_err(classify)?;

        match response.status() {
            StatusCode::OK => {
                let payload: UserPayload = response
                    .json()
                    .await
                    .map_err(|e| AuthError::MalformedPayload(e.to_string()))?;
                let email = payload.email.ok_or_else(|| {
                    AuthError::MalformedPayload("user record has no email".to_string())
                })?;
                Ok(Some(SessionUser {
                    id: payload.id,
                    email,
                }))
            }
            // An expired or unknown token is an expected outcome, not a failure
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            status => Err(AuthError::UnexpectedStatus(status.as_u16())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    const USER_ID: &str = "3f9f2b1c-8a2e-4f6a-9d6b-2b5c1d0e7a42";

    fn client_for(server: &MockServer) -> IdentityClient {
        IdentityClient::new(IdentityConfig {
            base_url: server.base_url(),
            api_key: Some("svc-key".to_string()),
            request_timeout_ms: 2000,
        })
    }

    #[tokio::test]
    async fn test_resolves_user_for_valid_token() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/auth/v1/user")
                .header("authorization", "Bearer tok-1")
                .header("apikey", "svc-key");
            then.status(200).json_body(json!({
                "id": USER_ID,
                "email": "kim@gilnokie.co.za",
                "role": "authenticated"
            }));
        });

        let client = client_for(&server);
        let user = client.current_user("tok-1").await.unwrap().unwrap();

        mock.assert();
        assert_eq!(user.id.to_string(), USER_ID);
        assert_eq!(user.email, "kim@gilnokie.co.za");
    }

    #[tokio::test]
    async fn test_rejected_token_is_none() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/auth/v1/user");
            then.status(401).json_body(json!({"message": "invalid token"}));
        });

        let client = client_for(&server);
        let user = client.current_user("expired").await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_unexpected_status_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/auth/v1/user");
            then.status(500);
        });

        let client = client_for(&server);
        let err = client.current_user("tok-1").await.unwrap_err();
        assert!(matches!(err, AuthError::UnexpectedStatus(500)));
    }

    #[tokio::test]
    async fn test_malformed_payload_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/auth/v1/user");
            then.status(200).json_body(json!({"id": USER_ID}));
        });

        let client = client_for(&server);
        let err = client.current_user("tok-1").await.unwrap_err();
        assert!(matches!(err, AuthError::MalformedPayload(_)));
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/auth/v1/health");
            then.status(200).json_body(json!({"status": "ok"}));
        });

        let client = client_for(&server);
        assert!(client.health_check().await.is_ok());
        mock.assert();
    }

    #[tokio::test]
    async fn test_health_check_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/auth/v1/health");
            then.status(503);
        });

        let client = client_for(&server);
        assert!(matches!(
            client.health_check().await.unwrap_err(),
            AuthError::Unavailable
        ));
    }
}
