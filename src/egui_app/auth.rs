/**
 * Authentication Module
 *
 * HTTP client for the remote login endpoint. One POST per attempt, no
 * retry and no token refresh; the token itself is never persisted.
 */

use reqwest::Client;
use serde::Serialize;

use crate::egui_app::config::Config;
use crate::shared::AuthError;

/// Login request body
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Result of a login attempt that reached the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Response carried a non-empty token
    Authenticated { token: String },
    /// 2xx response without a usable token
    Rejected,
}

impl LoginOutcome {
    /// Interpret a 2xx body. Anything without a non-empty string `token`,
    /// including bodies that are not JSON at all, is a rejection.
    pub fn from_body(body: &str) -> Self {
        let token = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("token")?.as_str().map(str::to_string));
        match token {
            Some(token) if !token.is_empty() => LoginOutcome::Authenticated { token },
            _ => LoginOutcome::Rejected,
        }
    }
}

/// Client for the remote demo login endpoint
#[derive(Debug, Clone)]
pub struct RemoteAuthenticator {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl RemoteAuthenticator {
    pub fn new(config: &Config) -> Result<Self, AuthError> {
        let client = Client::builder().timeout(config.http_timeout()).build()?;
        Ok(Self {
            client,
            url: config.auth_url().to_string(),
            api_key: config.api_key().map(str::to_string),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send the credentials as given; the server does all validation
    pub async fn login(&self, email: String, password: String) -> Result<LoginOutcome, AuthError> {
        let request = LoginRequest { email, password };

        let mut builder = self.client.post(&self.url).json(&request);
        if let Some(ref key) = self.api_key {
            builder = builder.header("x-api-key", key);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Login request rejected by server");
            return Err(AuthError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let outcome = LoginOutcome::from_body(&body);
        tracing::info!(
            authenticated = matches!(outcome, LoginOutcome::Authenticated { .. }),
            "Login response received"
        );
        Ok(outcome)
    }
}
