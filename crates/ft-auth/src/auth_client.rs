use crate::{AuthResult, LoginRequest, LoginResponse};

use ft_config::ApiConfig;

use std::time::Duration;

use log::debug;
use reqwest::Client as ReqwestClient;
use serde_json::Value;

/// HTTP client for the auth REST API
pub struct AuthClient {
    pub base_url: String,
    api_key: Option<String>,
    client: ReqwestClient,
}

impl AuthClient {
    /// Create a new client from API configuration.
    ///
    /// The request deadline is fixed at `timeout_secs`; there is no retry
    /// or backoff on top of it.
    pub fn new(config: &ApiConfig) -> AuthResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    /// Exchange credentials for an access token and user record.
    ///
    /// Sends `{email, password}` as JSON to POST /auth/login. Non-2xx
    /// responses become an API error carrying the server's message when the
    /// body has one.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<LoginResponse> {
        let url = format!("{}/auth/login", self.base_url);
        debug!("POST {url}");

        let body = LoginRequest { email, password };
        let mut req = self.client.post(&url).json(&body);

        if let Some(ref api_key) = self.api_key {
            req = req.header("X-Api-Key", api_key);
        }

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| extract_error_message(&body))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("login request failed")
                        .to_string()
                });
            debug!("login failed with status {status}: {message}");
            return Err(crate::AuthError::api(status.as_u16(), message));
        }

        let login = response.json::<LoginResponse>().await?;
        debug!("login succeeded for user {}", login.user.id);

        Ok(login)
    }
}

/// Pull the human-readable message out of an error body, if present.
fn extract_error_message(body: &Value) -> Option<String> {
    body.get("error")
        .and_then(|error| error.get("message"))
        .or_else(|| body.get("message"))
        .and_then(|message| message.as_str())
        .map(String::from)
}
