use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;
use std::time::Duration;

use crate::domain::signin::errors::AuthError;
use crate::domain::signin::ports::Authenticator;
use crate::domain::signin::value_objects::Credentials;
use crate::infrastructure::config::AuthApiConfig;

/// Auth provider adapter backed by the product's session API.
///
/// Posts credentials as JSON to `{base_url}/sessions`; any non-success
/// response or transport failure becomes an `AuthError`.
pub struct HttpAuthenticator {
  client: reqwest::Client,
  sessions_url: String,
}

impl HttpAuthenticator {
  /// Creates an authenticator for the configured auth API
  pub fn new(config: &AuthApiConfig) -> Result<Self, reqwest::Error> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(config.request_timeout_seconds))
      .build()?;

    Ok(Self {
      client,
      sessions_url: format!("{}/sessions", config.base_url.trim_end_matches('/')),
    })
  }
}

#[async_trait]
impl Authenticator for HttpAuthenticator {
  async fn sign_in(&self, credentials: &Credentials) -> Result<(), AuthError> {
    let response = self
      .client
      .post(&self.sessions_url)
      .json(&json!({
        "email": credentials.email,
        "password": credentials.password,
      }))
      .send()
      .await
      .map_err(|e| {
        tracing::warn!("auth API request failed: {}", e);
        AuthError::Transport(e.to_string())
      })?;

    let status = response.status();

    if status.is_success() {
      Ok(())
    } else if status == StatusCode::UNAUTHORIZED
      || status == StatusCode::BAD_REQUEST
      || status == StatusCode::FORBIDDEN
    {
      Err(AuthError::InvalidCredentials)
    } else {
      tracing::warn!("auth API returned unexpected status {}", status);
      Err(AuthError::Provider(format!("unexpected status {}", status)))
    }
  }
}
