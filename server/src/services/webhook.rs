//! Ad-generation webhook client.
//!
//! ARCHITECTURE
//! ============
//! Generation is delegated to an external automation workflow. The server
//! posts `{"producto": <name>}` and expects `{"anuncio", "imagem"}` back.
//! The workflow can take a long time, so only the connect phase is bounded;
//! the response is awaited for as long as the workflow needs.
//!
//! A non-2xx status or a body that is not a JSON object is a failure. A JSON
//! object with missing fields is a success with those fields left empty.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_AD_WEBHOOK_URL: &str = "https://n8n.homeofficeinteligente.com.br/webhook/generar-anuncio";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Webhook configuration loaded from environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    pub url: String,
    pub connect_timeout_secs: u64,
}

impl WebhookConfig {
    /// Load from `AD_WEBHOOK_URL` and `AD_WEBHOOK_CONNECT_TIMEOUT_SECS`,
    /// falling back to the production workflow and a 10s connect timeout.
    #[must_use]
    pub fn from_env() -> Self {
        let url = std::env::var("AD_WEBHOOK_URL")
            .ok()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AD_WEBHOOK_URL.to_owned());
        let connect_timeout_secs = env_parse_u64("AD_WEBHOOK_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS);
        Self { url, connect_timeout_secs }
    }
}

pub(crate) fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Generated advertisement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdResult {
    /// Advertisement copy.
    #[serde(default)]
    pub anuncio: String,
    /// Image URL.
    #[serde(default)]
    pub imagem: String,
}

#[derive(Serialize)]
struct WebhookRequest<'a> {
    producto: &'a str,
}

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("webhook request failed: {0}")]
    Request(String),
    #[error("webhook returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("webhook response parse failed: {0}")]
    Parse(String),
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Turns a product name into an advertisement.
#[async_trait::async_trait]
pub trait AdGenerator: Send + Sync {
    async fn generate(&self, product_name: &str) -> Result<AdResult, WebhookError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

pub struct WebhookClient {
    http: reqwest::Client,
    url: String,
}

impl WebhookClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: WebhookConfig) -> Result<Self, WebhookError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| WebhookError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url: config.url })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl AdGenerator for WebhookClient {
    async fn generate(&self, product_name: &str) -> Result<AdResult, WebhookError> {
        let response = self
            .http
            .post(&self.url)
            .json(&WebhookRequest { producto: product_name })
            .send()
            .await
            .map_err(|e| WebhookError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| WebhookError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(WebhookError::Status { status: status.as_u16(), body: text });
        }

        parse_response(&text)
    }
}

pub(crate) fn parse_response(json: &str) -> Result<AdResult, WebhookError> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(|e| WebhookError::Parse(e.to_string()))?;
    if !value.is_object() {
        return Err(WebhookError::Parse("expected a JSON object".into()));
    }
    serde_json::from_value(value).map_err(|e| WebhookError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "webhook_test.rs"]
mod tests;
