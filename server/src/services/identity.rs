//! Hosted identity-provider client (GoTrue-compatible `/auth/v1` API).
//!
//! ARCHITECTURE
//! ============
//! The provider owns users, passwords and tokens. This module only forwards
//! credentials, asks who a token belongs to, and relays the provider's
//! answer. Error bodies are turned into a human-readable message without
//! interpreting them.
//!
//! Handlers depend on the `IdentityProvider` trait so tests can swap in a
//! mock; `HostedIdentity` is the HTTP implementation.

use std::time::Duration;

use reqwest::{Method, Url};
use serde::Deserialize;

pub const API_KEY_HEADER: &str = "apikey";
const CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_EXPIRES_IN_SECS: i64 = 3600;

/// Identity-provider configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Provider base URL, e.g. `https://xyz.supabase.co`.
    pub base_url: String,
    /// Public (anon) API key sent as the `apikey` header.
    pub anon_key: String,
    /// Public URL of this site; sign-up confirmation links land on its dashboard.
    pub site_url: Option<String>,
}

impl IdentityConfig {
    /// Load from `IDENTITY_URL`, `IDENTITY_ANON_KEY` and optional `IDENTITY_SITE_URL`.
    /// Returns `None` if either required var is missing (auth will be disabled).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("IDENTITY_URL").ok()?;
        let anon_key = std::env::var("IDENTITY_ANON_KEY").ok()?;
        let site_url = std::env::var("IDENTITY_SITE_URL").ok();
        Some(Self { base_url, anon_key, site_url })
    }

    /// Build `{base_url}/auth/v1{path}` with query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidUrl`] if the base URL does not parse.
    pub fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, IdentityError> {
        let raw = format!("{}/auth/v1{path}", self.base_url.trim_end_matches('/'));
        let mut url = Url::parse(&raw).map_err(|e| IdentityError::InvalidUrl(format!("{raw}: {e}")))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter().copied());
        }
        Ok(url)
    }

    /// Where the provider should send users after confirming their email.
    #[must_use]
    pub fn confirmation_redirect(&self) -> Option<String> {
        self.site_url
            .as_deref()
            .map(|site| format!("{}/dashboard", site.trim_end_matches('/')))
    }
}

/// User record as returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct ProviderUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Tokens for an established session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSession {
    pub access_token: String,
    pub refresh_token: String,
    /// Lifetime of the access token in seconds.
    pub expires_in: i64,
    /// Unix timestamp (seconds) at which the access token expires.
    pub expires_at: i64,
    pub user: ProviderUser,
}

/// Result of a sign-up call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpResult {
    /// The provider auto-confirmed the account and signed the user in.
    Session(ProviderSession),
    /// The provider sent a confirmation email; no session yet.
    ConfirmationRequired(ProviderUser),
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The provider answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("identity request failed: {0}")]
    Request(String),
    #[error("identity response parse failed: {0}")]
    Parse(String),
    #[error("invalid identity url: {0}")]
    InvalidUrl(String),
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Operations consumed from the identity provider.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Exchange email + password for a session.
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<ProviderSession, IdentityError>;

    /// Register a new account.
    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpResult, IdentityError>;

    /// Exchange a refresh token for a new session.
    async fn refresh(&self, refresh_token: &str) -> Result<ProviderSession, IdentityError>;

    /// Resolve an access token to its user. `Ok(None)` means the token is no
    /// longer valid.
    async fn get_user(&self, access_token: &str) -> Result<Option<ProviderUser>, IdentityError>;

    /// Revoke the session behind `access_token`.
    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

pub struct HostedIdentity {
    http: reqwest::Client,
    config: IdentityConfig,
}

impl HostedIdentity {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: IdentityConfig) -> Result<Self, IdentityError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| IdentityError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn call(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        bearer: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Result<(u16, String), IdentityError> {
        let url = self.config.endpoint(path, query)?;
        let mut request = self
            .http
            .request(method, url)
            .header(API_KEY_HEADER, &self.config.anon_key);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;
        Ok((status, text))
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[async_trait::async_trait]
impl IdentityProvider for HostedIdentity {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<ProviderSession, IdentityError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let (status, text) = self
            .call(Method::POST, "/token", &[("grant_type", "password")], None, Some(body))
            .await?;
        if !is_success(status) {
            return Err(rejected(status, &text));
        }
        parse_session(&text)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpResult, IdentityError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let redirect = self.config.confirmation_redirect();
        let query: Vec<(&str, &str)> = redirect
            .as_deref()
            .map(|r| vec![("redirect_to", r)])
            .unwrap_or_default();
        let (status, text) = self
            .call(Method::POST, "/signup", &query, None, Some(body))
            .await?;
        if !is_success(status) {
            return Err(rejected(status, &text));
        }
        parse_sign_up(&text)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<ProviderSession, IdentityError> {
        let body = serde_json::json!({ "refresh_token": refresh_token });
        let (status, text) = self
            .call(Method::POST, "/token", &[("grant_type", "refresh_token")], None, Some(body))
            .await?;
        if !is_success(status) {
            return Err(rejected(status, &text));
        }
        parse_session(&text)
    }

    async fn get_user(&self, access_token: &str) -> Result<Option<ProviderUser>, IdentityError> {
        let (status, text) = self
            .call(Method::GET, "/user", &[], Some(access_token), None)
            .await?;
        match status {
            401 | 403 => Ok(None),
            s if is_success(s) => serde_json::from_str::<ProviderUser>(&text)
                .map(Some)
                .map_err(|e| IdentityError::Parse(e.to_string())),
            s => Err(rejected(s, &text)),
        }
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError> {
        let (status, text) = self
            .call(Method::POST, "/logout", &[], Some(access_token), None)
            .await?;
        // An already-invalid token has nothing left to revoke.
        if is_success(status) || status == 401 || status == 403 {
            return Ok(());
        }
        Err(rejected(status, &text))
    }
}

// =============================================================================
// PARSING
// =============================================================================

#[derive(Deserialize)]
struct SessionBody {
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: ProviderUser,
}

fn now_unix() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}

pub(crate) fn parse_session(json: &str) -> Result<ProviderSession, IdentityError> {
    let body: SessionBody = serde_json::from_str(json).map_err(|e| IdentityError::Parse(e.to_string()))?;
    let expires_in = body.expires_in.unwrap_or(DEFAULT_EXPIRES_IN_SECS);
    let expires_at = body.expires_at.unwrap_or_else(|| now_unix() + expires_in);
    Ok(ProviderSession {
        access_token: body.access_token,
        refresh_token: body.refresh_token,
        expires_in,
        expires_at,
        user: body.user,
    })
}

/// A sign-up answer is a full session when the account is auto-confirmed,
/// otherwise the bare user (top-level or under `user`).
pub(crate) fn parse_sign_up(json: &str) -> Result<SignUpResult, IdentityError> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(|e| IdentityError::Parse(e.to_string()))?;
    if value.get("access_token").is_some() {
        return parse_session(json).map(SignUpResult::Session);
    }
    let user_value = value.get("user").cloned().unwrap_or(value);
    let user: ProviderUser = serde_json::from_value(user_value).map_err(|e| IdentityError::Parse(e.to_string()))?;
    Ok(SignUpResult::ConfirmationRequired(user))
}

/// Best human-readable message from a provider error body.
pub(crate) fn provider_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            ["error_description", "msg", "message", "error"]
                .iter()
                .find_map(|key| v.get(*key).and_then(|m| m.as_str()).map(str::to_owned))
        })
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("identity provider returned {status}"))
}

fn rejected(status: u16, body: &str) -> IdentityError {
    IdentityError::Rejected { status, message: provider_message(status, body) }
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;
