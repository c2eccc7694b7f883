//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth and
//! generation failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AdResult, Credentials, Session, SignUpOutcome};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiError;

pub(crate) const SESSION_ENDPOINT: &str = "/api/auth/session";
pub(crate) const SIGN_IN_ENDPOINT: &str = "/api/auth/sign-in";
pub(crate) const SIGN_UP_ENDPOINT: &str = "/api/auth/sign-up";
pub(crate) const SIGN_OUT_ENDPOINT: &str = "/api/auth/sign-out";
pub(crate) const GENERATE_AD_ENDPOINT: &str = "/api/ads/generate";

/// Prefer the server's `{"error": ...}` message; fall back to the status.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(action: &str, status: u16, body: &str) -> String {
    match serde_json::from_str::<ApiError>(body) {
        Ok(err) if !err.error.trim().is_empty() => err.error,
        _ => format!("{action} failed: {status}"),
    }
}

#[cfg(feature = "hydrate")]
async fn read_failure(action: &str, resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    failure_message(action, status, &body)
}

/// Fetch the current session from `/api/auth/session`.
/// Returns `None` if there is no session or on the server.
pub async fn fetch_session() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Session>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with email + password via `POST /api/auth/sign-in`.
///
/// # Errors
///
/// Returns the provider's message (or a status fallback) when sign-in fails.
pub async fn sign_in(credentials: &Credentials) -> Result<Session, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SIGN_IN_ENDPOINT)
            .json(credentials)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(read_failure("sign in", resp).await);
        }
        resp.json::<Session>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/sign-up`.
///
/// # Errors
///
/// Returns the provider's message (or a status fallback) when sign-up fails.
pub async fn sign_up(credentials: &Credentials) -> Result<SignUpOutcome, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SIGN_UP_ENDPOINT)
            .json(credentials)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(read_failure("sign up", resp).await);
        }
        resp.json::<SignUpOutcome>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err("not available on server".to_owned())
    }
}

/// End the current session via `POST /api/auth/sign-out`.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(SIGN_OUT_ENDPOINT)
            .send()
            .await;
    }
}

/// Request an advertisement for `product_name` via `POST /api/ads/generate`.
///
/// # Errors
///
/// Returns an error string on network failure, a non-success status, or a
/// body that does not parse as an [`AdResult`].
pub async fn generate_ad(product_name: &str) -> Result<AdResult, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::GenerateAdRequest { product_name: product_name.to_owned() };
        let resp = gloo_net::http::Request::post(GENERATE_AD_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(read_failure("generate ad", resp).await);
        }
        resp.json::<AdResult>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = product_name;
        Err("not available on server".to_owned())
    }
}
