//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the JSON bodies of the server's `/api` routes. The
//! server keeps its own copies; serde names are the contract.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Identity of the signed-in user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Provider-assigned user identifier.
    pub id: String,
    /// Sign-in email, when the provider exposes one.
    #[serde(default)]
    pub email: Option<String>,
}

/// A live session. Only presence matters to the UI; the tokens themselves
/// never leave the server's HttpOnly cookies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    /// Unix timestamp (seconds) at which the access token expires.
    #[serde(default)]
    pub expires_at: Option<i64>,
}

/// Generated advertisement returned by the ad webhook.
///
/// Both fields default to empty when absent: a `200` with a partial body is
/// rendered as-is rather than treated as a failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdResult {
    /// Advertisement copy.
    #[serde(default)]
    pub anuncio: String,
    /// URL of the generated image.
    #[serde(default)]
    pub imagem: String,
}

/// Body of `POST /api/ads/generate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateAdRequest {
    pub product_name: String,
}

/// Email + password pair submitted by the credential form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of a successful `POST /api/auth/sign-up`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpOutcome {
    /// Present when the provider signed the new user in immediately.
    #[serde(default)]
    pub session: Option<Session>,
    /// `true` when the provider is waiting for an email confirmation.
    #[serde(default)]
    pub confirmation_required: bool,
}

/// Error body returned by every `/api` route on failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}
