//! Auth routes — email/password sign-in, sign-up, session lookup, sign-out.
//!
//! The identity provider issues the tokens; this module only moves them
//! between the provider and two HttpOnly cookies so the browser never holds
//! them in script-readable storage.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

use super::api_error;
use crate::services::identity::{IdentityError, IdentityProvider, ProviderSession, ProviderUser, SignUpResult};
use crate::state::AppState;

pub(crate) const ACCESS_COOKIE: &str = "hoai_access_token";
pub(crate) const REFRESH_COOKIE: &str = "hoai_refresh_token";
const REFRESH_COOKIE_MAX_AGE_DAYS: i64 = 30;
const NOT_CONFIGURED: &str = "identity provider not configured";
const MISSING_FIELDS: &str = "email and password are required";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("IDENTITY_SITE_URL")
        .map(|uri| uri.starts_with("https://"))
        .unwrap_or(false)
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct CredentialsBody {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: String,
    pub email: Option<String>,
}

/// Script-visible part of a session: who is signed in and until when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub user: UserView,
    pub expires_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpView {
    pub session: Option<SessionView>,
    pub confirmation_required: bool,
}

impl From<ProviderUser> for UserView {
    fn from(user: ProviderUser) -> Self {
        Self { id: user.id, email: user.email }
    }
}

impl From<&ProviderSession> for SessionView {
    fn from(session: &ProviderSession) -> Self {
        Self { user: session.user.clone().into(), expires_at: Some(session.expires_at) }
    }
}

// =============================================================================
// COOKIES
// =============================================================================

fn token_cookie(name: &'static str, value: String, max_age: Duration, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(max_age)
        .build()
}

/// Store both provider tokens. The access cookie expires with the token so
/// a stale one is simply absent and the refresh path takes over.
pub(crate) fn set_session_cookies(jar: CookieJar, session: &ProviderSession, secure: bool) -> CookieJar {
    jar.add(token_cookie(
        ACCESS_COOKIE,
        session.access_token.clone(),
        Duration::seconds(session.expires_in.max(0)),
        secure,
    ))
    .add(token_cookie(
        REFRESH_COOKIE,
        session.refresh_token.clone(),
        Duration::days(REFRESH_COOKIE_MAX_AGE_DAYS),
        secure,
    ))
}

pub(crate) fn clear_session_cookies(jar: CookieJar, secure: bool) -> CookieJar {
    jar.add(token_cookie(ACCESS_COOKIE, String::new(), Duration::ZERO, secure))
        .add(token_cookie(REFRESH_COOKIE, String::new(), Duration::ZERO, secure))
}

fn cookie_value<'a>(jar: &'a CookieJar, name: &str) -> Option<&'a str> {
    jar.get(name).map(Cookie::value).filter(|v| !v.is_empty())
}

/// Map an identity-provider failure to the status returned to the browser.
/// Provider 4xx answers pass through; anything upstream of that is a 502.
pub(crate) fn identity_error_to_status(error: &IdentityError) -> StatusCode {
    match error {
        IdentityError::Rejected { status, .. } if (400..500).contains(status) => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_REQUEST)
        }
        IdentityError::Rejected { .. } | IdentityError::Request(_) | IdentityError::Parse(_) => StatusCode::BAD_GATEWAY,
        IdentityError::InvalidUrl(_) | IdentityError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Rejections carry the provider's own message; other failures stay generic.
fn identity_error_response(error: &IdentityError) -> Response {
    let status = identity_error_to_status(error);
    match error {
        IdentityError::Rejected { message, .. } => api_error(status, message),
        _ => api_error(status, "identity provider unavailable"),
    }
}

// =============================================================================
// SESSION LOOKUP
// =============================================================================

/// What the cookie pair on a request amounts to.
pub(crate) enum SessionLookup {
    /// The access token is still valid.
    Active(ProviderUser),
    /// The access token was missing or stale and the refresh token produced
    /// a new session; its cookies must be written back.
    Refreshed(ProviderSession),
    /// No usable cookies at all.
    Missing,
    /// The provider rejected the refresh token; the cookies should be cleared.
    Expired,
}

/// Resolve the request's cookies to a session, falling back to the refresh
/// cookie when the access token is gone or rejected.
pub(crate) async fn lookup_session(
    identity: &dyn IdentityProvider,
    jar: &CookieJar,
) -> Result<SessionLookup, IdentityError> {
    if let Some(token) = cookie_value(jar, ACCESS_COOKIE) {
        if let Some(user) = identity.get_user(token).await? {
            return Ok(SessionLookup::Active(user));
        }
    }

    let Some(refresh_token) = cookie_value(jar, REFRESH_COOKIE) else {
        return Ok(SessionLookup::Missing);
    };

    match identity.refresh(refresh_token).await {
        Ok(refreshed) => {
            tracing::info!(user_id = %refreshed.user.id, "session refreshed");
            Ok(SessionLookup::Refreshed(refreshed))
        }
        Err(IdentityError::Rejected { status, .. }) => {
            tracing::info!(status, "refresh token rejected; clearing session");
            Ok(SessionLookup::Expired)
        }
        Err(e) => Err(e),
    }
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user resolved from the session cookies.
/// Use as a handler parameter to require authentication.
///
/// When the user was resolved through the refresh cookie, the handler must
/// send `cookie_updates()` with its response so the browser keeps the
/// rotated tokens.
pub struct AuthUser {
    pub user: ProviderUser,
    pub refreshed: Option<ProviderSession>,
}

impl AuthUser {
    /// Cookies to attach to the response: the rotated pair after a refresh,
    /// nothing otherwise.
    #[must_use]
    pub fn cookie_updates(&self) -> CookieJar {
        match &self.refreshed {
            Some(session) => set_session_cookies(CookieJar::new(), session, cookie_secure()),
            None => CookieJar::new(),
        }
    }
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let Some(identity) = app_state.identity else {
            return Err(api_error(StatusCode::SERVICE_UNAVAILABLE, NOT_CONFIGURED));
        };

        let jar = CookieJar::from_headers(&parts.headers);
        match lookup_session(identity.as_ref(), &jar).await {
            Ok(SessionLookup::Active(user)) => Ok(Self { user, refreshed: None }),
            Ok(SessionLookup::Refreshed(session)) => Ok(Self { user: session.user.clone(), refreshed: Some(session) }),
            Ok(SessionLookup::Missing) => Err(api_error(StatusCode::UNAUTHORIZED, "not signed in")),
            Ok(SessionLookup::Expired) => {
                let jar = clear_session_cookies(CookieJar::new(), cookie_secure());
                Err((jar, api_error(StatusCode::UNAUTHORIZED, "session expired")).into_response())
            }
            Err(e) => {
                tracing::error!(error = %e, "session lookup failed");
                Err(identity_error_response(&e))
            }
        }
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/session` — current session, refreshing it from the
/// refresh cookie when the access token is gone or no longer valid.
pub async fn session(State(state): State<AppState>, jar: CookieJar) -> Response {
    let Some(identity) = state.identity.clone() else {
        return api_error(StatusCode::SERVICE_UNAVAILABLE, NOT_CONFIGURED);
    };
    let secure = cookie_secure();

    match lookup_session(identity.as_ref(), &jar).await {
        Ok(SessionLookup::Active(user)) => Json(SessionView { user: user.into(), expires_at: None }).into_response(),
        Ok(SessionLookup::Refreshed(refreshed)) => {
            let jar = set_session_cookies(jar, &refreshed, secure);
            (jar, Json(SessionView::from(&refreshed))).into_response()
        }
        Ok(SessionLookup::Missing) => api_error(StatusCode::UNAUTHORIZED, "no session"),
        Ok(SessionLookup::Expired) => {
            let jar = clear_session_cookies(jar, secure);
            (jar, api_error(StatusCode::UNAUTHORIZED, "session expired")).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "session lookup failed");
            identity_error_response(&e)
        }
    }
}

/// `POST /api/auth/sign-in` — exchange credentials for a session cookie pair.
pub async fn sign_in(State(state): State<AppState>, jar: CookieJar, Json(body): Json<CredentialsBody>) -> Response {
    let Some(identity) = state.identity.clone() else {
        return api_error(StatusCode::SERVICE_UNAVAILABLE, NOT_CONFIGURED);
    };
    if body.email.trim().is_empty() || body.password.is_empty() {
        return api_error(StatusCode::BAD_REQUEST, MISSING_FIELDS);
    }

    match identity.sign_in_with_password(body.email.trim(), &body.password).await {
        Ok(session) => {
            tracing::info!(user_id = %session.user.id, "signed in");
            let jar = set_session_cookies(jar, &session, cookie_secure());
            (jar, Json(SessionView::from(&session))).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "sign-in failed");
            identity_error_response(&e)
        }
    }
}

/// `POST /api/auth/sign-up` — register; signs in immediately when the
/// provider auto-confirms, otherwise reports that a confirmation email is due.
pub async fn sign_up(State(state): State<AppState>, jar: CookieJar, Json(body): Json<CredentialsBody>) -> Response {
    let Some(identity) = state.identity.clone() else {
        return api_error(StatusCode::SERVICE_UNAVAILABLE, NOT_CONFIGURED);
    };
    if body.email.trim().is_empty() || body.password.is_empty() {
        return api_error(StatusCode::BAD_REQUEST, MISSING_FIELDS);
    }

    match identity.sign_up(body.email.trim(), &body.password).await {
        Ok(SignUpResult::Session(session)) => {
            tracing::info!(user_id = %session.user.id, "signed up and signed in");
            let jar = set_session_cookies(jar, &session, cookie_secure());
            let view = SignUpView { session: Some(SessionView::from(&session)), confirmation_required: false };
            (jar, Json(view)).into_response()
        }
        Ok(SignUpResult::ConfirmationRequired(user)) => {
            tracing::info!(user_id = %user.id, "signed up; awaiting email confirmation");
            Json(SignUpView { session: None, confirmation_required: true }).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "sign-up failed");
            identity_error_response(&e)
        }
    }
}

/// `POST /api/auth/sign-out` — revoke at the provider (best effort) and
/// clear both cookies. Always succeeds from the browser's point of view.
pub async fn sign_out(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let (Some(identity), Some(token)) = (state.identity.clone(), cookie_value(&jar, ACCESS_COOKIE)) {
        if let Err(e) = identity.sign_out(token).await {
            tracing::warn!(error = %e, "provider sign-out failed; clearing cookies anyway");
        }
    }

    let jar = clear_session_cookies(jar, cookie_secure());
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
