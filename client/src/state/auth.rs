//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the dashboard chrome to coordinate redirects and
//! identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Session;

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    /// State before the initial session lookup has answered.
    #[must_use]
    pub fn pending() -> Self {
        Self { session: None, loading: true }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Email of the signed-in user, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|s| s.user.email.as_deref())
    }
}
