//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Route of the credential screen.
pub const AUTH_ROUTE: &str = "/auth";
/// Route of the authenticated dashboard.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// True once the session lookup has finished without finding a session.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.session.is_none()
}

/// Redirect to the auth view whenever auth has loaded and no session exists,
/// as long as the user is still on the route that installed the guard.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let pathname = leptos_router::hooks::use_location().pathname;
    let guarded = pathname.get_untracked();
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) && pathname.get_untracked() == guarded {
            navigate(AUTH_ROUTE, NavigateOptions::default());
        }
    });
}
