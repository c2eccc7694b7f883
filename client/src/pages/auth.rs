//! Auth page: session gate plus the credential form.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the page asks the server whether a session already exists and,
//! for as long as it is mounted, listens for `SignedIn` on the `AuthEvents`
//! bus. Either path leads to the dashboard. The subscription is released in
//! `on_cleanup`, so navigating away never leaves a dangling listener.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_form::AuthForm;
use crate::net::types::Session;
use crate::state::auth_events::{AuthEvents, should_enter_dashboard};
use crate::util::auth::DASHBOARD_ROUTE;

/// Subscribe `on_enter` to `SignedIn` events until the current reactive
/// owner is cleaned up.
///
/// Returns the callback for the initial session lookup: it calls `on_enter`
/// when a session already exists.
pub fn install_session_gate<F>(events: &AuthEvents, on_enter: F) -> impl Fn(Option<&Session>) + Clone + 'static
where
    F: Fn() + Send + Sync + 'static,
{
    let on_enter = Arc::new(on_enter);
    let on_event = Arc::clone(&on_enter);
    let subscription = events.subscribe(move |event| {
        if should_enter_dashboard(event) {
            on_event();
        }
    });
    on_cleanup(move || drop(subscription));

    move |existing: Option<&Session>| {
        if existing.is_some() {
            on_enter();
        }
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let events = expect_context::<AuthEvents>();
    let navigate = use_navigate();
    let enter_dashboard = RwSignal::new(false);

    let report_existing = install_session_gate(&events, move || {
        enter_dashboard.try_set(true);
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let session = crate::net::api::fetch_session().await;
        report_existing(session.as_ref());
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = report_existing;

    Effect::new(move || {
        if enter_dashboard.get() {
            navigate(DASHBOARD_ROUTE, NavigateOptions::default());
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-page__panel">
                <div class="auth-page__heading">
                    <div class="brand brand--centered">
                        <span class="brand__logo" aria-hidden="true">"⚡"</span>
                        <span class="brand__name">"Home Office AI"</span>
                    </div>
                    <p class="auth-page__subtitle">"Entre ou crie sua conta"</p>
                </div>
                <div class="card auth-page__card">
                    <AuthForm/>
                </div>
            </div>
        </div>
    }
}
