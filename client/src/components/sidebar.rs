//! Dashboard sidebar: brand, tool navigation, external links, sign-out.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::auth_events::{AuthEvent, AuthEvents};

/// External CRM link. Override at build time with `HOAI_CRM_URL`.
pub const CRM_URL: &str = match option_env!("HOAI_CRM_URL") {
    Some(url) => url,
    None => "https://crm.example.com",
};

/// External WhatsApp connection link. Override with `HOAI_WHATSAPP_URL`.
pub const WHATSAPP_URL: &str = match option_env!("HOAI_WHATSAPP_URL") {
    Some(url) => url,
    None => "https://whatsapp.example.com",
};

/// Route left for after sign-out.
pub const SIGNED_OUT_ROUTE: &str = "/";

/// Client-side half of sign-out, run once the server has cleared the cookies.
///
/// Navigation happens before the session is cleared so the dashboard's
/// unauthenticated redirect never fires on the way out.
pub fn finish_sign_out<F>(auth: RwSignal<AuthState>, events: &AuthEvents, navigate: F)
where
    F: Fn(&str, NavigateOptions),
{
    navigate(SIGNED_OUT_ROUTE, NavigateOptions::default());
    auth.try_update(|a| a.session = None);
    events.emit(&AuthEvent::SignedOut);
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let events = expect_context::<AuthEvents>();
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let events = events.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::net::api::sign_out().await;
                finish_sign_out(auth, &events, navigate);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&events, &navigate);
    };

    let email = move || auth.with(|a| a.email().map(str::to_owned).unwrap_or_default());

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__logo" aria-hidden="true">"✦"</span>
                <span class="sidebar__name">"Home Office AI"</span>
            </div>
            <nav class="sidebar__nav">
                <button class="sidebar__item sidebar__item--active">"Gerador de Anúncios"</button>
                <a class="sidebar__item" href=CRM_URL target="_blank" rel="noopener noreferrer">
                    "Meu CRM"
                    <span class="sidebar__external" aria-hidden="true">"↗"</span>
                </a>
                <a class="sidebar__item" href=WHATSAPP_URL target="_blank" rel="noopener noreferrer">
                    "Conexão WhatsApp"
                    <span class="sidebar__external" aria-hidden="true">"↗"</span>
                </a>
            </nav>
            <div class="sidebar__footer">
                <p class="sidebar__user">{email}</p>
                <button class="sidebar__item sidebar__signout" on:click=on_sign_out>
                    "Sair"
                </button>
            </div>
        </aside>
    }
}
