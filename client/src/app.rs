//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::pages::{auth::AuthPage, dashboard::DashboardPage, landing::LandingPage};
use crate::state::auth::AuthState;
use crate::state::auth_events::AuthEvents;
use crate::state::notices::NoticeState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, runs the initial session lookup, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let notices = RwSignal::new(NoticeState::default());
    let events = AuthEvents::new();

    provide_context(auth);
    provide_context(notices);
    provide_context(events.clone());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let session = crate::net::api::fetch_session().await;
        auth.set(AuthState { session: session.clone(), loading: false });
        events.emit(&crate::state::auth_events::AuthEvent::InitialSession(session));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = events;

    view! {
        <Stylesheet id="leptos" href="/pkg/home-office-ai.css"/>
        <Title text="Home Office AI"/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}
