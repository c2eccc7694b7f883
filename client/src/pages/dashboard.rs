//! Dashboard page hosting the ad generator.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated route. It owns the `GenerationState` for the
//! lifetime of the view and runs one generation request at a time.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::ad_result_card::AdResultCard;
use crate::components::sidebar::Sidebar;
use crate::components::toaster::notify;
use crate::state::auth::AuthState;
use crate::state::generation::{BeginError, GenerationState};
use crate::state::notices::NoticeState;
use crate::util::auth::install_unauth_redirect;

const PRODUCT_PLACEHOLDER: &str = "Ex: iPhone 15 Pro Max 256GB Azul";

/// Dashboard page: sidebar + generator card + result card.
/// Redirects to `/auth` if there is no session.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    install_unauth_redirect(auth, use_navigate());

    let generation = RwSignal::new(GenerationState::default());

    let on_generate = move |_| {
        let mut started = Err(BeginError::InFlight);
        generation.update(|g| started = g.begin());
        let product_name = match started {
            Ok(name) => name,
            Err(rejected) => {
                if let Some(notice) = rejected.notice() {
                    notify(notices, notice);
                }
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::generate_ad(&product_name).await;
            if let Err(e) = &outcome {
                log::error!("ad generation failed: {e}");
            }
            let mut notice = None;
            generation.try_update(|g| notice = Some(g.finish(outcome)));
            if let Some(notice) = notice {
                notify(notices, notice);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = product_name;
    };

    let is_generating = move || generation.with(GenerationState::is_generating);

    view! {
        <Show
            when=move || auth.with(AuthState::is_signed_in)
            fallback=move || {
                view! {
                    <div class="dashboard">
                        <p>{move || if auth.get().loading { "Carregando..." } else { "Redirecionando..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard">
                <Sidebar/>
                <main class="dashboard__main">
                    <div class="dashboard__content">
                        <div class="dashboard__intro">
                            <h1>"Gerador de Anúncios Mágico"</h1>
                            <p class="muted">
                                "Cole o nome do produto e deixe a IA criar um anúncio irresistível"
                            </p>
                        </div>

                        <section class="card generator">
                            <label for="product" class="generator__label">"Nome do Produto"</label>
                            <textarea
                                id="product"
                                class="generator__input"
                                placeholder=PRODUCT_PLACEHOLDER
                                prop:value=move || generation.with(|g| g.product_name.clone())
                                on:input=move |ev| generation.update(|g| g.product_name = event_target_value(&ev))
                                disabled=is_generating
                            ></textarea>
                            <button
                                class="btn btn--primary btn--large generator__trigger"
                                class:generator__trigger--busy=is_generating
                                disabled=is_generating
                                on:click=on_generate
                            >
                                {move || generation.with(GenerationState::trigger_label)}
                            </button>
                        </section>

                        <AdResultCard generation=generation/>
                    </div>
                </main>
            </div>
        </Show>
    }
}
