//! Public marketing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::auth::AUTH_ROUTE;

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "⚡",
        title: "IA Avançada",
        body: "Tecnologia de ponta para criar anúncios irresistíveis automaticamente",
    },
    Feature {
        icon: "◎",
        title: "Foco em Conversão",
        body: "Cada anúncio é otimizado para gerar mais vendas e engajamento",
    },
    Feature {
        icon: "↗",
        title: "Resultados Rápidos",
        body: "Comece a vender mais em minutos, sem complicação",
    },
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <header class="landing__header">
                <div class="brand">
                    <span class="brand__logo" aria-hidden="true">"⚡"</span>
                    <span class="brand__name">"Home Office AI"</span>
                </div>
                <A href=AUTH_ROUTE attr:class="btn btn--outline">"Entrar"</A>
            </header>

            <section class="landing__hero">
                <span class="landing__badge">"Powered by AI"</span>
                <h1 class="landing__headline">
                    "Automatize suas Vendas no "
                    <span class="landing__highlight">"WhatsApp"</span>
                </h1>
                <p class="landing__lead">
                    "Gere anúncios poderosos em segundos com inteligência artificial e transforme seu negócio online"
                </p>
                <A href=AUTH_ROUTE attr:class="btn btn--primary btn--large">"Começar Agora →"</A>
            </section>

            <section class="landing__features">
                {FEATURES
                    .iter()
                    .map(|f| {
                        view! {
                            <div class="card feature">
                                <div class="feature__icon" aria-hidden="true">{f.icon}</div>
                                <h3 class="feature__title">{f.title}</h3>
                                <p class="feature__body">{f.body}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
        </div>
    }
}
