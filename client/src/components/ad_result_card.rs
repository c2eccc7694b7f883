//! Card rendering the last generated advertisement.

use leptos::prelude::*;

use crate::components::toaster::notify;
use crate::state::generation::GenerationState;
use crate::state::notices::{Notice, NoticeState};
use crate::util::browser;

/// Image + copy of the current `AdResult`, with copy and open-image actions.
/// Renders nothing until a result exists.
#[component]
pub fn AdResultCard(generation: RwSignal<GenerationState>) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    let on_copy = move |_| {
        let Some(text) = generation.with(|g| g.copyable_text().map(str::to_owned)) else {
            return;
        };
        browser::copy_to_clipboard(&text);
        notify(notices, Notice::text_copied());
    };

    let on_open_image = move |_| {
        if let Some(url) = generation.with(|g| g.image_url().map(str::to_owned)) {
            browser::open_in_new_tab(&url);
        }
    };

    let image_url = move || generation.with(|g| g.image_url().map(str::to_owned));
    let ad_text = move || {
        generation.with(|g| {
            g.result
                .as_ref()
                .map(|ad| ad.anuncio.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <Show when=move || generation.with(|g| g.result.is_some())>
            <section class="card ad-result">
                <h2 class="ad-result__title">"Seu Anúncio Está Pronto!"</h2>
                <div class="ad-result__grid">
                    <div class="ad-result__column">
                        <div class="ad-result__image-frame">
                            {move || match image_url() {
                                Some(url) => {
                                    view! { <img class="ad-result__image" src=url alt="Anúncio gerado"/> }
                                        .into_any()
                                }
                                None => {
                                    view! { <p class="ad-result__placeholder">"Aguardando imagem..."</p> }
                                        .into_any()
                                }
                            }}
                        </div>
                        <button
                            class="btn btn--outline"
                            disabled=move || image_url().is_none()
                            on:click=on_open_image
                        >
                            "Abrir Imagem HD"
                        </button>
                    </div>
                    <div class="ad-result__column">
                        <div class="ad-result__text">
                            <p>{ad_text}</p>
                        </div>
                        <button
                            class="btn btn--outline"
                            disabled=move || generation.with(|g| g.copyable_text().is_none())
                            on:click=on_copy
                        >
                            "Copiar Texto"
                        </button>
                    </div>
                </div>
            </section>
        </Show>
    }
}
