//! Toast stack for transient notices.

use leptos::prelude::*;

use crate::state::notices::{Notice, NoticeState};

/// How long a notice stays on screen.
#[cfg(feature = "hydrate")]
const NOTICE_TTL_MS: u64 = 5_000;

/// Show `notice` and schedule its dismissal.
pub fn notify(notices: RwSignal<NoticeState>, notice: Notice) {
    let mut id = 0;
    notices.update(|n| id = n.push(notice));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(NOTICE_TTL_MS)).await;
        notices.try_update(|n| n.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Renders every active notice in the corner of the viewport.
#[component]
pub fn Toaster() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|(id, _)| *id
                children=move |(id, notice)| {
                    let class = if notice.is_destructive() { "toast toast--destructive" } else { "toast" };
                    view! {
                        <div class=class>
                            <div class="toast__body">
                                <p class="toast__title">{notice.title}</p>
                                <p class="toast__description">{notice.description}</p>
                            </div>
                            <button
                                class="toast__close"
                                title="Fechar"
                                on:click=move |_| notices.update(|n| n.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
