//! Email + password credential form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stands in for the identity provider's hosted widget: it collects
//! credentials, hands them to the server, and relays whatever the provider
//! answers. A returned session is published as `AuthEvent::SignedIn`; the
//! auth page decides where to go next.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use leptos::prelude::*;

use crate::net::types::{Credentials, Session, SignUpOutcome};
use crate::state::auth::AuthState;
use crate::state::auth_events::AuthEvents;

pub(crate) const MISSING_FIELDS: &str = "Informe email e senha.";
pub(crate) const CONFIRM_EMAIL: &str = "Verifique seu email para confirmar a conta.";

/// Which provider operation the form submits to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    #[must_use]
    pub fn button_label(self) -> &'static str {
        match self {
            Self::SignIn => "Entrar",
            Self::SignUp => "Criar conta",
        }
    }

    /// Link text offering the other mode.
    #[must_use]
    pub fn switch_link_text(self) -> &'static str {
        match self {
            Self::SignIn => "Não tem uma conta? Cadastre-se",
            Self::SignUp => "Já tem uma conta? Entre",
        }
    }
}

/// Outcome of a submitted form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormOutcome {
    SignedIn(Session),
    ConfirmationPending,
}

/// Trim the email and require both fields. The password is kept verbatim.
pub(crate) fn validate_credentials(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

pub(crate) fn classify_sign_up(outcome: SignUpOutcome) -> FormOutcome {
    match outcome.session {
        Some(session) => FormOutcome::SignedIn(session),
        None => FormOutcome::ConfirmationPending,
    }
}

#[component]
pub fn AuthForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let events = expect_context::<AuthEvents>();

    let mode = RwSignal::new(AuthMode::SignIn);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&email.get(), &password.get()) {
            Ok(c) => c,
            Err(msg) => {
                message.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        message.set(None);

        #[cfg(feature = "hydrate")]
        {
            let events = events.clone();
            let current = mode.get_untracked();
            leptos::task::spawn_local(async move {
                let outcome = match current {
                    AuthMode::SignIn => crate::net::api::sign_in(&credentials)
                        .await
                        .map(FormOutcome::SignedIn),
                    AuthMode::SignUp => crate::net::api::sign_up(&credentials)
                        .await
                        .map(classify_sign_up),
                };
                match outcome {
                    Ok(FormOutcome::SignedIn(session)) => {
                        auth.try_update(|a| {
                            a.session = Some(session.clone());
                            a.loading = false;
                        });
                        events.emit(&crate::state::auth_events::AuthEvent::SignedIn(session));
                    }
                    Ok(FormOutcome::ConfirmationPending) => {
                        message.try_set(Some(CONFIRM_EMAIL.to_owned()));
                    }
                    Err(e) => {
                        log::warn!("auth form: {e}");
                        message.try_set(Some(e));
                    }
                }
                busy.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, auth, &events);
            busy.set(false);
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <label class="auth-form__label" for="auth-email">"Email"</label>
            <input
                id="auth-email"
                class="auth-form__input"
                type="email"
                autocomplete="email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <label class="auth-form__label" for="auth-password">"Senha"</label>
            <input
                id="auth-password"
                class="auth-form__input"
                type="password"
                autocomplete=move || if mode.get() == AuthMode::SignIn { "current-password" } else { "new-password" }
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                {move || mode.get().button_label()}
            </button>
            <Show when=move || message.get().is_some()>
                <p class="auth-form__message">{move || message.get().unwrap_or_default()}</p>
            </Show>
            <a
                href="#"
                class="auth-form__switch"
                on:click=move |ev| {
                    ev.prevent_default();
                    mode.update(|m| *m = m.toggled());
                    message.set(None);
                }
            >
                {move || mode.get().switch_link_text()}
            </a>
        </form>
    }
}
