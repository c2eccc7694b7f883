//! Session-change notifications.
//!
//! ARCHITECTURE
//! ============
//! Views that react to sign-in or sign-out register a listener on the shared
//! `AuthEvents` bus and hold the returned `Subscription` for as long as they
//! are mounted. Dropping the guard removes the listener, so a torn-down view
//! can never observe a later event.
//!
//! The bus is provided through Leptos context, which requires `Send + Sync`;
//! listeners therefore live behind `Arc<Mutex<..>>` even though the browser
//! runs them on one thread.

#[cfg(test)]
#[path = "auth_events_test.rs"]
mod auth_events_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::net::types::Session;

/// Lifecycle events published by the credential form and the app shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    /// Result of the first session lookup after the app mounts.
    InitialSession(Option<Session>),
    /// A new session was established.
    SignedIn(Session),
    /// The session was ended.
    SignedOut,
}

type Listener = Arc<dyn Fn(&AuthEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared publish/subscribe bus for [`AuthEvent`]s.
#[derive(Clone, Default)]
pub struct AuthEvents {
    registry: Arc<Mutex<Registry>>,
}

impl AuthEvents {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`; it stays registered until the returned guard is
    /// dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&AuthEvent) + Send + Sync + 'static,
    {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Arc::new(listener)));
        Subscription { id, registry: Arc::downgrade(&self.registry) }
    }

    /// Deliver `event` to every current listener, in subscription order.
    ///
    /// Listeners are called outside the lock, so a listener may subscribe,
    /// unsubscribe, or emit without deadlocking.
    pub fn emit(&self, event: &AuthEvent) {
        let listeners: Vec<Listener> = lock(&self.registry)
            .listeners
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in listeners {
            listener(event);
        }
    }

    #[cfg(test)]
    pub(crate) fn listener_count(&self) -> usize {
        lock(&self.registry).listeners.len()
    }
}

/// Guard for a registered listener. Unsubscribes on drop.
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry)
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}

/// Whether an event seen by the auth view should move the user on to the
/// dashboard.
#[must_use]
pub fn should_enter_dashboard(event: &AuthEvent) -> bool {
    matches!(event, AuthEvent::SignedIn(_))
}
