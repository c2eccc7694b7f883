use super::*;
use crate::net::types::User;
use std::sync::atomic::{AtomicUsize, Ordering};

fn session(id: &str) -> Session {
    Session { user: User { id: id.to_owned(), email: None }, expires_at: None }
}

fn counting_listener(events: &AuthEvents) -> (Subscription, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_listener = Arc::clone(&hits);
    let sub = events.subscribe(move |_| {
        hits_listener.fetch_add(1, Ordering::SeqCst);
    });
    (sub, hits)
}

// =============================================================
// subscribe / emit
// =============================================================

#[test]
fn emit_reaches_every_listener() {
    let events = AuthEvents::new();
    let (_a, hits_a) = counting_listener(&events);
    let (_b, hits_b) = counting_listener(&events);

    events.emit(&AuthEvent::SignedIn(session("u1")));

    assert_eq!(hits_a.load(Ordering::SeqCst), 1);
    assert_eq!(hits_b.load(Ordering::SeqCst), 1);
    assert_eq!(events.listener_count(), 2);
}

#[test]
fn listener_receives_event_payload() {
    let events = AuthEvents::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_listener = Arc::clone(&seen);
    let _sub = events.subscribe(move |event| {
        seen_listener.lock().unwrap().push(event.clone());
    });

    events.emit(&AuthEvent::InitialSession(None));
    events.emit(&AuthEvent::SignedIn(session("u2")));

    let seen = seen.lock().unwrap();
    assert_eq!(*seen, vec![AuthEvent::InitialSession(None), AuthEvent::SignedIn(session("u2"))]);
}

#[test]
fn emit_without_listeners_is_noop() {
    let events = AuthEvents::new();
    events.emit(&AuthEvent::SignedOut);
    assert_eq!(events.listener_count(), 0);
}

// =============================================================
// Subscription release
// =============================================================

#[test]
fn dropping_subscription_stops_delivery() {
    let events = AuthEvents::new();
    let (sub, hits) = counting_listener(&events);
    events.emit(&AuthEvent::SignedOut);
    drop(sub);
    events.emit(&AuthEvent::SignedIn(session("u1")));

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(events.listener_count(), 0);
}

#[test]
fn dropping_one_subscription_keeps_the_others() {
    let events = AuthEvents::new();
    let (first, first_hits) = counting_listener(&events);
    let (_second, second_hits) = counting_listener(&events);

    drop(first);
    events.emit(&AuthEvent::SignedOut);

    assert_eq!(first_hits.load(Ordering::SeqCst), 0);
    assert_eq!(second_hits.load(Ordering::SeqCst), 1);
    assert_eq!(events.listener_count(), 1);
}

#[test]
fn subscription_outliving_bus_drops_cleanly() {
    let events = AuthEvents::new();
    let (sub, _hits) = counting_listener(&events);
    drop(events);
    drop(sub);
}

#[test]
fn clones_share_one_registry() {
    let events = AuthEvents::new();
    let publisher = events.clone();
    let (_sub, hits) = counting_listener(&events);

    publisher.emit(&AuthEvent::SignedIn(session("u3")));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn listener_may_emit_reentrantly() {
    let events = AuthEvents::new();
    let inner = events.clone();
    let (_counter, hits) = counting_listener(&events);
    let _relay = events.subscribe(move |event| {
        if matches!(event, AuthEvent::SignedIn(_)) {
            inner.emit(&AuthEvent::SignedOut);
        }
    });

    events.emit(&AuthEvent::SignedIn(session("u4")));
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn only_signed_in_enters_dashboard() {
    assert!(should_enter_dashboard(&AuthEvent::SignedIn(session("u1"))));
    assert!(!should_enter_dashboard(&AuthEvent::SignedOut));
    assert!(!should_enter_dashboard(&AuthEvent::InitialSession(Some(session("u1")))));
}
