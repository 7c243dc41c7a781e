use super::*;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// =============================================================
// AuthState defaults and display strings
// =============================================================

#[test]
fn auth_state_default_not_authenticated() {
    let state = AuthState::default();
    assert!(!state.authenticated);
}

#[test]
fn status_text_logged_out() {
    assert_eq!(AuthState::default().status_text(), "You are now Logged Out");
}

#[test]
fn status_text_logged_in() {
    let state = AuthState {
        authenticated: true,
    };
    assert_eq!(state.status_text(), "You are now Logged In");
}

// =============================================================
// AuthStore reads and writes
// =============================================================

#[test]
fn store_starts_logged_out() {
    let store = AuthStore::new();
    assert!(!store.authenticated());
    assert_eq!(store.get(), AuthState::default());
}

#[test]
fn set_authenticated_replaces_value() {
    let store = AuthStore::new();
    store.set_authenticated(true);
    assert!(store.authenticated());
}

#[test]
fn set_authenticated_is_idempotent() {
    let store = AuthStore::new();
    store.set_authenticated(true);
    store.set_authenticated(true);
    assert!(store.authenticated());
    assert_eq!(store.get().status_text(), "You are now Logged In");
}

#[test]
fn round_trip_restores_initial_state() {
    let store = AuthStore::new();
    store.set_authenticated(true);
    store.set_authenticated(false);
    assert_eq!(store.get(), AuthState::default());
    assert_eq!(store.get().status_text(), "You are now Logged Out");
}

#[test]
fn cloned_handles_share_state() {
    let store = AuthStore::new();
    let writer = store.clone();
    writer.set_authenticated(true);
    assert!(store.authenticated());
}

// =============================================================
// AuthStore subscriptions
// =============================================================

#[test]
fn subscriber_notified_synchronously() {
    let store = AuthStore::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |state| sink.lock().unwrap().push(state.authenticated));

    store.set_authenticated(true);
    assert_eq!(*seen.lock().unwrap(), vec![true]);
}

#[test]
fn every_write_notifies_even_when_value_unchanged() {
    let store = AuthStore::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    store.set_authenticated(true);
    store.set_authenticated(true);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn all_subscribers_observe_the_same_value() {
    let store = AuthStore::new();
    let first = Arc::new(Mutex::new(None));
    let second = Arc::new(Mutex::new(None));

    let sink = Arc::clone(&first);
    store.subscribe(move |state| *sink.lock().unwrap() = Some(state.authenticated));
    let sink = Arc::clone(&second);
    store.subscribe(move |state| *sink.lock().unwrap() = Some(state.authenticated));

    store.set_authenticated(true);
    assert_eq!(*first.lock().unwrap(), Some(true));
    assert_eq!(*second.lock().unwrap(), Some(true));
}

#[test]
fn subscriber_can_read_store_during_notification() {
    let store = AuthStore::new();
    let reader = store.clone();
    let seen = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&seen);
    store.subscribe(move |state| {
        *sink.lock().unwrap() = Some((state.authenticated, reader.authenticated()));
    });

    store.set_authenticated(true);
    assert_eq!(*seen.lock().unwrap(), Some((true, true)));
}

#[test]
fn unsubscribe_stops_deliveries() {
    let store = AuthStore::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let id = store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    store.set_authenticated(true);
    store.unsubscribe(id);
    store.set_authenticated(false);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn unsubscribe_unknown_id_is_noop() {
    let store = AuthStore::new();
    let id = store.subscribe(|_| {});
    store.unsubscribe(id);
    store.unsubscribe(id);
    store.set_authenticated(true);
    assert!(store.authenticated());
}

// =============================================================
// End-to-end scenario
// =============================================================

#[test]
fn login_logout_scenario_updates_observed_text() {
    let store = AuthStore::new();
    let text = Arc::new(Mutex::new(AuthState::default().status_text()));
    let sink = Arc::clone(&text);
    store.subscribe(move |state| *sink.lock().unwrap() = state.status_text());

    assert_eq!(*text.lock().unwrap(), "You are now Logged Out");

    store.set_authenticated(true);
    assert_eq!(*text.lock().unwrap(), "You are now Logged In");

    store.set_authenticated(false);
    assert_eq!(*text.lock().unwrap(), "You are now Logged Out");
}
