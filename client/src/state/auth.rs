//! Auth-flag state and its shared store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store owns the canonical [`AuthState`] for the whole application.
//! Writers mutate through [`AuthStore::set_authenticated`]; readers hold a
//! subscription and are notified synchronously on every write. `app::App`
//! bridges notifications into an `RwSignal` so Leptos views re-render.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Authentication state: a single flag, false at application start.
///
/// No credential check exists anywhere; the flag is written directly by UI
/// action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
}

impl AuthState {
    /// Status line rendered by the viewer fragment.
    #[must_use]
    pub fn status_text(self) -> &'static str {
        if self.authenticated {
            "You are now Logged In"
        } else {
            "You are now Logged Out"
        }
    }
}

/// Handle returned by [`AuthStore::subscribe`]; pass it to
/// [`AuthStore::unsubscribe`] to stop deliveries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriberId(u64);

type Subscriber = Arc<dyn Fn(AuthState) + Send + Sync>;

/// Shared store owning the canonical [`AuthState`].
///
/// Cloning yields another handle to the same state; every handle observes the
/// same value. Subscribers are notified synchronously, within the mutating
/// call, in registration order.
#[derive(Clone, Default)]
pub struct AuthStore {
    inner: Arc<Mutex<StoreInner>>,
}

#[derive(Default)]
struct StoreInner {
    state: AuthState,
    next_id: u64,
    subscribers: Vec<(SubscriberId, Subscriber)>,
}

impl AuthStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of the flag.
    #[must_use]
    pub fn authenticated(&self) -> bool {
        self.lock().state.authenticated
    }

    /// Snapshot of the current state record.
    #[must_use]
    pub fn get(&self) -> AuthState {
        self.lock().state
    }

    /// Unconditionally replace the flag, then notify every subscriber with
    /// the new state. Fires on every call, including value-preserving ones.
    pub fn set_authenticated(&self, value: bool) {
        let (state, subscribers) = {
            let mut inner = self.lock();
            inner.state.authenticated = value;
            (inner.state, inner.subscribers.clone())
        };
        // Lock released before callbacks run, so a subscriber may read the
        // store re-entrantly.
        for (_, notify) in &subscribers {
            notify(state);
        }
    }

    /// Register a callback invoked on every write.
    pub fn subscribe(
        &self,
        callback: impl Fn(AuthState) + Send + Sync + 'static,
    ) -> SubscriberId {
        let mut inner = self.lock();
        let id = SubscriberId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push((id, Arc::new(callback)));
        id
    }

    /// Remove a previously registered callback. Unknown ids are a no-op.
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.lock().subscribers.retain(|(sid, _)| *sid != id);
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        // Subscriber callbacks run outside the lock, so a panic inside one
        // cannot poison it; recover rather than propagate.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
