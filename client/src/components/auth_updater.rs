//! Writer fragment: two controls that set the shared auth flag.

use leptos::prelude::*;

use crate::state::auth::AuthStore;

/// "Log in" / "Log out" buttons writing the shared flag through the store.
///
/// Activation cannot fail: each click dispatches a fixed literal, and the
/// store's update is an unconditional replacement.
#[component]
pub fn AuthUpdater() -> impl IntoView {
    let store = expect_context::<AuthStore>();

    let on_login = {
        let store = store.clone();
        move |_| store.set_authenticated(true)
    };
    let on_logout = move |_| store.set_authenticated(false);

    view! {
        <div class="auth-updater">
            <button class="btn" on:click=on_login>
                "Log in"
            </button>
            <button class="btn" on:click=on_logout>
                "Log out"
            </button>
        </div>
    }
}
