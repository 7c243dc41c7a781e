//! Reader fragment: status text derived from the shared auth flag.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Text region showing whether the user is currently logged in.
///
/// Subscribes through the bridged signal; re-renders on every store write.
#[component]
pub fn AuthViewer() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let status = move || auth.get().status_text();

    view! { <div class="auth-viewer">{status}</div> }
}
