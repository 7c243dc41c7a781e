//! Landing page composing the writer and reader fragments.

use leptos::prelude::*;

use crate::components::auth_updater::AuthUpdater;
use crate::components::auth_viewer::AuthViewer;

/// Two-column demo page: the updater mutates the flag, the viewer observes it.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home">
            <AuthUpdater/>
            <AuthViewer/>
        </main>
    }
}
