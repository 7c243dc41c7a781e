//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::auth::AuthStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the shared auth store, bridges its notifications into a signal so
/// views re-render on mutation, and provides both through context: writers
/// dispatch through the store, readers subscribe through the signal.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = AuthStore::new();
    let auth = RwSignal::new(store.get());
    store.subscribe(move |state| auth.set(state));

    provide_context(store);
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/authdemo.css"/>
        <Title text="Auth demo"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
