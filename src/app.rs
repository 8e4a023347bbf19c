//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::session::app_session;

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
/// Builds the session controller, provides it and the mirrored auth state
/// via context, runs the one startup session check, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = app_session();
    let auth = RwSignal::new(session.snapshot());

    provide_context(session.clone());
    provide_context(auth);

    // Reconcile the stored token with the server exactly once at startup.
    #[cfg(feature = "hydrate")]
    {
        let boot = session.clone();
        leptos::task::spawn_local(async move {
            boot.check_auth().await;
            auth.set(boot.snapshot());
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/marinova-client.css"/>
        <Title text="MARINOVA"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
