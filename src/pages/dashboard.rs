//! Authenticated landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated route. It renders whatever the session core
//! reports and redirects to `/login` once auth has loaded without a user.
//! Dashboard content itself is presentation and stays minimal here.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::session::AppSession;
use crate::util::auth::install_unauth_redirect;

/// Dashboard page — greets the signed-in user and offers logout.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<Rc<AppSession>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());

    let logout_session = session.clone();
    let logout_navigate = navigate.clone();
    let on_logout = move |_| {
        logout_session.logout();
        auth.set(logout_session.snapshot());
        logout_navigate("/login", NavigateOptions::default());
    };

    let full_name = move || {
        auth.get().user.map(|user| user.full_name).unwrap_or_default()
    };

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>
                            {move || {
                                if auth.get().loading { "Loading..." } else { "Redirecting to login..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <span class="toolbar__brand">"MARINOVA"</span>
                    <span class="toolbar__spacer"></span>
                    <span class="toolbar__self">{full_name}</span>
                    <button class="btn toolbar__logout" on:click=on_logout.clone() title="Logout">
                        "Logout"
                    </button>
                </header>
                <main class="dashboard-page__body">
                    <p>"Your ocean data dashboard is ready."</p>
                </main>
            </div>
        </Show>
    }
}
