//! Login / signup / verification page driving the auth flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders whatever `LoginFormState` reports and forwards submissions to
//! the session controller. All field policy and view transitions live in
//! `state::login_form`; this module is wiring and markup.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::login_form::{AuthView, LoginFormState};
use crate::state::session::AppSession;
use crate::util::auth::install_auth_redirect;

fn heading(view: AuthView) -> &'static str {
    match view {
        AuthView::Signup => "Join MARINOVA",
        _ => "Welcome Back",
    }
}

fn subtitle(view: AuthView) -> &'static str {
    match view {
        AuthView::Signup => "Create an account to track global metrics",
        _ => "Sign in to access your ocean data dashboard",
    }
}

fn submit_label(view: AuthView, submitting: bool) -> &'static str {
    match (view, submitting) {
        (AuthView::Signup, true) => "Creating Account...",
        (AuthView::Signup, false) => "Create Account",
        (_, true) => "Signing In...",
        (_, false) => "Sign In",
    }
}

fn toggle_prompt(view: AuthView) -> (&'static str, &'static str) {
    match view {
        AuthView::Signup => ("Already have an account?", "Log in"),
        _ => ("Don't have an account?", "Sign up"),
    }
}

/// Login page hosting the three-view auth form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let form = RwSignal::new(LoginFormState::default());
    let navigate = use_navigate();

    // Signed-in visitors have no business here.
    install_auth_redirect(auth, navigate.clone());

    view! {
        <div class="login-page">
            <div class="login-card">
                <Show
                    when=move || form.get().view == AuthView::VerifyPending
                    fallback=move || view! { <CredentialsForm form=form/> }
                >
                    <VerifyPending form=form/>
                </Show>
            </div>
        </div>
    }
}

/// Login/signup form with keystroke email validation.
#[component]
fn CredentialsForm(form: RwSignal<LoginFormState>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<Rc<AppSession>>();
    let navigate = use_navigate();

    let submit_session = session.clone();
    let submit_navigate = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut proceed = false;
        form.update(|f| {
            proceed = f.can_submit() && f.validate_for_submit();
            if proceed {
                f.submitting = true;
            }
        });
        if !proceed {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let session = submit_session.clone();
            let navigate = submit_navigate.clone();
            leptos::task::spawn_local(async move {
                let snapshot = form.get_untracked();
                let response = match snapshot.view {
                    AuthView::Signup => {
                        session
                            .register(&snapshot.full_name, &snapshot.email, &snapshot.password)
                            .await
                    }
                    _ => session.login(&snapshot.email, &snapshot.password).await,
                };
                form.update(|f| f.submitting = false);
                if response.success {
                    auth.set(session.snapshot());
                    navigate("/", leptos_router::NavigateOptions::default());
                } else {
                    form.update(|f| f.apply_failure(&response.message));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&submit_session, &submit_navigate, auth);
            form.update(|f| f.submitting = false);
        }
    };

    view! {
        <div class="login-card__intro">
            <h2>{move || heading(form.get().view)}</h2>
            <p class="login-card__subtitle">{move || subtitle(form.get().view)}</p>
        </div>
        <form class="login-form" on:submit=on_submit>
            <Show when=move || form.get().view == AuthView::Signup>
                <label class="login-label">
                    "Full Name"
                    <input
                        class="login-input"
                        type="text"
                        placeholder="John Doe"
                        prop:value=move || form.get().full_name
                        on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                    />
                </label>
            </Show>
            <label class="login-label">
                "Email Address"
                <input
                    class="login-input"
                    class=("login-input--invalid", move || form.get().email_error.is_some())
                    type="email"
                    placeholder="user@gmail.com"
                    prop:value=move || form.get().email
                    on:input=move |ev| form.update(|f| f.set_email(&event_target_value(&ev)))
                />
            </label>
            <Show when=move || form.get().email_error.is_some()>
                <p class="login-error">{move || form.get().email_error.unwrap_or_default()}</p>
            </Show>
            <label class="login-label">
                "Password"
                <input
                    class="login-input"
                    type="password"
                    placeholder="••••••••"
                    prop:value=move || form.get().password
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
            </label>
            <button
                class="login-button"
                type="submit"
                disabled=move || !form.get().can_submit()
            >
                {move || submit_label(form.get().view, form.get().submitting)}
            </button>
        </form>
        <div class="login-card__footer">
            <p>
                {move || toggle_prompt(form.get().view).0}
                " "
                <button class="login-link" on:click=move |_| form.update(LoginFormState::toggle_mode)>
                    {move || toggle_prompt(form.get().view).1}
                </button>
            </p>
            <Show when=move || form.get().view == AuthView::Signup>
                <button
                    class="login-link login-link--secondary"
                    on:click=move |_| form.update(LoginFormState::begin_verification)
                >
                    "Verify email ownership instead"
                </button>
            </Show>
        </div>
    }
}

/// Pending-verification screen with the Gmail handoff and bypass link.
#[component]
fn VerifyPending(form: RwSignal<LoginFormState>) -> impl IntoView {
    let bypass_link = move || {
        #[cfg(feature = "hydrate")]
        {
            let email = form.get().email;
            crate::util::verification::current_page_url()
                .map(|page| crate::util::verification::verification_link(&page, &email))
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form.get().email;
            String::new()
        }
    };

    let on_open_gmail = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let email = form.get_untracked().email;
            if let Some(page) = crate::util::verification::current_page_url() {
                let link = crate::util::verification::verification_link(&page, &email);
                let url = crate::util::verification::gmail_compose_url(&email, &link);
                if let Some(window) = web_sys::window() {
                    let _ = window.open_with_url_and_target(&url, "_blank");
                }
            }
        }
    };

    view! {
        <div class="login-verify">
            <h2>"Verify Your Email"</h2>
            <p class="login-card__subtitle">
                "We need to verify ownership of " <strong>{move || form.get().email}</strong> "."
            </p>
            <button class="login-button login-button--mail" on:click=on_open_gmail>
                "Open Gmail & Send Link"
            </button>
            <ol class="login-verify__steps">
                <li>"Click button to open Gmail."</li>
                <li>"Send the verification email to yourself."</li>
                <li>"Click the link in your inbox to log in."</li>
            </ol>
            <div class="login-verify__bypass">
                <p>"Developer Bypass (Testing only):"</p>
                <a href=bypass_link>"Click here to verify directly"</a>
            </div>
            <button class="login-link" on:click=move |_| form.update(LoginFormState::back_to_signup)>
                "Back to Sign Up"
            </button>
        </div>
    }
}
