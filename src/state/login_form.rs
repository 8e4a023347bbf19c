//! Login/signup form state machine and field-validation policy.
//!
//! DESIGN
//! ======
//! The three form views and their field values are an explicit state
//! machine rather than component-local signals, so mode switches clear
//! stale input deterministically and the email policy is testable without
//! a DOM.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use regex::Regex;

/// Error shown whenever the email fails the domain policy.
pub const EMAIL_DOMAIN_ERROR: &str = "Only @gmail.com addresses are allowed";

/// Error shown when the server reports a failure without a message.
pub const GENERIC_AUTH_ERROR: &str = "Authentication failed";

/// Accepted identity-provider policy.
///
/// Deliberately narrower than a general email check: accounts are
/// restricted to `@gmail.com` addresses, so otherwise-valid emails on
/// other domains are rejected.
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@gmail\.com$").is_ok_and(|re| re.is_match(email))
}

/// Which of the three auth views is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthView {
    #[default]
    Login,
    Signup,
    /// Email-ownership screen; reachable only through the explicit
    /// verification action on the signup view, never as part of submit.
    VerifyPending,
}

/// Form fields plus submission status for the login/signup flow.
#[derive(Clone, Debug, Default)]
pub struct LoginFormState {
    pub view: AuthView,
    pub full_name: String,
    pub email: String,
    pub password: String,
    /// Field-level error; `None` renders nothing and allows submission.
    pub email_error: Option<String>,
    pub submitting: bool,
}

impl LoginFormState {
    /// Switch between login and signup, dropping every entered value and
    /// error so nothing leaks across modes.
    pub fn toggle_mode(&mut self) {
        self.view = if self.view == AuthView::Login {
            AuthView::Signup
        } else {
            AuthView::Login
        };
        self.full_name.clear();
        self.email.clear();
        self.password.clear();
        self.email_error = None;
    }

    /// Record a keystroke in the email field and re-run the domain policy.
    ///
    /// An empty field clears the error but still blocks submission.
    pub fn set_email(&mut self, value: &str) {
        self.email = value.to_owned();
        self.email_error = if value.is_empty() || valid_email(value) {
            None
        } else {
            Some(EMAIL_DOMAIN_ERROR.to_owned())
        };
    }

    /// Strict re-check at submit time; returns whether submission may
    /// proceed.
    pub fn validate_for_submit(&mut self) -> bool {
        if self.email.is_empty() {
            self.email_error = None;
            return false;
        }
        if valid_email(&self.email) {
            self.email_error = None;
            true
        } else {
            self.email_error = Some(EMAIL_DOMAIN_ERROR.to_owned());
            false
        }
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.email_error.is_none()
    }

    /// Surface a failed authentication result on the email field.
    pub fn apply_failure(&mut self, message: &str) {
        self.submitting = false;
        self.email_error = Some(if message.is_empty() {
            GENERIC_AUTH_ERROR.to_owned()
        } else {
            message.to_owned()
        });
    }

    /// Move from signup to the pending-verification screen. The entered
    /// email stays visible there, so fields are kept.
    pub fn begin_verification(&mut self) {
        if self.view == AuthView::Signup {
            self.view = AuthView::VerifyPending;
        }
    }

    /// The only exit from the pending-verification screen.
    pub fn back_to_signup(&mut self) {
        if self.view == AuthView::VerifyPending {
            self.view = AuthView::Signup;
        }
    }
}
