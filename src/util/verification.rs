//! Builders for the email-ownership verification handoff.
//!
//! The pending-verification screen hands the user a pre-filled Gmail
//! compose window instead of sending mail server-side; the embedded link
//! points back at the app with the email carried as a base64 token. The
//! developer bypass anchor reuses the same link.

#[cfg(test)]
#[path = "verification_test.rs"]
mod verification_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

const VERIFICATION_SUBJECT: &str = "Activate your MARINOVA Account";

/// Link pointing back at the app with the email encoded as a token.
pub fn verification_link(page_url: &str, email: &str) -> String {
    format!("{page_url}?token={}", STANDARD.encode(email))
}

/// Gmail compose URL pre-addressed to the user with the verification mail
/// body filled in.
pub fn gmail_compose_url(email: &str, link: &str) -> String {
    let subject = urlencoding::encode(VERIFICATION_SUBJECT);
    let body = format!(
        "Welcome to Marinova!\n\nPlease click the following link to verify your email address:\n{link}\n\nIf you did not request this, please ignore this email."
    );
    let body = urlencoding::encode(&body);
    format!("https://mail.google.com/mail/?view=cm&fs=1&to={email}&su={subject}&body={body}")
}

/// Current page URL (protocol + host + path) for link construction.
/// `None` outside the browser.
pub fn current_page_url() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let location = web_sys::window()?.location();
        let protocol = location.protocol().ok()?;
        let host = location.host().ok()?;
        let pathname = location.pathname().ok()?;
        Some(format!("{protocol}//{host}{pathname}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
