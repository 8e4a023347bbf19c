use super::*;

#[test]
fn verification_link_encodes_email_as_base64_token() {
    let link = verification_link("https://app.marinova.dev/", "jane@gmail.com");
    assert_eq!(link, "https://app.marinova.dev/?token=amFuZUBnbWFpbC5jb20=");
}

#[test]
fn verification_link_handles_short_emails() {
    let link = verification_link("http://localhost:3000/", "a@b.c");
    assert_eq!(link, "http://localhost:3000/?token=YUBiLmM=");
}

#[test]
fn gmail_compose_url_addresses_the_user() {
    let url = gmail_compose_url("jane@gmail.com", "https://app.marinova.dev/?token=x");
    assert!(url.starts_with("https://mail.google.com/mail/?view=cm&fs=1&to=jane@gmail.com"));
}

#[test]
fn gmail_compose_url_carries_encoded_subject() {
    let url = gmail_compose_url("jane@gmail.com", "https://app.marinova.dev/?token=x");
    assert!(url.contains("su=Activate%20your%20MARINOVA%20Account"));
}

#[test]
fn gmail_compose_url_embeds_the_verification_link_in_the_body() {
    let link = "https://app.marinova.dev/?token=amFuZUBnbWFpbC5jb20=";
    let url = gmail_compose_url("jane@gmail.com", link);
    assert!(url.contains("https%3A%2F%2Fapp.marinova.dev%2F%3Ftoken%3DamFuZUBnbWFpbC5jb20%3D"));
    assert!(url.contains("body=Welcome%20to%20Marinova%21"));
}

#[test]
fn current_page_url_is_unavailable_outside_the_browser() {
    assert!(current_page_url().is_none());
}
