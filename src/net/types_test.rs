use super::*;

#[test]
fn auth_response_parses_success_payload() {
    let json = r#"{
        "success": true,
        "message": "Welcome back",
        "token": "abc",
        "user": {"id": "1", "email": "jane@gmail.com", "fullName": "Jane"}
    }"#;
    let response: AuthResponse = serde_json::from_str(json).expect("valid payload");
    assert!(response.success);
    assert_eq!(response.message, "Welcome back");
    assert_eq!(response.token.as_deref(), Some("abc"));
    let user = response.user.expect("user present");
    assert_eq!(user.id, "1");
    assert_eq!(user.email, "jane@gmail.com");
    assert_eq!(user.full_name, "Jane");
}

#[test]
fn auth_response_parses_failure_without_token_or_user() {
    let json = r#"{"success": false, "message": "Invalid credentials"}"#;
    let response: AuthResponse = serde_json::from_str(json).expect("valid payload");
    assert!(!response.success);
    assert_eq!(response.message, "Invalid credentials");
    assert!(response.token.is_none());
    assert!(response.user.is_none());
}

#[test]
fn auth_response_tolerates_missing_message() {
    let json = r#"{"success": false}"#;
    let response: AuthResponse = serde_json::from_str(json).expect("valid payload");
    assert!(!response.success);
    assert_eq!(response.message, "");
}

#[test]
fn auth_response_skips_absent_optional_fields_when_serialized() {
    let response = AuthResponse {
        success: false,
        message: "nope".to_owned(),
        token: None,
        user: None,
    };
    let json = serde_json::to_value(&response).expect("serializable");
    assert!(json.get("token").is_none());
    assert!(json.get("user").is_none());
}

#[test]
fn user_full_name_maps_to_camel_case_on_the_wire() {
    let user = User {
        id: "1".to_owned(),
        email: "jane@gmail.com".to_owned(),
        full_name: "Jane".to_owned(),
    };
    let json = serde_json::to_value(&user).expect("serializable");
    assert_eq!(json["fullName"], "Jane");
    assert!(json.get("full_name").is_none());
}

#[test]
fn login_credentials_serialize_email_and_password() {
    let credentials = LoginCredentials {
        email: "jane@gmail.com".to_owned(),
        password: "pw".to_owned(),
    };
    let json = serde_json::to_value(&credentials).expect("serializable");
    assert_eq!(json["email"], "jane@gmail.com");
    assert_eq!(json["password"], "pw");
}

#[test]
fn register_credentials_serialize_with_camel_case_full_name() {
    let credentials = RegisterCredentials {
        full_name: "Jane".to_owned(),
        email: "jane@gmail.com".to_owned(),
        password: "pw".to_owned(),
    };
    let json = serde_json::to_value(&credentials).expect("serializable");
    assert_eq!(json["fullName"], "Jane");
    assert_eq!(json["email"], "jane@gmail.com");
    assert!(json.get("full_name").is_none());
}
