use super::*;

#[test]
fn from_status_maps_401_to_unauthorized() {
    assert_eq!(ApiError::from_status(401, r#"{"message":"Unauthenticated."}"#), ApiError::Unauthorized);
}

#[test]
fn from_status_uses_backend_message_when_present() {
    let err = ApiError::from_status(422, r#"{"message":"The status field is invalid."}"#);
    assert_eq!(
        err,
        ApiError::Status { status: 422, message: "The status field is invalid.".to_owned() }
    );
    assert_eq!(err.user_message(), "The status field is invalid.");
}

#[test]
fn from_status_falls_back_for_non_json_bodies() {
    let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
    assert_eq!(err.user_message(), "The server had a problem. Try again later.");
}

#[test]
fn from_status_ignores_blank_messages() {
    let err = ApiError::from_status(404, r#"{"message":"  "}"#);
    assert_eq!(err.user_message(), "Not found.");
}

#[test]
fn is_unauthorized_only_for_unauthorized() {
    assert!(ApiError::Unauthorized.is_unauthorized());
    assert!(!ApiError::Network("offline".to_owned()).is_unauthorized());
}

#[test]
fn display_includes_status_code() {
    let err = ApiError::Status { status: 500, message: "boom".to_owned() };
    assert_eq!(err.to_string(), "request failed (500): boom");
}
