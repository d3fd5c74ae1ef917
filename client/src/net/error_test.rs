use super::*;

#[test]
fn rejected_uses_server_message() {
    assert_eq!(ApiError::rejected(Some("Name taken")), ApiError::Rejected("Name taken".to_owned()));
}

#[test]
fn rejected_falls_back_when_message_blank() {
    let err = ApiError::rejected(Some("  "));
    assert_eq!(err.to_string(), "request rejected by server");
    assert_eq!(ApiError::rejected(None), err);
}

#[test]
fn status_error_formats_code() {
    assert_eq!(ApiError::Status(404).to_string(), "request failed: 404");
}

#[test]
fn transport_classification() {
    assert!(ApiError::Network("offline".to_owned()).is_transport());
    assert!(ApiError::Status(500).is_transport());
    assert!(!ApiError::Malformed.is_transport());
    assert!(!ApiError::rejected(None).is_transport());
}
