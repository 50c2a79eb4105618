use super::*;

// =============================================================
// Banner text
// =============================================================

#[test]
fn validation_shows_prompt_to_enter_question() {
    assert_eq!(ChatError::Validation.user_message(), "Please enter a question");
}

#[test]
fn status_uses_status_text() {
    let err = ChatError::Status { status: 503, status_text: "Service Unavailable".into(), detail: None };
    assert_eq!(err.user_message(), "API Error: Service Unavailable");
}

#[test]
fn status_without_text_falls_back_to_code() {
    let err = ChatError::Status { status: 500, status_text: "  ".into(), detail: Some("boom".into()) };
    assert_eq!(err.user_message(), "API Error: 500");
}

#[test]
fn network_uses_transport_description() {
    let err = ChatError::Network("Failed to fetch".into());
    assert_eq!(err.user_message(), "Failed to fetch");
}

#[test]
fn network_without_description_is_generic() {
    assert_eq!(ChatError::Network(String::new()).user_message(), GENERIC_FAILURE_MESSAGE);
}

#[test]
fn parse_is_generic() {
    let err = ChatError::Parse("expected value at line 1 column 1".into());
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

// =============================================================
// Log text
// =============================================================

#[test]
fn status_display_includes_code_and_text() {
    let err = ChatError::Status { status: 404, status_text: "Not Found".into(), detail: None };
    assert_eq!(err.to_string(), "answer request failed: status 404 Not Found");
}

#[test]
fn config_error_names_bad_endpoint() {
    let err = ConfigError::InvalidEndpoint("ftp://x".into());
    assert!(err.to_string().contains("ftp://x"));
}
