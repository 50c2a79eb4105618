use super::*;

// =============================================================
// Request body
// =============================================================

#[test]
fn request_serializes_question_field_only() {
    let body = serde_json::to_string(&AnswerRequest::new("What is 2+2?")).unwrap();
    assert_eq!(body, r#"{"question":"What is 2+2?"}"#);
}

#[test]
fn request_escapes_quotes() {
    let body = serde_json::to_string(&AnswerRequest::new("say \"hi\"")).unwrap();
    assert_eq!(body, r#"{"question":"say \"hi\""}"#);
}

// =============================================================
// Success responses
// =============================================================

#[test]
fn decode_minimal_answer() {
    let resp = decode_answer(200, "OK", r#"{"answer":"4"}"#).unwrap();
    assert_eq!(resp.answer, "4");
    assert!(resp.confidence.is_none());
    assert!(resp.sources.is_empty());
}

#[test]
fn decode_keeps_confidence_and_sources() {
    let body = r#"{"answer":"Paris","confidence":0.85,"sources":["faq.txt"]}"#;
    let resp = decode_answer(200, "OK", body).unwrap();
    assert_eq!(resp.confidence, Some(0.85));
    assert_eq!(resp.sources, vec!["faq.txt".to_owned()]);
}

#[test]
fn decode_tolerates_null_sources() {
    let resp = decode_answer(200, "OK", r#"{"answer":"4","sources":null}"#).unwrap();
    assert_eq!(resp.answer, "4");
    assert!(resp.sources.is_empty());
}

#[test]
fn decode_tolerates_non_numeric_confidence() {
    let resp = decode_answer(200, "OK", r#"{"answer":"4","confidence":"high"}"#).unwrap();
    assert_eq!(resp.answer, "4");
    assert!(resp.confidence.is_none());
}

#[test]
fn decode_tolerates_object_sources() {
    let body = r#"{"answer":"4","sources":[{"name":"faq.txt"},"math.txt",7]}"#;
    let resp = decode_answer(200, "OK", body).unwrap();
    assert_eq!(resp.answer, "4");
    assert_eq!(resp.sources, vec!["math.txt".to_owned()]);
}

#[test]
fn decode_tolerates_scalar_sources() {
    let resp = decode_answer(200, "OK", r#"{"answer":"4","sources":"faq.txt","confidence":null}"#).unwrap();
    assert!(resp.sources.is_empty());
    assert!(resp.confidence.is_none());
}

#[test]
fn decode_ignores_unknown_fields() {
    let resp = decode_answer(201, "Created", r#"{"answer":"ok","trace":"x"}"#).unwrap();
    assert_eq!(resp.answer, "ok");
}

// =============================================================
// Failures
// =============================================================

#[test]
fn non_success_status_is_status_error() {
    let err = decode_answer(503, "Service Unavailable", "").unwrap_err();
    assert_eq!(
        err,
        ChatError::Status { status: 503, status_text: "Service Unavailable".into(), detail: None }
    );
}

#[test]
fn non_success_keeps_server_error_detail() {
    let body = r#"{"error":"Question cannot be empty"}"#;
    let err = decode_answer(400, "Bad Request", body).unwrap_err();
    assert!(matches!(err, ChatError::Status { detail: Some(ref d), .. } if d == "Question cannot be empty"));
}

#[test]
fn non_success_with_answer_body_is_still_failure() {
    assert!(decode_answer(500, "Internal Server Error", r#"{"answer":"4"}"#).is_err());
}

#[test]
fn redirect_status_is_failure() {
    assert!(matches!(decode_answer(304, "Not Modified", ""), Err(ChatError::Status { status: 304, .. })));
}

#[test]
fn malformed_body_is_parse_error() {
    assert!(matches!(decode_answer(200, "OK", "<html>oops</html>"), Err(ChatError::Parse(_))));
}

#[test]
fn missing_answer_field_is_parse_error() {
    assert!(matches!(decode_answer(200, "OK", r#"{"confidence":0.1}"#), Err(ChatError::Parse(_))));
}

#[test]
fn non_string_answer_is_parse_error() {
    assert!(matches!(decode_answer(200, "OK", r#"{"answer":4}"#), Err(ChatError::Parse(_))));
}

#[test]
fn success_range_bounds() {
    assert!(!is_success(199));
    assert!(is_success(200));
    assert!(is_success(299));
    assert!(!is_success(300));
}
