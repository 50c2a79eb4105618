use super::*;

// =============================================================
// ChatConfig parsing
// =============================================================

#[test]
fn blank_config_uses_defaults() {
    let cfg = ChatConfig::from_json("  ").unwrap();
    assert_eq!(cfg, ChatConfig::default());
    assert_eq!(cfg.elements.form, "qaForm");
    assert_eq!(cfg.elements.input, "questionInput");
    assert_eq!(cfg.elements.submit, "submitBtn");
    assert_eq!(cfg.elements.container, "qaContainer");
    assert_eq!(cfg.elements.error, "errorMessage");
    assert_eq!(cfg.example_selector, ".example-btn");
    assert_eq!(cfg.example_data_key, "example");
    assert!(!cfg.debug_handle);
}

#[test]
fn partial_config_keeps_remaining_defaults() {
    let cfg = ChatConfig::from_json(r#"{"elements":{"input":"q"},"debug_handle":true}"#).unwrap();
    assert_eq!(cfg.elements.input, "q");
    assert_eq!(cfg.elements.form, "qaForm");
    assert!(cfg.debug_handle);
    assert_eq!(cfg.log_level, DEFAULT_LOG_LEVEL);
}

#[test]
fn unknown_field_is_rejected() {
    let err = ChatConfig::from_json(r#"{"endpont":"/x"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(ChatConfig::from_json("{"), Err(ConfigError::Parse(_))));
}

#[test]
fn log_level_parses_case_insensitively() {
    let cfg = ChatConfig { log_level: "DEBUG".into(), ..ChatConfig::default() };
    assert_eq!(cfg.log_level().unwrap(), log::Level::Debug);
}

#[test]
fn unknown_log_level_is_rejected() {
    let cfg = ChatConfig { log_level: "chatty".into(), ..ChatConfig::default() };
    assert_eq!(cfg.log_level(), Err(ConfigError::InvalidLogLevel("chatty".into())));
}

// =============================================================
// Endpoint resolution
// =============================================================

#[test]
fn default_endpoint_is_same_origin_api_answer() {
    let endpoint = ChatConfig::default().endpoint("https://qa.example.com").unwrap();
    assert_eq!(endpoint.url(), "https://qa.example.com/api/answer");
}

#[test]
fn same_origin_trims_trailing_slash() {
    assert_eq!(Endpoint::same_origin("http://localhost:5000/").url(), "http://localhost:5000/api/answer");
}

#[test]
fn opaque_origin_falls_back_to_relative_path() {
    assert_eq!(Endpoint::same_origin("null").url(), "/api/answer");
}

#[test]
fn path_override_joins_origin() {
    let cfg = ChatConfig { endpoint: Some("/v2/answer".into()), ..ChatConfig::default() };
    assert_eq!(cfg.endpoint("http://localhost:5000").unwrap().url(), "http://localhost:5000/v2/answer");
}

#[test]
fn absolute_override_is_taken_as_is() {
    let endpoint = Endpoint::resolve("http://localhost", " https://api.example.com/answer ").unwrap();
    assert_eq!(endpoint.url(), "https://api.example.com/answer");
    assert_eq!(endpoint.origin(), "http://localhost");
}

#[test]
fn bare_word_override_is_rejected() {
    let err = Endpoint::resolve("http://localhost", "api/answer").unwrap_err();
    assert_eq!(err, ConfigError::InvalidEndpoint("api/answer".into()));
}

#[test]
fn scheme_only_override_is_rejected() {
    assert!(Endpoint::resolve("http://localhost", "https://").is_err());
}

#[test]
fn retarget_keeps_origin_and_survives_errors() {
    let mut endpoint = Endpoint::same_origin("http://localhost:5000");
    endpoint.retarget("/other").unwrap();
    assert_eq!(endpoint.url(), "http://localhost:5000/other");

    assert!(endpoint.retarget("").is_err());
    assert_eq!(endpoint.url(), "http://localhost:5000/other");
}
