use super::*;

#[test]
fn custom_kind_accepts_display_kinds() {
    assert_eq!(parse_custom_kind("question"), Ok(MessageKind::Question));
    assert_eq!(parse_custom_kind("answer"), Ok(MessageKind::Answer));
    assert_eq!(parse_custom_kind(" error "), Ok(MessageKind::Error));
}

#[test]
fn custom_kind_rejects_loading() {
    assert!(parse_custom_kind("loading").is_err());
}

#[test]
fn custom_kind_rejects_unknown_names() {
    let err = parse_custom_kind("system").unwrap_err();
    assert!(err.contains("system"));
}
