use super::*;

// =============================================================
// MessageKind
// =============================================================

#[test]
fn kind_names_are_lowercase_class_markers() {
    assert_eq!(MessageKind::Question.as_str(), "question");
    assert_eq!(MessageKind::Answer.as_str(), "answer");
    assert_eq!(MessageKind::Loading.as_str(), "loading");
    assert_eq!(MessageKind::Error.as_str(), "error");
}

#[test]
fn kind_parse_accepts_known_names_only() {
    assert_eq!(MessageKind::parse(" answer "), Some(MessageKind::Answer));
    assert_eq!(MessageKind::parse("Answer"), None);
    assert_eq!(MessageKind::parse("system"), None);
}

#[test]
fn kind_serializes_lowercase() {
    let json = serde_json::to_string(&MessageKind::Question).unwrap();
    assert_eq!(json, "\"question\"");
}

// =============================================================
// Timestamp labels
// =============================================================

// 2024-01-01T09:05:30Z
const NINE_OH_FIVE_UTC: f64 = 1_704_099_930_000.0;

#[test]
fn time_label_in_utc() {
    assert_eq!(Timestamp(NINE_OH_FIVE_UTC).time_label(0), "09:05");
}

#[test]
fn time_label_applies_positive_offset() {
    assert_eq!(Timestamp(NINE_OH_FIVE_UTC).time_label(150), "11:35");
}

#[test]
fn time_label_wraps_backwards_across_midnight() {
    assert_eq!(Timestamp(NINE_OH_FIVE_UTC).time_label(-10 * 60), "23:05");
}

#[test]
fn time_label_saturates_extreme_timestamps() {
    assert_eq!(Timestamp(f64::MAX).time_label(60), "18:07");
    assert_eq!(Timestamp(f64::MIN).time_label(-60), "05:52");
}

#[test]
fn time_label_of_epoch() {
    assert_eq!(Timestamp::default().time_label(0), "00:00");
}

// =============================================================
// Message constructors
// =============================================================

#[test]
fn loading_message_carries_placeholder_text() {
    let msg = Message::loading(Timestamp(1.0));
    assert!(msg.is_loading());
    assert_eq!(msg.text(), LOADING_TEXT);
}

#[test]
fn question_message_keeps_text_and_time() {
    let msg = Message::question("What is 2+2?", Timestamp(42.0));
    assert_eq!(msg.kind(), MessageKind::Question);
    assert_eq!(msg.text(), "What is 2+2?");
    assert_eq!(msg.created_at(), Timestamp(42.0));
    assert!(!msg.is_loading());
}
