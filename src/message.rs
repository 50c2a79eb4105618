//! Message records shown in the chat list.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

/// Text carried by the loading placeholder.
pub const LOADING_TEXT: &str = "Getting answer...";

const MINUTES_PER_DAY: i64 = 24 * 60;

/// What a message represents. Also the CSS class marker of its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Question,
    Answer,
    Loading,
    Error,
}

impl MessageKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Answer => "answer",
            Self::Loading => "loading",
            Self::Error => "error",
        }
    }

    /// Parse a lowercase kind name.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "question" => Some(Self::Question),
            "answer" => Some(Self::Answer),
            "loading" => Some(Self::Loading),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Milliseconds since the Unix epoch, as produced by `Date.now()`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(pub f64);

impl Timestamp {
    #[must_use]
    pub fn from_millis(ms: f64) -> Self {
        Self(ms)
    }

    #[must_use]
    pub fn as_millis(self) -> f64 {
        self.0
    }

    /// Zero-padded 24-hour `HH:MM` label in the zone `utc_offset_minutes`
    /// east of UTC.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn time_label(self, utc_offset_minutes: i32) -> String {
        let minutes = ((self.0 / 60_000.0).floor() as i64).saturating_add(i64::from(utc_offset_minutes));
        let of_day = minutes.rem_euclid(MINUTES_PER_DAY);
        format!("{:02}:{:02}", of_day / 60, of_day % 60)
    }
}

/// One unit of displayed chat content. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    kind: MessageKind,
    text: String,
    created_at: Timestamp,
}

impl Message {
    #[must_use]
    pub fn new(kind: MessageKind, text: impl Into<String>, created_at: Timestamp) -> Self {
        Self { kind, text: text.into(), created_at }
    }

    #[must_use]
    pub fn question(text: impl Into<String>, created_at: Timestamp) -> Self {
        Self::new(MessageKind::Question, text, created_at)
    }

    #[must_use]
    pub fn answer(text: impl Into<String>, created_at: Timestamp) -> Self {
        Self::new(MessageKind::Answer, text, created_at)
    }

    #[must_use]
    pub fn loading(created_at: Timestamp) -> Self {
        Self::new(MessageKind::Loading, LOADING_TEXT, created_at)
    }

    #[must_use]
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.kind == MessageKind::Loading
    }
}
