//! Error kinds surfaced by the chat front end.
//!
//! ERROR HANDLING
//! ==============
//! Every failure of a submission is a [`ChatError`]. The controller catches it
//! at the submission boundary, shows [`ChatError::user_message`] in the error
//! banner and logs the `Display` form. Nothing propagates past that point.

use thiserror::Error;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Banner text for an empty submission.
pub const VALIDATION_MESSAGE: &str = "Please enter a question";

/// Banner text when the failure carries no usable description.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while fetching the answer";

/// A failed question submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    /// The question was empty after trimming.
    #[error("question is empty")]
    Validation,

    /// The endpoint answered with a non-success HTTP status.
    #[error("answer request failed: status {status} {status_text}")]
    Status {
        status: u16,
        status_text: String,
        /// The server's `error` field, when the body carried one.
        detail: Option<String>,
    },

    /// The request never produced a response (DNS, refused connection, CORS).
    #[error("answer request failed: {0}")]
    Network(String),

    /// The response body was not the expected JSON shape.
    #[error("answer response parse failed: {0}")]
    Parse(String),
}

impl ChatError {
    /// Short text for the error banner.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation => VALIDATION_MESSAGE.to_owned(),
            Self::Status { status, status_text, .. } => {
                let status_text = status_text.trim();
                if status_text.is_empty() {
                    format!("API Error: {status}")
                } else {
                    format!("API Error: {status_text}")
                }
            }
            Self::Network(description) if !description.trim().is_empty() => description.clone(),
            Self::Network(_) | Self::Parse(_) => GENERIC_FAILURE_MESSAGE.to_owned(),
        }
    }
}

/// Rejected transcript mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TranscriptError {
    /// A loading placeholder is pending and must stay the last element.
    #[error("a loading placeholder is pending")]
    PlaceholderPending,

    /// Loading placeholders are only created by a submission.
    #[error("loading messages cannot be appended directly")]
    LoadingKind,
}

/// Invalid page configuration or endpoint override.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(String),

    #[error("invalid endpoint '{0}' (expected an http(s) URL or a path starting with '/')")]
    InvalidEndpoint(String),

    #[error("invalid log level '{0}'")]
    InvalidLogLevel(String),
}
