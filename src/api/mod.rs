//! Answer endpoint wire types and transports.
//!
//! DESIGN
//! ======
//! One request shape, one response shape, and one set of response rules in
//! [`decode_answer`]. Transports only move bytes: the native client here
//! (`reqwest`, feature `native`) and the browser client in `web/`
//! (`gloo-net`) both hand status and body to [`decode_answer`].

#[cfg(feature = "native")]
mod http;

#[cfg(feature = "native")]
pub use http::HttpAnswerClient;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ChatError;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

// =============================================================================
// WIRE TYPES
// =============================================================================

/// POST body: `{"question": "..."}`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnswerRequest<'a> {
    pub question: &'a str,
}

impl<'a> AnswerRequest<'a> {
    #[must_use]
    pub fn new(question: &'a str) -> Self {
        Self { question }
    }
}

/// Success body. Only `answer` is required; the optional fields never fail
/// the decode, whatever shape the server sends.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
    #[serde(default, deserialize_with = "lenient_confidence")]
    pub confidence: Option<f64>,
    #[serde(default, deserialize_with = "lenient_sources")]
    pub sources: Vec<String>,
}

fn lenient_confidence<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_f64())
}

/// String entries of a `sources` array. Anything else is dropped.
fn lenient_sources<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(source) => Some(source),
            _ => None,
        })
        .collect())
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

// =============================================================================
// RESPONSE RULES
// =============================================================================

/// Whether `status` is in the HTTP success range.
#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Turn a raw HTTP response into an answer or a failure.
///
/// # Errors
///
/// - [`ChatError::Status`] for any non-2xx status, carrying the server's
///   `error` field when the body has one.
/// - [`ChatError::Parse`] when a 2xx body is not JSON or lacks a string
///   `answer`.
pub fn decode_answer(status: u16, status_text: &str, body: &str) -> Result<AnswerResponse, ChatError> {
    if !is_success(status) {
        return Err(ChatError::Status { status, status_text: status_text.to_owned(), detail: error_detail(body) });
    }
    serde_json::from_str::<AnswerResponse>(body).map_err(|e| ChatError::Parse(e.to_string()))
}

fn error_detail(body: &str) -> Option<String> {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.error.trim().is_empty() => Some(parsed.error),
        _ => None,
    }
}

// =============================================================================
// TRANSPORT
// =============================================================================

/// Sends one question to an endpoint and yields the decoded answer.
///
/// Futures are not required to be `Send`; the browser runs everything on one
/// thread.
pub trait AnswerClient {
    fn fetch_answer(
        &self,
        endpoint: &str,
        question: &str,
    ) -> impl std::future::Future<Output = Result<AnswerResponse, ChatError>>;
}
