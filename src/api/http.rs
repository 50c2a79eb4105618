//! Native answer transport over `reqwest`.

use super::{AnswerClient, AnswerRequest, AnswerResponse, decode_answer, is_success};
use crate::error::ChatError;

/// POSTs questions with a shared `reqwest::Client`. No timeout and no retry:
/// a request runs until the transport gives up.
#[derive(Debug, Clone)]
pub struct HttpAnswerClient {
    http: reqwest::Client,
}

impl HttpAnswerClient {
    /// # Errors
    ///
    /// Returns [`ChatError::Network`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, ChatError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ChatError::Network(e.to_string()))?;
        Ok(Self { http })
    }

    #[must_use]
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl AnswerClient for HttpAnswerClient {
    async fn fetch_answer(&self, endpoint: &str, question: &str) -> Result<AnswerResponse, ChatError> {
        let response = self
            .http
            .post(endpoint)
            .json(&AnswerRequest::new(question))
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let status_text = response.status().canonical_reason().unwrap_or_default();
        // A failed status stays a status failure even if its body is lost.
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) if !is_success(status) => {
                log::debug!("unreadable body on HTTP {status}: {err}");
                String::new()
            }
            Err(err) => return Err(ChatError::Network(err.to_string())),
        };

        decode_answer(status, status_text, &body)
    }
}
