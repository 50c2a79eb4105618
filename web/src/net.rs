//! Answer transport over `gloo-net` (the browser `fetch` API).
//!
//! ERROR HANDLING
//! ==============
//! A rejected `fetch` (offline, DNS, CORS) becomes `ChatError::Network` with
//! the browser's message, e.g. "Failed to fetch". Status and body rules live
//! in `qa_desk::api::decode_answer`.

use qa_desk::api::{AnswerClient, AnswerRequest, AnswerResponse, decode_answer, is_success};
use qa_desk::error::ChatError;

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooAnswerClient;

impl AnswerClient for GlooAnswerClient {
    async fn fetch_answer(&self, endpoint: &str, question: &str) -> Result<AnswerResponse, ChatError> {
        let request = gloo_net::http::Request::post(endpoint)
            .json(&AnswerRequest::new(question))
            .map_err(|e| ChatError::Parse(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ChatError::Network(describe(&e)))?;
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) if !is_success(status) => {
                log::debug!("unreadable body on HTTP {status}: {}", describe(&err));
                String::new()
            }
            Err(err) => return Err(ChatError::Network(describe(&err))),
        };
        decode_answer(status, &response.status_text(), &body)
    }
}

fn describe(err: &gloo_net::Error) -> String {
    match err {
        gloo_net::Error::JsError(js) => js.message.clone(),
        other => other.to_string(),
    }
}
