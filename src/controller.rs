//! Chat controller: user input → network call → rendered output.
//!
//! SYSTEM CONTEXT
//! ==============
//! One controller per page. Adapters forward input events
//! ([`ChatController::submit_question`], [`ChatController::select_example`],
//! [`ChatController::input_focused`]); the controller pushes every visible
//! change back out through its [`ViewPort`].
//!
//! STATE MACHINE
//! =============
//! `Idle → Submitting → {Answered | Failed} → Idle`. A submission starts with
//! [`ChatController::submit_question`], which hands back a [`PendingQuestion`]
//! token, and ends when that token is passed to [`ChatController::complete`].
//! Nothing can start while `Submitting`, so at most one request is in flight
//! and the loading placeholder is always the last message.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is caught in `complete`, shown once in the error banner and
//! logged. The controller is always usable again afterwards.

use std::cell::RefCell;

use serde::Serialize;

use crate::api::{AnswerClient, AnswerResponse};
use crate::clock::Clock;
use crate::config::Endpoint;
use crate::error::{ChatError, ConfigError, TranscriptError};
use crate::message::{Message, MessageKind};
use crate::transcript::Transcript;
use crate::view::{ViewPort, render_messages};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Submitting,
}

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Answered,
    Failed(ChatError),
}

/// Proof of an in-flight submission. Carries what the request needs.
#[derive(Debug)]
#[must_use = "a pending question must be passed to `complete`"]
pub struct PendingQuestion {
    question: String,
    endpoint: String,
}

impl PendingQuestion {
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Diagnostic view of the controller state.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub messages: Vec<Message>,
    pub phase: Phase,
    pub endpoint: String,
    pub error: Option<String>,
}

pub struct ChatController<V, K> {
    view: V,
    clock: K,
    transcript: Transcript,
    endpoint: Endpoint,
    phase: Phase,
    error: Option<String>,
}

impl<V: ViewPort, K: Clock> ChatController<V, K> {
    #[must_use]
    pub fn new(view: V, clock: K, endpoint: Endpoint) -> Self {
        Self { view, clock, transcript: Transcript::new(), endpoint, phase: Phase::Idle, error: None }
    }

    // --- Submission cycle ---

    /// Start a submission for `text`.
    ///
    /// Returns `None` without touching anything while a request is in flight.
    /// An empty question shows the validation error and returns `None`.
    pub fn submit_question(&mut self, text: &str) -> Option<PendingQuestion> {
        if self.phase == Phase::Submitting {
            log::debug!("submission ignored: request already in flight");
            return None;
        }

        let question = text.trim();
        if question.is_empty() {
            self.show_error(&ChatError::Validation.user_message());
            return None;
        }

        self.clear_error();
        self.phase = Phase::Submitting;
        self.view.set_submit_enabled(false);

        if let Err(err) = self.transcript.push(Message::question(question, self.clock.now())) {
            log::error!("question not recorded: {err}");
            self.finish();
            return None;
        }
        self.view.set_input("");
        if let Err(err) = self.transcript.push_loading(self.clock.now()) {
            log::warn!("loading placeholder not shown: {err}");
        }
        self.appended();

        log::debug!("submitting question to {}", self.endpoint.url());
        Some(PendingQuestion { question: question.to_owned(), endpoint: self.endpoint.url().to_owned() })
    }

    /// Finish the submission `pending` with the network result.
    pub fn complete(&mut self, pending: PendingQuestion, result: Result<AnswerResponse, ChatError>) -> Outcome {
        if self.transcript.pop_loading().is_none() {
            log::warn!("no loading placeholder to remove");
        }

        let outcome = match result {
            Ok(response) => {
                log::info!("answer received for {} ({} chars)", pending.endpoint, response.answer.len());
                if let Err(err) = self.transcript.push(Message::answer(response.answer, self.clock.now())) {
                    log::error!("answer not recorded: {err}");
                }
                self.appended();
                Outcome::Answered
            }
            Err(err) => {
                self.render();
                match &err {
                    ChatError::Status { detail: Some(detail), .. } => log::error!("{err}: {detail}"),
                    _ => log::error!("{err}"),
                }
                self.show_error(&err.user_message());
                Outcome::Failed(err)
            }
        };

        self.finish();
        outcome
    }

    /// Run a whole submission cycle against `client`.
    pub async fn ask<C: AnswerClient>(&mut self, client: &C, text: &str) -> Option<Outcome> {
        let pending = self.submit_question(text)?;
        let result = client.fetch_answer(pending.endpoint(), pending.question()).await;
        Some(self.complete(pending, result))
    }

    fn finish(&mut self) {
        self.phase = Phase::Idle;
        self.view.set_submit_enabled(true);
        self.view.focus_input();
    }

    // --- Rendering ---

    /// Redraw the whole message list.
    pub fn render(&mut self) {
        let offset = self.clock.utc_offset_minutes(self.clock.now());
        let views = render_messages(self.transcript.messages(), offset);
        self.view.render(&views);
    }

    fn appended(&mut self) {
        self.render();
        if !self.transcript.is_empty() {
            self.view.hide_welcome();
        }
        self.view.scroll_to_bottom();
    }

    // --- Auxiliary entry points ---

    /// Put a preset example in the input and submit it.
    pub fn select_example(&mut self, text: &str) -> Option<PendingQuestion> {
        if self.phase == Phase::Submitting || text.trim().is_empty() {
            return None;
        }
        self.view.set_input(text);
        self.submit_question(text)
    }

    /// Retarget later submissions.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`]; the endpoint is unchanged.
    pub fn set_endpoint(&mut self, raw: &str) -> Result<(), ConfigError> {
        self.endpoint.retarget(raw)?;
        log::info!("answer endpoint set to {}", self.endpoint.url());
        Ok(())
    }

    pub fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_owned());
        self.view.show_error(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
        self.view.clear_error();
    }

    /// The question field gained focus.
    pub fn input_focused(&mut self) {
        self.clear_error();
    }

    /// Append an arbitrary message for debugging.
    ///
    /// # Errors
    ///
    /// Rejects the loading kind and any append while a request is in flight.
    pub fn add_custom_message(&mut self, kind: MessageKind, text: &str) -> Result<(), TranscriptError> {
        self.transcript.push(Message::new(kind, text, self.clock.now()))?;
        self.appended();
        Ok(())
    }

    // --- Queries ---

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        self.transcript.messages()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Text currently in the error banner.
    #[must_use]
    pub fn error_banner(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            messages: self.transcript.messages().to_vec(),
            phase: self.phase,
            endpoint: self.endpoint.url().to_owned(),
            error: self.error.clone(),
        }
    }
}

/// Run a submission cycle on a controller shared with UI callbacks.
///
/// The borrow is released while the request is pending, so input that
/// arrives meanwhile reaches the controller (and a second submission is
/// rejected by the in-flight phase rather than by a borrow panic).
pub async fn ask_shared<V, K, C>(controller: &RefCell<ChatController<V, K>>, client: &C, text: &str) -> Option<Outcome>
where
    V: ViewPort,
    K: Clock,
    C: AnswerClient,
{
    drive_shared(controller, client, |ctrl| ctrl.submit_question(text)).await
}

/// Like [`ask_shared`], with the submission started by `start`
/// (e.g. [`ChatController::select_example`]).
pub async fn drive_shared<V, K, C, F>(controller: &RefCell<ChatController<V, K>>, client: &C, start: F) -> Option<Outcome>
where
    V: ViewPort,
    K: Clock,
    C: AnswerClient,
    F: FnOnce(&mut ChatController<V, K>) -> Option<PendingQuestion>,
{
    let pending = {
        let mut ctrl = controller.borrow_mut();
        start(&mut *ctrl)
    }?;
    let result = client.fetch_answer(pending.endpoint(), pending.question()).await;
    Some(controller.borrow_mut().complete(pending, result))
}
