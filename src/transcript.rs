//! Ordered, append-only message list for the current page session.
//!
//! DESIGN
//! ======
//! The only non-append mutation is removing the trailing loading placeholder.
//! Removal is by position, guarded by a kind check, which is sound because at
//! most one placeholder exists and it is always the last element. Both halves
//! of that invariant are enforced here rather than by callers.

use crate::error::TranscriptError;
use crate::message::{Message, Timestamp};

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a non-loading message.
    ///
    /// # Errors
    ///
    /// Rejects loading messages and any append while a placeholder is pending.
    pub fn push(&mut self, message: Message) -> Result<(), TranscriptError> {
        if message.is_loading() {
            return Err(TranscriptError::LoadingKind);
        }
        if self.has_pending_placeholder() {
            return Err(TranscriptError::PlaceholderPending);
        }
        self.messages.push(message);
        Ok(())
    }

    /// Append the loading placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`TranscriptError::PlaceholderPending`] if one is already shown.
    pub fn push_loading(&mut self, at: Timestamp) -> Result<(), TranscriptError> {
        if self.has_pending_placeholder() {
            return Err(TranscriptError::PlaceholderPending);
        }
        self.messages.push(Message::loading(at));
        Ok(())
    }

    /// Remove and return the last message if it is the loading placeholder.
    pub fn pop_loading(&mut self) -> Option<Message> {
        if self.has_pending_placeholder() {
            self.messages.pop()
        } else {
            None
        }
    }

    #[must_use]
    pub fn has_pending_placeholder(&self) -> bool {
        self.messages.last().is_some_and(Message::is_loading)
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
