//! View-port adapter between the controller and a concrete UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller never touches a toolkit. It pushes state out through
//! [`ViewPort`]; adapters call back into the controller for input
//! (`submit_question`, `select_example`, `input_focused`). Rendering is
//! split into a pure model ([`render_messages`]) and the adapter's job of
//! turning that model into nodes.

use crate::message::{Message, MessageKind};

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// What a message element shows in its content slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    Text(String),
    /// Animated three-dot placeholder for a pending answer.
    TypingIndicator,
}

/// Render model of one message element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub kind: MessageKind,
    pub body: MessageBody,
    pub time_label: String,
}

impl MessageView {
    /// Element class list, e.g. `message answer`.
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("message {}", self.kind.as_str())
    }
}

/// Build the full render model, one entry per message, in order.
#[must_use]
pub fn render_messages(messages: &[Message], utc_offset_minutes: i32) -> Vec<MessageView> {
    messages
        .iter()
        .map(|message| {
            let body = match message.kind() {
                MessageKind::Loading => MessageBody::TypingIndicator,
                _ => MessageBody::Text(message.text().to_owned()),
            };
            MessageView {
                kind: message.kind(),
                body,
                time_label: message.created_at().time_label(utc_offset_minutes),
            }
        })
        .collect()
}

/// Output side of the UI. Adapters whose elements are missing treat the
/// matching calls as no-ops.
pub trait ViewPort {
    /// Replace every rendered message node with `messages`.
    fn render(&mut self, messages: &[MessageView]);

    fn set_input(&mut self, text: &str);

    fn focus_input(&mut self);

    fn set_submit_enabled(&mut self, enabled: bool);

    fn show_error(&mut self, message: &str);

    fn clear_error(&mut self);

    fn scroll_to_bottom(&mut self) {}

    /// Remove the welcome block once the list has content.
    fn hide_welcome(&mut self) {}
}
