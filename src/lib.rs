//! Headless core of the question/answer chat front end.
//!
//! The browser crate (`web/`, `qa-desk-web`) binds page markup to a [`controller::ChatController`]
//! through the [`view::ViewPort`] trait and sends questions with its own
//! [`api::AnswerClient`]. Everything here is toolkit-independent so the full
//! submit → request → render cycle runs in native tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Submission state machine and UI orchestration |
//! | [`transcript`] | Ordered message list with the loading-placeholder invariant |
//! | [`message`] | Message records, kinds and timestamps |
//! | [`view`] | View-port trait and the pure render model |
//! | [`api`] | Wire types, response decoding and answer transports |
//! | [`config`] | Page configuration and endpoint resolution |
//! | [`clock`] | Timestamp source |
//! | [`error`] | Error kinds surfaced at the UI boundary |

pub mod api;
pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod message;
pub mod transcript;
pub mod view;
