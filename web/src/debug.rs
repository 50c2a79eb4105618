//! Optional diagnostic handle returned by `mount`.
//!
//! Nothing is installed on `window`; the hosting page receives the handle
//! only when `debug_handle` is enabled and keeps it wherever it likes.

use qa_desk::message::MessageKind;

#[cfg(test)]
#[path = "debug_test.rs"]
mod debug_test;

/// Kinds a custom debug message may take. Loading placeholders belong to
/// submissions only.
///
/// # Errors
///
/// Returns a description of the rejected name.
pub fn parse_custom_kind(raw: &str) -> Result<MessageKind, String> {
    match MessageKind::parse(raw) {
        Some(MessageKind::Loading) => Err("loading messages are created by submissions only".to_owned()),
        Some(kind) => Ok(kind),
        None => Err(format!("unknown message kind '{raw}' (expected question, answer or error)")),
    }
}

#[cfg(feature = "browser")]
pub use handle::DebugHandle;

#[cfg(feature = "browser")]
mod handle {
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::app::App;

    #[wasm_bindgen]
    pub struct DebugHandle {
        app: Rc<App>,
    }

    impl DebugHandle {
        pub(crate) fn new(app: Rc<App>) -> Self {
            Self { app }
        }

        fn busy() -> JsValue {
            JsValue::from_str("chat controller busy")
        }
    }

    #[wasm_bindgen]
    impl DebugHandle {
        /// Retarget later submissions.
        #[wasm_bindgen(js_name = setEndpoint)]
        pub fn set_endpoint(&self, endpoint: &str) -> Result<(), JsValue> {
            self.app
                .with_controller(|ctrl| ctrl.set_endpoint(endpoint))
                .ok_or_else(Self::busy)?
                .map_err(|e| JsValue::from_str(&e.to_string()))
        }

        #[wasm_bindgen(js_name = addCustomMessage)]
        pub fn add_custom_message(&self, kind: &str, text: &str) -> Result<(), JsValue> {
            let kind = super::parse_custom_kind(kind).map_err(|e| JsValue::from_str(&e))?;
            self.app
                .with_controller(|ctrl| ctrl.add_custom_message(kind, text))
                .ok_or_else(Self::busy)?
                .map_err(|e| JsValue::from_str(&e.to_string()))
        }

        /// Submit `question` as if typed into the form.
        pub fn ask(&self, question: &str) {
            let question = question.to_owned();
            self.app.select_example(question);
        }

        /// Controller state as JSON.
        pub fn snapshot(&self) -> Result<String, JsValue> {
            let snapshot = self
                .app
                .with_controller(|ctrl| ctrl.snapshot())
                .ok_or_else(Self::busy)?;
            serde_json::to_string(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
        }

        #[wasm_bindgen(js_name = messageCount)]
        pub fn message_count(&self) -> usize {
            self.app
                .with_controller(|ctrl| ctrl.messages().len())
                .unwrap_or_default()
        }
    }
}
