//! # qa-desk-web
//!
//! Browser adapter for the question/answer chat. Binds existing page markup
//! (looked up by id and class marker) to a `qa_desk` controller, sends
//! questions with `gloo-net`, and renders the message list with `web-sys`.
//!
//! The page owns its markup and styling. It loads the WASM bundle and calls
//! [`mount`] once the DOM is ready, optionally passing a JSON configuration
//! (see `qa_desk::config::ChatConfig`).
//!
//! All DOM and network code is gated behind the `browser` feature.

pub mod debug;

#[cfg(feature = "browser")]
pub mod app;
#[cfg(feature = "browser")]
pub mod bindings;
#[cfg(feature = "browser")]
pub mod clock;
#[cfg(feature = "browser")]
pub mod dom;
#[cfg(feature = "browser")]
pub mod net;

#[cfg(feature = "browser")]
use wasm_bindgen::prelude::*;

/// Bind the chat to the current page.
///
/// Returns the diagnostic handle when the configuration enables
/// `debug_handle`; the caller decides where to keep it.
///
/// # Errors
///
/// Fails on invalid configuration or when there is no window/document.
/// Missing page elements are not errors.
#[cfg(feature = "browser")]
#[wasm_bindgen]
pub fn mount(config_json: Option<String>) -> Result<Option<debug::DebugHandle>, JsValue> {
    use std::rc::Rc;

    use qa_desk::config::ChatConfig;
    use qa_desk::controller::ChatController;

    console_error_panic_hook::set_once();

    let config = ChatConfig::from_json(config_json.as_deref().unwrap_or_default()).map_err(to_js_error)?;
    init_logging(&config);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let origin = window.location().origin().unwrap_or_default();
    let endpoint = config.endpoint(&origin).map_err(to_js_error)?;

    let view = dom::DomViewPort::bind(&document, &config);
    let controller = ChatController::new(view, clock::BrowserClock, endpoint);
    let app = Rc::new(app::App::new(controller, net::GlooAnswerClient));
    bindings::attach(&app, &document, &config);

    log::info!("chat mounted, answering via {}", app.endpoint_url());
    Ok(config
        .debug_handle
        .then(|| debug::DebugHandle::new(Rc::clone(&app))))
}

#[cfg(feature = "browser")]
fn init_logging(config: &qa_desk::config::ChatConfig) {
    let (level, invalid) = match config.log_level() {
        Ok(level) => (level, None),
        Err(err) => (log::Level::Info, Some(err)),
    };
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
    if let Some(err) = invalid {
        log::warn!("{err}; logging at info");
    }
}

#[cfg(feature = "browser")]
fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
