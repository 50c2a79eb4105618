//! `ViewPort` over the page's own elements.
//!
//! SYSTEM CONTEXT
//! ==============
//! Elements are looked up once at mount by the ids in `ChatConfig`. Each one
//! is optional: a missing element turns the matching view call into a no-op.
//! Rendered message nodes are `div.message.<kind>` children of the container;
//! everything else in the container (the welcome block until it is removed)
//! is left alone by `render`.

use qa_desk::config::ChatConfig;
use qa_desk::view::{MessageBody, MessageView, ViewPort};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement};

const MESSAGE_SELECTOR: &str = ".message";
const ERROR_ACTIVE_CLASS: &str = "active";
const TYPING_DOTS: usize = 3;

pub struct DomViewPort {
    document: Document,
    input: Option<HtmlInputElement>,
    submit: Option<Element>,
    container: Option<Element>,
    error: Option<Element>,
    welcome_selector: String,
}

impl DomViewPort {
    #[must_use]
    pub fn bind(document: &Document, config: &ChatConfig) -> Self {
        let ids = &config.elements;
        let input = document
            .get_element_by_id(&ids.input)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        let view = Self {
            document: document.clone(),
            input,
            submit: document.get_element_by_id(&ids.submit),
            container: document.get_element_by_id(&ids.container),
            error: document.get_element_by_id(&ids.error),
            welcome_selector: config.welcome_selector.clone(),
        };
        for (name, present) in [
            ("input", view.input.is_some()),
            ("submit", view.submit.is_some()),
            ("container", view.container.is_some()),
            ("error", view.error.is_some()),
        ] {
            if !present {
                log::warn!("chat {name} element not found; its updates are skipped");
            }
        }
        view
    }

    /// Current text of the question field.
    #[must_use]
    pub fn input_value(&self) -> String {
        self.input
            .as_ref()
            .map(HtmlInputElement::value)
            .unwrap_or_default()
    }

    fn div(&self, class_name: &str) -> Result<Element, JsValue> {
        let el = self.document.create_element("div")?;
        el.set_class_name(class_name);
        Ok(el)
    }

    fn message_element(&self, message: &MessageView) -> Result<Element, JsValue> {
        let root = self.div(&message.class_name())?;

        let content = self.div("message-content")?;
        match &message.body {
            MessageBody::Text(text) => content.set_text_content(Some(text)),
            MessageBody::TypingIndicator => {
                let indicator = self.div("typing-indicator")?;
                for _ in 0..TYPING_DOTS {
                    indicator.append_child(&self.div("typing-dot")?)?;
                }
                content.append_child(&indicator)?;
            }
        }
        root.append_child(&content)?;

        let time = self.div("message-time")?;
        time.set_text_content(Some(&message.time_label));
        root.append_child(&time)?;

        Ok(root)
    }
}

fn remove_matching(container: &Element, selector: &str) {
    let Ok(nodes) = container.query_selector_all(selector) else {
        return;
    };
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            el.remove();
        }
    }
}

fn warn_on_err(what: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("{what} failed: {err:?}");
    }
}

impl ViewPort for DomViewPort {
    fn render(&mut self, messages: &[MessageView]) {
        let Some(container) = &self.container else {
            return;
        };
        remove_matching(container, MESSAGE_SELECTOR);
        for message in messages {
            let appended = self
                .message_element(message)
                .and_then(|el| container.append_child(&el).map(|_| ()));
            warn_on_err("rendering message", appended);
        }
    }

    fn set_input(&mut self, text: &str) {
        if let Some(input) = &self.input {
            input.set_value(text);
        }
    }

    fn focus_input(&mut self) {
        if let Some(input) = &self.input {
            warn_on_err("focusing input", input.focus());
        }
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        let Some(submit) = &self.submit else {
            return;
        };
        if enabled {
            warn_on_err("enabling submit", submit.remove_attribute("disabled"));
        } else {
            warn_on_err("disabling submit", submit.set_attribute("disabled", ""));
        }
    }

    fn show_error(&mut self, message: &str) {
        if let Some(error) = &self.error {
            error.set_text_content(Some(message));
            warn_on_err("showing error", error.class_list().add_1(ERROR_ACTIVE_CLASS));
        }
    }

    fn clear_error(&mut self) {
        if let Some(error) = &self.error {
            warn_on_err("clearing error", error.class_list().remove_1(ERROR_ACTIVE_CLASS));
            error.set_text_content(Some(""));
        }
    }

    // Deferred so the browser has laid out the freshly rendered nodes.
    fn scroll_to_bottom(&mut self) {
        if let Some(container) = self.container.clone() {
            gloo_timers::callback::Timeout::new(0, move || {
                container.set_scroll_top(container.scroll_height());
            })
            .forget();
        }
    }

    fn hide_welcome(&mut self) {
        if let Some(container) = &self.container {
            remove_matching(container, &self.welcome_selector);
        }
    }
}
