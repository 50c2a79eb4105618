//! DOM event listeners wired to the mounted [`App`].
//!
//! Listeners live for the page's lifetime, so their closures are leaked with
//! `Closure::forget`. Missing elements just get no listener.

use std::rc::Rc;

use qa_desk::config::ChatConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event};

use crate::app::App;

pub fn attach(app: &Rc<App>, document: &Document, config: &ChatConfig) {
    let ids = &config.elements;

    if let Some(form) = document.get_element_by_id(&ids.form) {
        let app = Rc::clone(app);
        listen(&form, "submit", move |ev| {
            ev.prevent_default();
            app.submit_input();
        });
    }

    if let Some(input) = document.get_element_by_id(&ids.input) {
        let app = Rc::clone(app);
        listen(&input, "focus", move |_| app.input_focused());
    }

    let attribute = format!("data-{}", config.example_data_key);
    let buttons = example_buttons(document, &config.example_selector);
    log::debug!("binding {} example buttons", buttons.len());
    for button in buttons {
        let app = Rc::clone(app);
        let attribute = attribute.clone();
        let target = button.clone();
        listen(&button, "click", move |_| {
            if let Some(text) = target.get_attribute(&attribute) {
                app.select_example(text);
            }
        });
    }
}

fn example_buttons(document: &Document, selector: &str) -> Vec<Element> {
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(err) => {
            log::warn!("example selector '{selector}' rejected: {err:?}");
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn listen(target: &Element, event: &str, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        log::warn!("could not listen for {event}: {err:?}");
        return;
    }
    cb.forget();
}
