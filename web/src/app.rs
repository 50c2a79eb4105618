//! Mounted chat: the shared controller plus its transport.
//!
//! DOM callbacks hold an `Rc<App>`. Each submission is spawned on the local
//! executor through `qa_desk::controller::drive_shared`, which never keeps the
//! controller borrowed across the network await.

use std::cell::RefCell;
use std::rc::Rc;

use qa_desk::controller::{ChatController, Outcome, PendingQuestion, drive_shared};

use crate::clock::BrowserClock;
use crate::dom::DomViewPort;
use crate::net::GlooAnswerClient;

pub type PageController = ChatController<DomViewPort, BrowserClock>;

pub struct App {
    controller: RefCell<PageController>,
    client: GlooAnswerClient,
}

impl App {
    #[must_use]
    pub fn new(controller: PageController, client: GlooAnswerClient) -> Self {
        Self { controller: RefCell::new(controller), client }
    }

    /// Form submitted: ask whatever is in the question field.
    pub fn submit_input(self: &Rc<Self>) {
        let Some(text) = self.with_controller(|ctrl| ctrl.view().input_value()) else {
            return;
        };
        self.spawn(move |ctrl| ctrl.submit_question(&text));
    }

    /// Example button clicked.
    pub fn select_example(self: &Rc<Self>, text: String) {
        self.spawn(move |ctrl| ctrl.select_example(&text));
    }

    /// Question field focused by the user.
    ///
    /// Focus moved by the controller itself arrives while it is borrowed and
    /// is skipped, so the error it just showed stays visible.
    pub fn input_focused(&self) {
        if let Ok(mut ctrl) = self.controller.try_borrow_mut() {
            ctrl.input_focused();
        }
    }

    #[must_use]
    pub fn endpoint_url(&self) -> String {
        self.with_controller(|ctrl| ctrl.endpoint().url().to_owned())
            .unwrap_or_default()
    }

    /// Run `f` on the controller unless a callback already holds it.
    pub fn with_controller<T>(&self, f: impl FnOnce(&mut PageController) -> T) -> Option<T> {
        match self.controller.try_borrow_mut() {
            Ok(mut ctrl) => Some(f(&mut *ctrl)),
            Err(_) => {
                log::warn!("chat controller busy; event dropped");
                None
            }
        }
    }

    fn spawn<F>(self: &Rc<Self>, start: F)
    where
        F: FnOnce(&mut PageController) -> Option<PendingQuestion> + 'static,
    {
        let app = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            match drive_shared(&app.controller, &app.client, start).await {
                Some(Outcome::Answered) => log::debug!("question answered"),
                Some(Outcome::Failed(err)) => log::debug!("question failed: {err}"),
                None => {}
            }
        });
    }
}
