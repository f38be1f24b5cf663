use crate::constants::{EMITTER_SELECTOR, TRANSMITTING_HTML};
use crate::core::burst::BurstField;
use crate::core::Rgba;
use crate::dom;
use crate::views::{element_center, ContactState};
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct ContactWiring {
    pub form: web::HtmlFormElement,
    pub button: Option<web::HtmlElement>,
    pub state: Rc<RefCell<ContactState>>,
    pub bursts: Rc<RefCell<BurstField>>,
    pub rng: Rc<RefCell<StdRng>>,
    pub spark_color: Rgba,
}

/// Typing emits sparks at the emitter; submitting starts the fake transmission.
pub fn wire_contact_form(document: &web::Document, w: ContactWiring) {
    let emitter = document
        .query_selector(EMITTER_SELECTOR)
        .ok()
        .flatten();
    if let Some(emitter) = emitter {
        let bursts = w.bursts.clone();
        let rng = w.rng.clone();
        let color = w.spark_color;
        dom::add_listener::<web::Event>(w.form.as_ref(), "input", move |_| {
            let origin = element_center(&emitter);
            let mut rng = rng.borrow_mut();
            bursts.borrow_mut().spark(origin, color, &mut *rng);
        });
    } else {
        log::warn!("[contact] missing {}", EMITTER_SELECTOR);
    }

    let state = w.state.clone();
    let button = w.button.clone();
    dom::add_listener::<web::Event>(w.form.as_ref(), "submit", move |ev| {
        ev.prevent_default();
        let mut state = state.borrow_mut();
        if !state.form.submit() {
            return;
        }
        if let Some(btn) = &button {
            state.saved_label = Some(btn.inner_html());
            btn.set_inner_html(TRANSMITTING_HTML);
        }
    });
}
