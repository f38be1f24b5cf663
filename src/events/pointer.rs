use crate::core::{PointerTracker, ScrollEngine};
use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position for the particle field and the cursor visuals.
pub fn wire_pointermove(pointer: Rc<RefCell<PointerTracker>>) {
    let Some(window) = web::window() else { return };
    dom::add_listener::<web::PointerEvent>(window.as_ref(), "pointermove", move |ev| {
        pointer
            .borrow_mut()
            .on_move(ev.client_x() as f32, ev.client_y() as f32);
    });
}

/// Wheel input drives the virtual scroll target. The listener is non-passive
/// so native scrolling can be suppressed.
pub fn wire_wheel(scroll: Rc<RefCell<ScrollEngine>>) {
    let Some(window) = web::window() else { return };
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        let (_, vh) = dom::viewport_size();
        let delta = input::wheel_delta_px(ev.delta_y(), ev.delta_mode(), vh);
        scroll.borrow_mut().on_wheel(delta);
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
