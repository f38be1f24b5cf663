use crate::core::projects::ModalController;
use crate::views::ModalDom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    modal: &Rc<RefCell<ModalController>>,
    modal_dom: &ModalDom,
) {
    if ev.key().as_str() == "Escape" {
        let commands = modal.borrow_mut().close();
        if !commands.is_empty() {
            modal_dom.apply(commands);
        }
    }
}

pub fn wire_global_keydown(modal: Rc<RefCell<ModalController>>, modal_dom: ModalDom) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                super::keyboard::handle_global_keydown(&ev, &modal, &modal_dom);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
