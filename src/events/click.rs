use crate::constants::{MODAL_CLOSE_ID, MODAL_ID, NAV_LINK_SELECTOR, PROJECT_CARD_SELECTOR, PROJECT_ID_ATTR};
use crate::core::projects::ModalController;
use crate::core::spy::ScrollSpy;
use crate::core::ScrollEngine;
use crate::dom;
use crate::input;
use crate::views::ModalDom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Project cards open the modal; the close button and the backdrop close it.
pub fn wire_modal(
    document: &web::Document,
    modal: Rc<RefCell<ModalController>>,
    modal_dom: ModalDom,
) {
    for card in dom::query_all(document, PROJECT_CARD_SELECTOR) {
        let Some(id) = card.get_attribute(PROJECT_ID_ATTR) else {
            continue;
        };
        let modal = modal.clone();
        let modal_dom = modal_dom.clone();
        dom::add_listener::<web::MouseEvent>(card.as_ref(), "click", move |_| {
            let commands = modal.borrow_mut().open(&id);
            modal_dom.apply(commands);
        });
    }

    let close_modal = modal.clone();
    let close_dom = modal_dom.clone();
    dom::add_click_listener(document, MODAL_CLOSE_ID, move |_| {
        let commands = close_modal.borrow_mut().close();
        close_dom.apply(commands);
    });

    // only clicks on the backdrop itself, not bubbling from the dialog
    let backdrop = modal_dom.modal.clone();
    dom::add_listener::<web::MouseEvent>(backdrop.as_ref(), "click", move |ev| {
        let on_backdrop = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map(|el| el.id() == MODAL_ID)
            .unwrap_or(false);
        if on_backdrop {
            let commands = modal.borrow_mut().close();
            modal_dom.apply(commands);
        }
    });
}

/// In-page anchors scroll the virtual scroller instead of the document.
pub fn wire_nav_anchors(
    document: &web::Document,
    scroll: Rc<RefCell<ScrollEngine>>,
    spy: Rc<RefCell<ScrollSpy>>,
) {
    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let href = link.get_attribute("href").unwrap_or_default();
        let Some(section) = input::anchor_target(&href).map(str::to_string) else {
            continue;
        };
        let scroll = scroll.clone();
        let spy = spy.clone();
        dom::add_listener::<web::MouseEvent>(link.as_ref(), "click", move |ev| {
            ev.prevent_default();
            match spy.borrow().section_top(&section) {
                Some(top) => scroll.borrow_mut().scroll_to(top),
                None => log::warn!("[nav] no section #{}", section),
            }
        });
    }
}
