use crate::core::follower::{CoordsReadout, CursorFollower};
use crate::core::{FrameTime, PointerTracker, Tickable};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct CursorView {
    pub pointer: Rc<RefCell<PointerTracker>>,
    pub follower: CursorFollower,
    pub readout: CoordsReadout,
    pub cursor_el: Option<web::HtmlElement>,
    pub follower_el: Option<web::HtmlElement>,
    pub coords_el: Option<web::HtmlElement>,
}

impl Tickable for CursorView {
    fn on_frame(&mut self, frame: &FrameTime) {
        let pointer = self.pointer.borrow().get();
        self.follower.update(&pointer, frame.tween_dt_sec);
        if let Some(el) = &self.cursor_el {
            let p = self.follower.cursor_translate();
            dom::set_translate(el, p.x, p.y);
        }
        if let Some(el) = &self.follower_el {
            let p = self.follower.follower_translate();
            dom::set_translate(el, p.x, p.y);
        }
        if let Some(text) = self.readout.tick(&pointer, frame.dt_sec) {
            if let Some(el) = &self.coords_el {
                el.set_inner_text(&text);
            }
        }
    }
}
