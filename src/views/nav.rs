use crate::constants::{NAVBAR_SOLID_CLASSES, NAV_ACTIVE_CLASS, NAV_IDLE_CLASS};
use crate::core::spy::{ScrollSpy, SpyChange};
use crate::core::{FrameTime, ScrollEngine, Tickable};
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Scroll-spy highlighting and the navbar background.
pub struct NavView {
    pub scroll: Rc<RefCell<ScrollEngine>>,
    pub spy: Rc<RefCell<ScrollSpy>>,
    pub navbar: Option<web::HtmlElement>,
    pub links: Vec<web::HtmlElement>,
}

impl NavView {
    fn highlight(&self, active: Option<&str>) {
        for link in &self.links {
            let href = link.get_attribute("href").unwrap_or_default();
            let on = active
                .map(|id| input::link_matches_section(&href, id))
                .unwrap_or(false);
            let cl = link.class_list();
            if on {
                _ = cl.remove_1(NAV_IDLE_CLASS);
                _ = cl.add_1(NAV_ACTIVE_CLASS);
            } else {
                _ = cl.remove_1(NAV_ACTIVE_CLASS);
                _ = cl.add_1(NAV_IDLE_CLASS);
            }
        }
    }

    fn set_solid(&self, solid: bool) {
        let Some(nav) = &self.navbar else { return };
        let cl = nav.class_list();
        for class in NAVBAR_SOLID_CLASSES {
            _ = if solid { cl.add_1(class) } else { cl.remove_1(class) };
        }
    }
}

impl Tickable for NavView {
    fn on_frame(&mut self, _frame: &FrameTime) {
        let offset = self.scroll.borrow().get_offset();
        let changes = self.spy.borrow_mut().update(offset);
        for change in changes {
            match change {
                SpyChange::Active(id) => self.highlight(id.as_deref()),
                SpyChange::Navbar { solid } => self.set_solid(solid),
            }
        }
    }
}
