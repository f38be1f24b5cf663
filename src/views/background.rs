use crate::canvas::CanvasSurface;
use crate::core::burst::BurstField;
use crate::core::{FrameTime, ParticleField, PointerTracker, Tickable};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;

/// Full-screen particle field; contact-form bursts draw on top of it.
pub struct BackgroundView {
    pub field: ParticleField,
    pub surface: CanvasSurface,
    pub pointer: Rc<RefCell<PointerTracker>>,
    pub bursts: Rc<RefCell<BurstField>>,
}

impl BackgroundView {
    pub fn resize(&mut self) {
        let (w, h) = dom::sync_canvas_size(self.surface.canvas());
        log::info!("[background] resize {}x{}", w, h);
        self.field.resize(self.surface.size());
    }
}

impl Tickable for BackgroundView {
    fn on_frame(&mut self, frame: &FrameTime) {
        let pointer = self.pointer.borrow().get();
        self.field.step(&pointer);
        self.field.render(&mut self.surface);

        let mut bursts = self.bursts.borrow_mut();
        bursts.tick(frame.tween_dt_sec);
        bursts.render(&mut self.surface);
    }
}
