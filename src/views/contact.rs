use crate::constants::SENT_HTML;
use crate::core::burst::{BurstField, ContactForm, FormEvent};
use crate::core::{FrameTime, Rgba, Tickable};
use glam::Vec2;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn element_center(el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(
        (rect.left() + rect.width() * 0.5) as f32,
        (rect.top() + rect.height() * 0.5) as f32,
    )
}

/// Shared between the submit handler and the per-frame view.
pub struct ContactState {
    pub form: ContactForm,
    /// Button markup to restore once the sent label has been shown.
    pub saved_label: Option<String>,
}

pub struct ContactView {
    pub state: Rc<RefCell<ContactState>>,
    pub bursts: Rc<RefCell<BurstField>>,
    pub rng: Rc<RefCell<StdRng>>,
    pub form_el: web::HtmlFormElement,
    pub button: Option<web::HtmlElement>,
    pub burst_color: Rgba,
}

impl Tickable for ContactView {
    fn on_frame(&mut self, frame: &FrameTime) {
        let event = self.state.borrow_mut().form.tick(frame.dt_sec);
        let Some(event) = event else { return };
        match event {
            FormEvent::Sent => {
                if let Some(btn) = &self.button {
                    btn.set_inner_html(SENT_HTML);
                    let center = element_center(btn);
                    let mut rng = self.rng.borrow_mut();
                    self.bursts
                        .borrow_mut()
                        .burst(center, self.burst_color, &mut *rng);
                }
                self.form_el.reset();
            }
            FormEvent::Restored => {
                let label = self.state.borrow_mut().saved_label.take();
                if let (Some(btn), Some(label)) = (&self.button, label) {
                    btn.set_inner_html(&label);
                }
            }
        }
    }
}
