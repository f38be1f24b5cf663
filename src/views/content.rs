use crate::constants::{EXPERIENCE_ID, PROJECTS_SECTION_ID, TIMELINE_HIDDEN_CLASSES};
use crate::core::easing::Stagger;
use crate::core::triggers::{
    card_tilt_deg, carousel_shift, reveal_clip_path, RevealTweens, TriggerEvent, TriggerRegistry,
};
use crate::core::{FrameTime, ScrollEngine, Tickable};
use crate::dom;
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Pinned horizontal project strip.
pub struct PinnedCarousel {
    pub section: web::HtmlElement,
    pub carousel: web::HtmlElement,
    pub cards: Vec<web::HtmlElement>,
}

impl PinnedCarousel {
    fn apply(&self, progress: f32, pin_offset: f32, viewport_width: f32) {
        dom::set_style(
            &self.section,
            "transform",
            &format!("translate3d(0, {:.2}px, 0)", pin_offset),
        );
        let shift = carousel_shift(progress, self.carousel.scroll_width() as f32, viewport_width);
        dom::set_style(
            &self.carousel,
            "transform",
            &format!("translate3d({:.2}px, 0, 0)", shift),
        );
        for card in &self.cards {
            let rect = card.get_bounding_client_rect();
            let center_x = (rect.left() + rect.width() * 0.5) as f32;
            let tilt = card_tilt_deg(center_x, viewport_width);
            dom::set_style(card, "transform", &format!("rotateY({:.2}deg)", tilt));
        }
    }
}

/// Experience timeline: progress bar plus staggered items.
pub struct Timeline {
    pub progress: Option<web::HtmlElement>,
    pub items: Vec<web::HtmlElement>,
    pub stagger_sec: f32,
    running: Option<Stagger>,
}

impl Timeline {
    pub fn new(
        progress: Option<web::HtmlElement>,
        items: Vec<web::HtmlElement>,
        stagger_sec: f32,
    ) -> Self {
        Self {
            progress,
            items,
            stagger_sec,
            running: None,
        }
    }

    fn start(&mut self) {
        if let Some(bar) = &self.progress {
            dom::set_style(bar, "height", "100%");
        }
        self.running = Some(Stagger::new(self.items.len(), self.stagger_sec));
    }

    fn tick(&mut self, dt_sec: f32) {
        let Some(stagger) = self.running.as_mut() else {
            return;
        };
        for i in stagger.tick(dt_sec) {
            let cl = self.items[i].class_list();
            for class in TIMELINE_HIDDEN_CLASSES {
                _ = cl.remove_1(class);
            }
        }
        if stagger.is_finished() {
            self.running = None;
        }
    }
}

/// Owns the per-frame scroll step and everything driven by the smoothed offset.
pub struct ContentView {
    pub scroll: Rc<RefCell<ScrollEngine>>,
    pub triggers: Rc<RefCell<TriggerRegistry>>,
    pub content: web::HtmlElement,
    pub reveals: FnvHashMap<String, web::HtmlElement>,
    pub reveal_tweens: RevealTweens,
    pub carousel: Option<PinnedCarousel>,
    pub timeline: Timeline,
}

impl ContentView {
    /// Put every reveal target into its pre-reveal look.
    pub fn hide_reveal_targets(&self) {
        for el in self.reveals.values() {
            dom::set_style(el, "clip-path", &reveal_clip_path(0.0));
            dom::set_style(el, "opacity", "0");
        }
    }
}

impl Tickable for ContentView {
    fn on_frame(&mut self, frame: &FrameTime) {
        let scroll_frame = self.scroll.borrow_mut().tick();
        dom::set_style(&self.content, "transform", &scroll_frame.content_transform());

        let (events, viewport_width) = {
            let scroll = self.scroll.borrow();
            let mut triggers = self.triggers.borrow_mut();
            let events = triggers.update(&*scroll, frame.tween_dt_sec);
            (events, triggers.viewport().width)
        };
        for ev in events {
            match ev {
                TriggerEvent::Reveal { id } if id == EXPERIENCE_ID => {
                    log::info!("[content] experience timeline");
                    self.timeline.start();
                }
                TriggerEvent::Reveal { id } => self.reveal_tweens.start(&id),
                TriggerEvent::Scrub {
                    id,
                    progress,
                    pin_offset,
                } if id == PROJECTS_SECTION_ID => {
                    if let Some(c) = &self.carousel {
                        c.apply(progress, pin_offset, viewport_width);
                    }
                }
                TriggerEvent::Scrub { id, .. } => {
                    log::debug!("[content] unhandled scrub for {}", id);
                }
            }
        }

        for (id, progress) in self.reveal_tweens.tick(frame.tween_dt_sec) {
            if let Some(el) = self.reveals.get(&id) {
                dom::set_style(el, "clip-path", &reveal_clip_path(progress));
                dom::set_style(el, "opacity", &format!("{:.3}", progress));
            }
        }
        self.timeline.tick(frame.dt_sec);
    }
}
