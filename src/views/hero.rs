use crate::core::boot::{BootEvent, BootSequence, HeroIntro};
use crate::core::scramble::ScrambleTimeline;
use crate::core::{FrameTime, Tickable};
use crate::dom;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Hero intro, boot terminal lines, the hero fade-up and the title scrambles.
pub struct HeroView {
    pub intro: HeroIntro,
    pub title_el: Option<web::HtmlElement>,
    pub cube_els: Vec<web::HtmlElement>,
    pub boot: BootSequence,
    pub scrambles: ScrambleTimeline,
    pub rng: Rc<RefCell<StdRng>>,
    pub boot_text: Option<web::HtmlElement>,
    pub document: web::Document,
    /// Elements the boot reveal fades in, in stagger order.
    pub reveal_els: Vec<web::HtmlElement>,
    /// Elements the scramble cues write to, in cue order. Their opacity
    /// belongs to the intro and the boot reveal.
    pub scramble_targets: Vec<Option<web::HtmlElement>>,
}

impl HeroView {
    fn append_line(&self, text: &str) {
        let Some(boot_text) = &self.boot_text else {
            return;
        };
        let Ok(p) = self.document.create_element("p") else {
            return;
        };
        p.set_text_content(Some(text));
        _ = p.class_list().add_1("typing-effect");
        _ = boot_text.append_child(&p);
    }
}

impl Tickable for HeroView {
    fn on_frame(&mut self, frame: &FrameTime) {
        if let Some(intro) = self.intro.tick(frame.tween_dt_sec) {
            if let Some(title) = &self.title_el {
                dom::set_style(title, "opacity", &format!("{:.3}", intro.title_opacity));
            }
            for cube in &self.cube_els {
                dom::set_style(cube, "opacity", &format!("{:.3}", intro.cube_opacity));
            }
        }

        for ev in self.boot.tick(frame.dt_sec) {
            match ev {
                BootEvent::Line { text, .. } => self.append_line(&text),
                BootEvent::Reveal {
                    target,
                    opacity,
                    translate_y,
                } => {
                    if let Some(el) = self.reveal_els.get(target) {
                        dom::set_style(el, "opacity", &format!("{:.3}", opacity));
                        dom::set_translate(el, 0.0, translate_y);
                    }
                }
                BootEvent::Finished => log::info!("[hero] boot finished"),
            }
        }

        if self.scrambles.is_done() {
            return;
        }
        let updates = {
            let mut rng = self.rng.borrow_mut();
            self.scrambles.tick(frame.dt_sec, &mut *rng)
        };
        for u in updates {
            if let Some(Some(el)) = self.scramble_targets.get(u.cue) {
                el.set_inner_text(&u.text);
            }
        }
    }
}
