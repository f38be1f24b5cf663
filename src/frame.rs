use crate::core::FrameScheduler;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Tab switches hand us multi-second gaps; clamp so tweens do not jump.
const MAX_FRAME_DT_SEC: f32 = 0.1;

pub struct FrameContext {
    pub scheduler: Rc<RefCell<FrameScheduler>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(scheduler: Rc<RefCell<FrameScheduler>>) -> Self {
        Self {
            scheduler,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32().min(MAX_FRAME_DT_SEC);

        let clock = self.scheduler.borrow_mut().run_frame(dt_sec);
        if clock.index == 1 {
            log::info!(
                "[frame] first frame, {} tickables",
                self.scheduler.borrow().len()
            );
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
