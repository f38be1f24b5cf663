use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Timing info handed to every tickable once per animation frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Wall-clock frame time.
    pub dt_sec: f32,
    /// Frame time on the tween clock, i.e. `dt_sec` times the global time scale.
    pub tween_dt_sec: f32,
    pub elapsed_sec: f64,
    pub index: u64,
}

impl FrameTime {
    /// Next frame after `dt_sec` seconds. Negative or non-finite dt counts as 0.
    pub fn next(&self, dt_sec: f32, time_scale: f32) -> Self {
        let dt_sec = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        Self {
            dt_sec,
            tween_dt_sec: dt_sec * time_scale,
            elapsed_sec: self.elapsed_sec + dt_sec as f64,
            index: self.index + 1,
        }
    }
}

/// Shared speed of the tween clock. 1.0 is real time.
#[derive(Clone, Debug)]
pub struct TimeScale(Rc<Cell<f32>>);

impl Default for TimeScale {
    fn default() -> Self {
        Self(Rc::new(Cell::new(1.0)))
    }
}

impl TimeScale {
    pub fn get(&self) -> f32 {
        self.0.get()
    }

    /// Negative or non-finite scales are ignored.
    pub fn set(&self, scale: f32) {
        if scale.is_finite() && scale >= 0.0 && scale != self.0.get() {
            log::debug!("[scheduler] time scale {}", scale);
            self.0.set(scale);
        }
    }
}

/// Anything that wants a callback on every animation frame.
pub trait Tickable {
    fn on_frame(&mut self, frame: &FrameTime);
}

impl<T: Tickable + ?Sized> Tickable for Rc<RefCell<T>> {
    fn on_frame(&mut self, frame: &FrameTime) {
        self.borrow_mut().on_frame(frame);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

struct Entry {
    handle: TickHandle,
    label: String,
    tickable: Box<dyn Tickable>,
}

/// Frame-loop membership. Tickables run in registration order.
#[derive(Default)]
pub struct FrameScheduler {
    entries: Vec<Entry>,
    next_id: u64,
    clock: FrameTime,
    time_scale: TimeScale,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, label: &str, tickable: Box<dyn Tickable>) -> TickHandle {
        let handle = TickHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            handle,
            label: label.to_string(),
            tickable,
        });
        log::debug!("[scheduler] registered {} as {:?}", label, handle);
        handle
    }

    /// Returns false if the handle was unknown (already removed).
    pub fn unregister(&mut self, handle: TickHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        let removed = self.entries.len() != before;
        if removed {
            log::debug!("[scheduler] unregistered {:?}", handle);
        }
        removed
    }

    pub fn contains(&self, handle: TickHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn clock(&self) -> FrameTime {
        self.clock
    }

    /// Handle for effects that speed up or slow down every tween.
    pub fn time_scale(&self) -> TimeScale {
        self.time_scale.clone()
    }

    /// Advance the clock by `dt_sec` and run every registered tickable once.
    pub fn run_frame(&mut self, dt_sec: f32) -> FrameTime {
        self.clock = self.clock.next(dt_sec, self.time_scale.get());
        let frame = self.clock;
        for entry in self.entries.iter_mut() {
            entry.tickable.on_frame(&frame);
        }
        frame
    }
}
