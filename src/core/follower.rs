use crate::core::constants::{
    COORDS_INTERVAL_SEC, CURSOR_HALF_SIZE, CURSOR_TAU_SEC, FOLLOWER_HALF_SIZE, FOLLOWER_TAU_SEC,
};
use crate::core::pointer::PointerState;
use glam::Vec2;

/// A point that chases a target with a first-order lag.
#[derive(Clone, Copy, Debug)]
pub struct EasedPoint {
    pub pos: Vec2,
    tau_sec: f32,
}

impl EasedPoint {
    pub fn new(tau_sec: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            tau_sec: tau_sec.max(1e-4),
        }
    }

    #[inline]
    pub fn approach(&mut self, target: Vec2, dt_sec: f32) {
        let alpha = 1.0 - (-dt_sec.max(0.0) / self.tau_sec).exp();
        self.pos += (target - self.pos) * alpha;
    }
}

/// Cursor dot plus the slower follower ring.
#[derive(Clone, Copy, Debug)]
pub struct CursorFollower {
    pub cursor: EasedPoint,
    pub follower: EasedPoint,
    initialized: bool,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self {
            cursor: EasedPoint::new(CURSOR_TAU_SEC),
            follower: EasedPoint::new(FOLLOWER_TAU_SEC),
            initialized: false,
        }
    }
}

impl CursorFollower {
    pub fn update(&mut self, pointer: &PointerState, dt_sec: f32) {
        let target = pointer.position();
        if !self.initialized {
            // first frame: no lag-in from the corner
            self.cursor.pos = target;
            self.follower.pos = target;
            self.initialized = true;
            return;
        }
        self.cursor.approach(target, dt_sec);
        self.follower.approach(target, dt_sec);
    }

    /// Top-left translation for the cursor element.
    pub fn cursor_translate(&self) -> Vec2 {
        self.cursor.pos - Vec2::splat(CURSOR_HALF_SIZE)
    }

    pub fn follower_translate(&self) -> Vec2 {
        self.follower.pos - Vec2::splat(FOLLOWER_HALF_SIZE)
    }
}

#[inline]
pub fn format_coords(pointer: &PointerState) -> String {
    format!("X: {:.3} | Y: {:.3}", pointer.x, pointer.y)
}

/// Throttled coordinates text.
#[derive(Default, Debug)]
pub struct CoordsReadout {
    accum_sec: f32,
}

impl CoordsReadout {
    /// Returns new text at most once per interval.
    pub fn tick(&mut self, pointer: &PointerState, dt_sec: f32) -> Option<String> {
        self.accum_sec += dt_sec.max(0.0);
        if self.accum_sec < COORDS_INTERVAL_SEC {
            return None;
        }
        self.accum_sec %= COORDS_INTERVAL_SEC;
        Some(format_coords(pointer))
    }
}
