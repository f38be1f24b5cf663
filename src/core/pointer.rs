use glam::Vec2;

/// Last known pointer position in viewport pixels.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Owns the pointer state; event handlers write, everything else reads.
#[derive(Default, Debug)]
pub struct PointerTracker {
    state: PointerState,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn on_move(&mut self, x: f32, y: f32) {
        self.state.x = x;
        self.state.y = y;
    }

    #[inline]
    pub fn get(&self) -> PointerState {
        self.state
    }
}
