use crate::core::constants::{SCROLL_LERP, SCROLL_SNAP_EPSILON, SKEW_INTENSITY};
use crate::core::error::ParamsError;

/// Virtual viewport handed to scroll-linked triggers in place of the real
/// (non-scrolling) document rect.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportRect {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

/// What a scroll-linked consumer needs from a scroller.
pub trait ScrollerProxy {
    /// Current smoothed offset.
    fn scroll_top(&self) -> f32;
    /// Immediate (non-smoothed) jump.
    fn set_scroll_top(&mut self, value: f32);
    fn bounding_rect(&self) -> ViewportRect;
}

#[derive(Clone, Copy, Debug)]
pub struct ScrollParams {
    pub lerp: f32,
    pub snap_epsilon: f32,
    pub skew_intensity: f32,
}

impl Default for ScrollParams {
    fn default() -> Self {
        Self {
            lerp: SCROLL_LERP,
            snap_epsilon: SCROLL_SNAP_EPSILON,
            skew_intensity: SKEW_INTENSITY,
        }
    }
}

impl ScrollParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.lerp > 0.0 && self.lerp < 1.0) {
            return Err(ParamsError::Smoothing(self.lerp));
        }
        if !(self.snap_epsilon.is_finite() && self.snap_epsilon > 0.0) {
            return Err(ParamsError::SnapEpsilon(self.snap_epsilon));
        }
        if !self.skew_intensity.is_finite() {
            return Err(ParamsError::NotFinite {
                name: "skew_intensity",
                value: self.skew_intensity,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub current: f32,
    pub target: f32,
    pub limit: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollPhase {
    Idle,
    Settling,
}

/// Result of one engine tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFrame {
    pub offset: f32,
    pub velocity: f32,
    pub skew_deg: f32,
    pub phase: ScrollPhase,
}

impl ScrollFrame {
    /// Inline transform for the scrolled content element.
    pub fn content_transform(&self) -> String {
        format!(
            "translate3d(0, -{:.3}px, 0) skewY({:.4}deg)",
            self.offset, self.skew_deg
        )
    }
}

/// Proxy scroll engine: wheel input moves a clamped target, every frame the
/// rendered offset eases toward it.
#[derive(Debug)]
pub struct ScrollEngine {
    state: ScrollState,
    params: ScrollParams,
    viewport: ViewportRect,
    content_height: f32,
}

impl ScrollEngine {
    pub fn new(params: ScrollParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            state: ScrollState::default(),
            params,
            viewport: ViewportRect::default(),
            content_height: 0.0,
        })
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn params(&self) -> &ScrollParams {
        &self.params
    }

    pub fn limit(&self) -> f32 {
        self.state.limit
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    pub fn phase(&self) -> ScrollPhase {
        if self.state.current == self.state.target {
            ScrollPhase::Idle
        } else {
            ScrollPhase::Settling
        }
    }

    #[inline]
    fn clamp_target(&self, value: f32) -> f32 {
        value.clamp(0.0, self.state.limit)
    }

    /// Returns true if the target moved.
    pub fn on_wheel(&mut self, delta_y: f32) -> bool {
        if !delta_y.is_finite() {
            return false;
        }
        let next = self.clamp_target(self.state.target + delta_y);
        let moved = next != self.state.target;
        self.state.target = next;
        moved
    }

    /// Viewport reported to triggers through [`ScrollerProxy::bounding_rect`].
    /// Does not touch the limit; that waits for [`ScrollEngine::on_resize`].
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = ViewportRect {
            top: 0.0,
            left: 0.0,
            width: finite_or_zero(width).max(0.0),
            height: finite_or_zero(height).max(0.0),
        };
    }

    /// Re-measure after layout settled. `content_height` must already include
    /// any pin spacing added by scroll triggers.
    pub fn on_resize(&mut self, content_height: f32, viewport_width: f32, viewport_height: f32) {
        let content_height = finite_or_zero(content_height).max(0.0);
        self.content_height = content_height;
        self.set_viewport(viewport_width, viewport_height);
        let limit = (content_height - self.viewport.height).max(0.0);
        if limit != self.state.limit {
            log::debug!("[scroll] limit {:.1} -> {:.1}", self.state.limit, limit);
        }
        self.state.limit = limit;
        self.state.target = self.clamp_target(self.state.target);
    }

    /// Once per animation frame, whether or not anything moved.
    pub fn tick(&mut self) -> ScrollFrame {
        let velocity = self.state.target - self.state.current;
        self.state.current += velocity * self.params.lerp;
        if (self.state.target - self.state.current).abs() < self.params.snap_epsilon {
            self.state.current = self.state.target;
        }
        ScrollFrame {
            offset: self.state.current,
            velocity,
            skew_deg: velocity * self.params.skew_intensity,
            phase: self.phase(),
        }
    }

    pub fn get_offset(&self) -> f32 {
        self.state.current
    }

    /// Jump without smoothing: current and target move together.
    pub fn set_offset(&mut self, value: f32) {
        let value = self.clamp_target(finite_or_zero(value));
        self.state.current = value;
        self.state.target = value;
    }

    /// Smooth jump: only the target moves.
    pub fn scroll_to(&mut self, value: f32) {
        self.state.target = self.clamp_target(finite_or_zero(value));
    }
}

impl ScrollerProxy for ScrollEngine {
    fn scroll_top(&self) -> f32 {
        self.get_offset()
    }

    fn set_scroll_top(&mut self, value: f32) {
        self.set_offset(value);
    }

    fn bounding_rect(&self) -> ViewportRect {
        self.viewport
    }
}

#[inline]
fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
