use crate::core::constants::{CARD_MAX_TILT_DEG, REVEAL_DURATION_SEC};
use crate::core::easing::{Ease, Tween};
use crate::core::scroll::{ScrollerProxy, ViewportRect};
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriggerKind {
    /// Fires once when the element's top crosses `start_fraction` of the
    /// viewport height.
    Reveal { start_fraction: f32 },
    /// Pins the element when its top reaches the viewport top and holds it
    /// for `length` px of scrolling; progress is smoothed over `scrub_sec`.
    Pin { length: f32, scrub_sec: f32 },
}

/// Element position in content coordinates (untransformed).
#[derive(Clone, Debug, PartialEq)]
pub struct ElementLayout {
    pub id: String,
    pub top: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TriggerEvent {
    Reveal {
        id: String,
    },
    Scrub {
        id: String,
        progress: f32,
        /// translateY that keeps the pinned element still.
        pin_offset: f32,
    },
}

#[derive(Clone, Debug)]
struct Trigger {
    id: String,
    kind: TriggerKind,
    top: Option<f32>,
    fired: bool,
    progress: f32,
    last_pin: f32,
    emitted_once: bool,
}

/// Scroll-linked triggers driven by a [`ScrollerProxy`].
pub struct TriggerRegistry {
    viewport: ViewportRect,
    triggers: Vec<Trigger>,
    index: FnvHashMap<String, usize>,
}

impl TriggerRegistry {
    /// The only way to build a registry: it needs a live scroller to take the
    /// virtual viewport from.
    pub fn attach<S: ScrollerProxy + ?Sized>(scroller: &S) -> Self {
        Self {
            viewport: scroller.bounding_rect(),
            triggers: Vec::new(),
            index: FnvHashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    pub fn viewport(&self) -> ViewportRect {
        self.viewport
    }

    /// Registering an existing id replaces its kind and resets it.
    pub fn register(&mut self, id: &str, kind: TriggerKind) {
        let trigger = Trigger {
            id: id.to_string(),
            kind,
            top: None,
            fired: false,
            progress: 0.0,
            last_pin: 0.0,
            emitted_once: false,
        };
        match self.index.get(id) {
            Some(&i) => self.triggers[i] = trigger,
            None => {
                self.index.insert(id.to_string(), self.triggers.len());
                self.triggers.push(trigger);
            }
        }
    }

    pub fn is_fired(&self, id: &str) -> bool {
        self.index
            .get(id)
            .map(|&i| self.triggers[i].fired)
            .unwrap_or(false)
    }

    pub fn progress(&self, id: &str) -> Option<f32> {
        self.index.get(id).map(|&i| self.triggers[i].progress)
    }

    /// Update a pin's length (e.g. after the carousel width changed).
    pub fn set_pin_length(&mut self, id: &str, length: f32) -> bool {
        let Some(&i) = self.index.get(id) else {
            return false;
        };
        match &mut self.triggers[i].kind {
            TriggerKind::Pin { length: l, .. } => {
                *l = length.max(0.0);
                true
            }
            TriggerKind::Reveal { .. } => false,
        }
    }

    /// Extra scroll distance a pin adds to the document.
    pub fn pin_spacing(&self, id: &str) -> f32 {
        self.index
            .get(id)
            .map(|&i| match self.triggers[i].kind {
                TriggerKind::Pin { length, .. } => length,
                TriggerKind::Reveal { .. } => 0.0,
            })
            .unwrap_or(0.0)
    }

    pub fn total_pin_spacing(&self) -> f32 {
        self.triggers
            .iter()
            .map(|t| match t.kind {
                TriggerKind::Pin { length, .. } => length,
                TriggerKind::Reveal { .. } => 0.0,
            })
            .sum()
    }

    /// Take new element positions and the scroller's current viewport. Call
    /// this before measuring content height for the scroll limit.
    pub fn refresh<S: ScrollerProxy + ?Sized>(&mut self, scroller: &S, layout: &[ElementLayout]) {
        self.viewport = scroller.bounding_rect();
        for el in layout {
            if let Some(&i) = self.index.get(&el.id) {
                self.triggers[i].top = Some(el.top);
            }
        }
        let unplaced = self.triggers.iter().filter(|t| t.top.is_none()).count();
        if unplaced > 0 {
            log::warn!("[triggers] {} trigger(s) without a layout entry", unplaced);
        }
    }

    pub fn update<S: ScrollerProxy + ?Sized>(&mut self, scroller: &S, dt_sec: f32) -> Vec<TriggerEvent> {
        let offset = scroller.scroll_top();
        let vh = self.viewport.height;
        let dt_sec = dt_sec.max(0.0);
        let mut out = Vec::new();
        for t in self.triggers.iter_mut() {
            let Some(top) = t.top else { continue };
            match t.kind {
                TriggerKind::Reveal { start_fraction } => {
                    if !t.fired && top - offset <= vh * start_fraction {
                        t.fired = true;
                        out.push(TriggerEvent::Reveal { id: t.id.clone() });
                    }
                }
                TriggerKind::Pin { length, scrub_sec } => {
                    let raw = if length > 0.0 {
                        ((offset - top) / length).clamp(0.0, 1.0)
                    } else if offset >= top {
                        1.0
                    } else {
                        0.0
                    };
                    let next = scrub_toward(t.progress, raw, scrub_sec, dt_sec);
                    let pin_offset = (offset - top).clamp(0.0, length.max(0.0));
                    if next != t.progress || pin_offset != t.last_pin || !t.emitted_once {
                        t.progress = next;
                        t.last_pin = pin_offset;
                        t.emitted_once = true;
                        out.push(TriggerEvent::Scrub {
                            id: t.id.clone(),
                            progress: next,
                            pin_offset,
                        });
                    }
                }
            }
        }
        out
    }
}

// Roughly 95% of the way after `scrub_sec`.
fn scrub_toward(current: f32, target: f32, scrub_sec: f32, dt_sec: f32) -> f32 {
    if scrub_sec <= 0.0 {
        return target;
    }
    let alpha = 1.0 - (-3.0 * dt_sec / scrub_sec).exp();
    let next = current + (target - current) * alpha;
    if (target - next).abs() < 1e-4 {
        target
    } else {
        next
    }
}

/// Horizontal shift of a pinned carousel at the given scrub progress.
#[inline]
pub fn carousel_shift(progress: f32, scroll_width: f32, viewport_width: f32) -> f32 {
    -(scroll_width - viewport_width).max(0.0) * progress.clamp(0.0, 1.0)
}

/// Y rotation for a card whose centre sits at `card_center_x`.
#[inline]
pub fn card_tilt_deg(card_center_x: f32, viewport_width: f32) -> f32 {
    let center = viewport_width * 0.5;
    if center <= 0.0 {
        return 0.0;
    }
    let dist = (card_center_x - center) / center;
    (dist * CARD_MAX_TILT_DEG).clamp(-CARD_MAX_TILT_DEG, CARD_MAX_TILT_DEG)
}

/// Clip-path for the "liquid" reveal: the visible polygon grows from the
/// bottom edge upward as `progress` goes 0 → 1.
pub fn reveal_clip_path(progress: f32) -> String {
    let top = 100.0 * (1.0 - progress.clamp(0.0, 1.0));
    format!(
        "polygon(0 {top:.2}%, 100% {top:.2}%, 100% 100%, 0 100%)",
        top = top
    )
}

/// Running reveal tweens keyed by trigger id.
#[derive(Default)]
pub struct RevealTweens {
    active: Vec<(String, Tween)>,
}

impl RevealTweens {
    pub fn start(&mut self, id: &str) {
        self.active.push((
            id.to_string(),
            Tween::new(0.0, 1.0, REVEAL_DURATION_SEC, Ease::Power4Out),
        ));
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// (id, eased progress) for every running tween; finished ones report 1.0
    /// once and are dropped.
    pub fn tick(&mut self, dt_sec: f32) -> Vec<(String, f32)> {
        let out = self
            .active
            .iter_mut()
            .map(|(id, tw)| (id.clone(), tw.advance(dt_sec)))
            .collect();
        self.active.retain(|(_, tw)| !tw.is_finished());
        out
    }
}
