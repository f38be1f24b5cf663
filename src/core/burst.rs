use crate::core::constants::{
    BURST_COUNT, BURST_DURATION_SEC, BURST_SPREAD, SENT_HOLD_SEC, SPARK_DURATION_SEC,
    SPARK_SPREAD, TRANSMIT_SEC,
};
use crate::core::easing::{Ease, Tween};
use crate::core::surface::{Rgba, Surface};
use glam::Vec2;
use rand::Rng;

const SPARK_RADIUS: f32 = 2.0;

/// A short-lived dot that flies from its origin and fades out.
#[derive(Clone, Debug)]
pub struct Spark {
    pub origin: Vec2,
    pub delta: Vec2,
    pub color: Rgba,
    tween: Tween,
}

impl Spark {
    pub fn position(&self) -> Vec2 {
        self.origin + self.delta * self.tween.value()
    }

    pub fn opacity(&self) -> f32 {
        1.0 - self.tween.value()
    }

    pub fn is_finished(&self) -> bool {
        self.tween.is_finished()
    }
}

#[derive(Default)]
pub struct BurstField {
    sparks: Vec<Spark>,
}

impl BurstField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sparks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sparks.is_empty()
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    #[allow(clippy::too_many_arguments)]
    fn emit<R: Rng + ?Sized>(
        &mut self,
        origin: Vec2,
        count: usize,
        spread: f32,
        duration_sec: f32,
        ease: Ease,
        color: Rgba,
        rng: &mut R,
    ) {
        for _ in 0..count {
            let delta = Vec2::new(
                (rng.gen::<f32>() - 0.5) * spread,
                (rng.gen::<f32>() - 0.5) * spread,
            );
            self.sparks.push(Spark {
                origin,
                delta,
                color,
                tween: Tween::new(0.0, 1.0, duration_sec, ease),
            });
        }
    }

    /// Submit celebration at the button centre.
    pub fn burst<R: Rng + ?Sized>(&mut self, center: Vec2, color: Rgba, rng: &mut R) {
        self.emit(
            center,
            BURST_COUNT,
            BURST_SPREAD,
            BURST_DURATION_SEC,
            Ease::OutExpo,
            color,
            rng,
        );
    }

    /// Single spark per keystroke.
    pub fn spark<R: Rng + ?Sized>(&mut self, origin: Vec2, color: Rgba, rng: &mut R) {
        self.emit(
            origin,
            1,
            SPARK_SPREAD,
            SPARK_DURATION_SEC,
            Ease::Power1Out,
            color,
            rng,
        );
    }

    pub fn tick(&mut self, dt_sec: f32) {
        for s in self.sparks.iter_mut() {
            s.tween.advance(dt_sec);
        }
        self.sparks.retain(|s| !s.is_finished());
    }

    /// Draws on top of whatever is already on the surface (no clear).
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        for s in &self.sparks {
            surface.fill_disc(s.position(), SPARK_RADIUS, s.color.with_alpha(s.opacity()));
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FormPhase {
    Idle,
    Transmitting { remaining_sec: f32 },
    Sent { remaining_sec: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormEvent {
    /// Transmission "finished": show the sent label, fire a burst, reset fields.
    Sent,
    /// Put the original button label back.
    Restored,
}

/// Fake submit flow for the contact form. Nothing leaves the page.
#[derive(Debug)]
pub struct ContactForm {
    phase: FormPhase,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            phase: FormPhase::Idle,
        }
    }
}

impl ContactForm {
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Returns false (and does nothing) while a submission is in flight.
    pub fn submit(&mut self) -> bool {
        if self.phase != FormPhase::Idle {
            return false;
        }
        log::info!("[contact] transmitting");
        self.phase = FormPhase::Transmitting {
            remaining_sec: TRANSMIT_SEC,
        };
        true
    }

    pub fn tick(&mut self, dt_sec: f32) -> Option<FormEvent> {
        let dt_sec = dt_sec.max(0.0);
        match self.phase {
            FormPhase::Idle => None,
            FormPhase::Transmitting { remaining_sec } => {
                let left = remaining_sec - dt_sec;
                if left <= 0.0 {
                    log::info!("[contact] sent");
                    self.phase = FormPhase::Sent {
                        remaining_sec: SENT_HOLD_SEC,
                    };
                    Some(FormEvent::Sent)
                } else {
                    self.phase = FormPhase::Transmitting {
                        remaining_sec: left,
                    };
                    None
                }
            }
            FormPhase::Sent { remaining_sec } => {
                let left = remaining_sec - dt_sec;
                if left <= 0.0 {
                    self.phase = FormPhase::Idle;
                    Some(FormEvent::Restored)
                } else {
                    self.phase = FormPhase::Sent {
                        remaining_sec: left,
                    };
                    None
                }
            }
        }
    }
}
