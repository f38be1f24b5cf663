use crate::core::constants::{
    ORBIT_BASE_PERIOD_SEC, ORBIT_HOVER_PLANET_SCALE, ORBIT_HOVER_SCALE_SEC,
    ORBIT_HOVER_TIME_SCALE, ORBIT_PERIOD_STEP_SEC, ORBIT_RADIUS_STEP,
};
use crate::core::easing::{Ease, Tween};
use glam::Vec2;
use std::f32::consts::TAU;

pub const ORBIT_SKILLS: &[&str] = &[
    "HTML",
    "CSS",
    "JS",
    "BOOTSTRAP",
    "TAILWIND",
    "JQUERY",
    "AJAX",
    "REACT",
    "PYTHON",
    "DJANGO",
    "REACT NATIVE",
    "PWA",
    "REST API",
];

#[derive(Clone, Debug)]
pub struct Planet {
    pub label: String,
    pub radius: f32,
    pub period_sec: f32,
    /// Orbit phase in [0, 1).
    pub phase: f32,
    pub scale: f32,
    scale_tween: Option<Tween>,
}

impl Planet {
    /// Offset from the system centre. Starts at (r, 0) and moves towards
    /// (0, r), which is clockwise on a y-down screen.
    pub fn offset(&self) -> Vec2 {
        let angle = self.phase * TAU;
        Vec2::new(angle.cos(), angle.sin()) * self.radius
    }
}

/// Concentric orbits, one skill per ring. Hovering a planet enlarges it and
/// asks for the global tween clock to slow down.
pub struct SolarSystem {
    planets: Vec<Planet>,
    hovered: Option<usize>,
}

impl SolarSystem {
    pub fn new(labels: &[&str]) -> Self {
        let planets = labels
            .iter()
            .enumerate()
            .map(|(i, label)| Planet {
                label: label.to_string(),
                radius: (i + 1) as f32 * ORBIT_RADIUS_STEP,
                period_sec: ORBIT_BASE_PERIOD_SEC + i as f32 * ORBIT_PERIOD_STEP_SEC,
                phase: 0.0,
                scale: 1.0,
                scale_tween: None,
            })
            .collect();
        Self {
            planets,
            hovered: None,
        }
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn time_scale(&self) -> f32 {
        if self.hovered.is_some() {
            ORBIT_HOVER_TIME_SCALE
        } else {
            1.0
        }
    }

    /// Unknown indices clear the hover.
    pub fn set_hovered(&mut self, index: Option<usize>) {
        let index = index.filter(|i| *i < self.planets.len());
        if index == self.hovered {
            return;
        }
        if let Some(prev) = self.hovered {
            let p = &mut self.planets[prev];
            p.scale_tween = Some(Tween::new(p.scale, 1.0, ORBIT_HOVER_SCALE_SEC, Ease::Power1Out));
        }
        if let Some(i) = index {
            let p = &mut self.planets[i];
            p.scale_tween = Some(Tween::new(
                p.scale,
                ORBIT_HOVER_PLANET_SCALE,
                ORBIT_HOVER_SCALE_SEC,
                Ease::OutBack,
            ));
        }
        self.hovered = index;
    }

    /// Advance by tween-clock time. Callers apply `time_scale` to that clock
    /// globally, so hover slows the scale tweens too.
    pub fn tick(&mut self, dt_sec: f32) {
        let dt_sec = dt_sec.max(0.0);
        for p in self.planets.iter_mut() {
            p.phase = (p.phase + dt_sec / p.period_sec).fract();
            if let Some(tw) = p.scale_tween.as_mut() {
                p.scale = tw.advance(dt_sec);
                if tw.is_finished() {
                    p.scale_tween = None;
                }
            }
        }
    }

    /// Diameter of the outermost orbit ring.
    pub fn extent(&self) -> f32 {
        self.planets.last().map(|p| p.radius * 2.0).unwrap_or(0.0)
    }
}
