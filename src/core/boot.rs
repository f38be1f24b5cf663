use crate::core::constants::{
    BOOT_LINE_INTERVAL_SEC, BOOT_REVEAL_DELAY_SEC, BOOT_REVEAL_DURATION_SEC, BOOT_REVEAL_RISE_PX,
    BOOT_REVEAL_STAGGER_SEC, HERO_CUBE_FADE_SEC, HERO_CUBE_OVERLAP_SEC, HERO_TITLE_FADE_SEC,
};
use crate::core::easing::{Ease, Stagger, Tween};
use smallvec::SmallVec;

pub const BOOT_MESSAGES: &[&str] = &[
    "Initializing Developer Interface...",
    "Loading Core Modules...",
    "Establishing Neural Link...",
    "Boot Sequence Complete.",
];

#[derive(Clone, Debug, PartialEq)]
pub enum BootEvent {
    /// Append a terminal line.
    Line { index: usize, text: String },
    /// Style for the n-th revealed element while its tween runs.
    Reveal {
        target: usize,
        opacity: f32,
        translate_y: f32,
    },
    Finished,
}

struct RevealTrack {
    opacity: Tween,
    rise: Tween,
    settled: bool,
}

/// Terminal-style boot text followed by a staggered fade-up of the hero
/// elements.
pub struct BootSequence {
    messages: Vec<String>,
    elapsed_sec: f32,
    lines: Stagger,
    reveal_targets: usize,
    reveal: Option<Vec<RevealTrack>>,
    finished: bool,
}

impl BootSequence {
    pub fn new(messages: &[&str], reveal_targets: usize) -> Self {
        Self {
            messages: messages.iter().map(|m| m.to_string()).collect(),
            elapsed_sec: 0.0,
            lines: Stagger::new(messages.len(), BOOT_LINE_INTERVAL_SEC),
            reveal_targets,
            reveal: None,
            finished: false,
        }
    }

    pub fn reveal_at_sec(&self) -> f32 {
        self.messages.len() as f32 * BOOT_LINE_INTERVAL_SEC + BOOT_REVEAL_DELAY_SEC
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn tick(&mut self, dt_sec: f32) -> SmallVec<[BootEvent; 4]> {
        let mut events = SmallVec::new();
        if self.finished {
            return events;
        }
        let dt_sec = dt_sec.max(0.0);
        self.elapsed_sec += dt_sec;

        for index in self.lines.tick(dt_sec) {
            events.push(BootEvent::Line {
                index,
                text: format!("> {}", self.messages[index]),
            });
        }

        if self.reveal.is_none() && self.elapsed_sec >= self.reveal_at_sec() {
            log::info!("[boot] reveal");
            let tracks = (0..self.reveal_targets)
                .map(|i| {
                    let delay = i as f32 * BOOT_REVEAL_STAGGER_SEC;
                    RevealTrack {
                        opacity: Tween::new(0.0, 1.0, BOOT_REVEAL_DURATION_SEC, Ease::OutExpo)
                            .with_delay(delay),
                        rise: Tween::new(
                            BOOT_REVEAL_RISE_PX,
                            0.0,
                            BOOT_REVEAL_DURATION_SEC,
                            Ease::OutExpo,
                        )
                        .with_delay(delay),
                        settled: false,
                    }
                })
                .collect();
            self.reveal = Some(tracks);
            // the frame that crosses the reveal time starts every track at 0
            return self.emit_reveal(events, 0.0);
        }

        if self.reveal.is_some() {
            return self.emit_reveal(events, dt_sec);
        }
        events
    }

    fn emit_reveal(
        &mut self,
        mut events: SmallVec<[BootEvent; 4]>,
        dt_sec: f32,
    ) -> SmallVec<[BootEvent; 4]> {
        let Some(tracks) = self.reveal.as_mut() else {
            return events;
        };
        for (target, t) in tracks.iter_mut().enumerate() {
            if t.settled {
                continue;
            }
            let opacity = t.opacity.advance(dt_sec);
            let translate_y = t.rise.advance(dt_sec);
            if t.opacity.is_finished() && t.rise.is_finished() {
                t.settled = true;
            }
            events.push(BootEvent::Reveal {
                target,
                opacity,
                translate_y,
            });
        }
        if tracks.iter().all(|t| t.settled) {
            self.finished = true;
            events.push(BootEvent::Finished);
        }
        events
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntroFrame {
    pub title_opacity: f32,
    pub cube_opacity: f32,
}

/// Hero title flash, then the cube fade-in overlapping its tail. An overlap
/// longer than the title fade starts the cube at zero.
#[derive(Clone, Debug)]
pub struct HeroIntro {
    title: Tween,
    cube: Tween,
    finished: bool,
}

impl Default for HeroIntro {
    fn default() -> Self {
        let cube_delay = (HERO_TITLE_FADE_SEC - HERO_CUBE_OVERLAP_SEC).max(0.0);
        Self {
            title: Tween::new(0.0, 1.0, HERO_TITLE_FADE_SEC, Ease::Power1Out),
            cube: Tween::new(0.0, 1.0, HERO_CUBE_FADE_SEC, Ease::Power1Out).with_delay(cube_delay),
            finished: false,
        }
    }
}

impl HeroIntro {
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// None once both fades have reported their final value.
    pub fn tick(&mut self, dt_sec: f32) -> Option<IntroFrame> {
        if self.finished {
            return None;
        }
        let frame = IntroFrame {
            title_opacity: self.title.advance(dt_sec),
            cube_opacity: self.cube.advance(dt_sec),
        };
        if self.title.is_finished() && self.cube.is_finished() {
            self.finished = true;
        }
        Some(frame)
    }
}
