use crate::core::constants::{SCRAMBLE_CHARSET, SCRAMBLE_INTERVAL_SEC, SCRAMBLE_STEPS_PER_CHAR};
use rand::Rng;

/// Scramble-in effect: characters lock in left to right while the rest cycle
/// through random glyphs.
#[derive(Clone, Debug)]
pub struct TextScramble {
    target: Vec<char>,
    step: u32,
    accum_sec: f32,
    done: bool,
}

impl TextScramble {
    pub fn new(text: &str) -> Self {
        Self {
            target: text.chars().collect(),
            step: 0,
            accum_sec: 0.0,
            done: false,
        }
    }

    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Characters currently locked to their final value.
    pub fn revealed(&self) -> usize {
        let per = SCRAMBLE_STEPS_PER_CHAR.max(1);
        (((self.step + per - 1) / per) as usize).min(self.target.len())
    }

    /// One interval of the effect. After the final (fully revealed) frame the
    /// scramble reports done and keeps returning the target text.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        if self.done {
            return self.target();
        }
        // ascii only, so bytes index glyphs
        let charset = SCRAMBLE_CHARSET.as_bytes();
        let revealed = self.revealed();
        let text = self
            .target
            .iter()
            .enumerate()
            .map(|(i, c)| {
                if i < revealed {
                    *c
                } else {
                    charset[rng.gen_range(0..charset.len())] as char
                }
            })
            .collect::<String>();
        if revealed >= self.target.len() {
            self.done = true;
        }
        self.step += 1;
        text
    }

    /// Advance by frame time; returns the newest text if an interval elapsed.
    pub fn tick<R: Rng + ?Sized>(&mut self, dt_sec: f32, rng: &mut R) -> Option<String> {
        if self.done {
            return None;
        }
        self.accum_sec += dt_sec.max(0.0);
        let mut latest = None;
        while self.accum_sec >= SCRAMBLE_INTERVAL_SEC && !self.done {
            self.accum_sec -= SCRAMBLE_INTERVAL_SEC;
            latest = Some(self.step(rng));
        }
        latest
    }
}

/// Update produced by a [`ScrambleTimeline`] for one of its cues.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrambleUpdate {
    pub cue: usize,
    pub text: String,
    /// True on the first update of a cue (element should become visible).
    pub started: bool,
}

struct Cue {
    delay_sec: f32,
    scramble: TextScramble,
    started: bool,
}

/// Several scrambles, each starting after its own delay.
pub struct ScrambleTimeline {
    cues: Vec<Cue>,
    elapsed_sec: f32,
}

impl ScrambleTimeline {
    pub fn new(cues: &[(f32, &str)]) -> Self {
        Self {
            cues: cues
                .iter()
                .map(|(delay_sec, text)| Cue {
                    delay_sec: *delay_sec,
                    scramble: TextScramble::new(text),
                    started: false,
                })
                .collect(),
            elapsed_sec: 0.0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.cues.iter().all(|c| c.scramble.is_done())
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, dt_sec: f32, rng: &mut R) -> Vec<ScrambleUpdate> {
        let dt_sec = dt_sec.max(0.0);
        let prev = self.elapsed_sec;
        self.elapsed_sec += dt_sec;
        let mut out = Vec::new();
        for (i, cue) in self.cues.iter_mut().enumerate() {
            if self.elapsed_sec < cue.delay_sec || cue.scramble.is_done() {
                continue;
            }
            // only the part of this frame after the cue's start counts
            let active_dt = self.elapsed_sec - prev.max(cue.delay_sec);
            let first = !cue.started;
            cue.started = true;
            let text = if first {
                let mut t = cue.scramble.step(rng);
                if let Some(next) = cue.scramble.tick(active_dt, rng) {
                    t = next;
                }
                Some(t)
            } else {
                cue.scramble.tick(active_dt, rng)
            };
            if let Some(text) = text {
                out.push(ScrambleUpdate {
                    cue: i,
                    text,
                    started: first,
                });
            }
        }
        out
    }
}
