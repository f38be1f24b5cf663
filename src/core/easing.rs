// Easing curves for the timeline-style effects. All take t in [0, 1].

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power1Out,
    OutExpo,
    OutBack,
    Power4Out,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::OutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f32.powf(-10.0 * t)
                }
            }
            Ease::OutBack => {
                // overshoot constant matching "back.out(1.7)"
                let c1 = 1.7;
                let c3 = c1 + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u * u * u + c1 * u * u
            }
            Ease::Power4Out => {
                // quintic, like "power4.out"
                let u = 1.0 - t;
                1.0 - u * u * u * u * u
            }
        }
    }
}

/// A fixed-duration tween from `from` to `to`, advanced by frame time.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration_sec: f32,
    pub delay_sec: f32,
    pub ease: Ease,
    elapsed: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_sec: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration_sec,
            delay_sec: 0.0,
            ease,
            elapsed: 0.0,
        }
    }

    pub fn with_delay(mut self, delay_sec: f32) -> Self {
        self.delay_sec = delay_sec.max(0.0);
        self
    }

    pub fn advance(&mut self, dt_sec: f32) -> f32 {
        self.elapsed += dt_sec.max(0.0);
        self.value()
    }

    pub fn progress(&self) -> f32 {
        let active = (self.elapsed - self.delay_sec).max(0.0);
        if self.duration_sec <= 0.0 {
            return 1.0;
        }
        (active / self.duration_sec).clamp(0.0, 1.0)
    }

    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.ease.apply(self.progress())
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}

/// Fires indices 0..count one interval apart, the first immediately.
#[derive(Clone, Debug)]
pub struct Stagger {
    count: usize,
    interval_sec: f32,
    elapsed_sec: f32,
    emitted: usize,
}

impl Stagger {
    pub fn new(count: usize, interval_sec: f32) -> Self {
        Self {
            count,
            interval_sec: interval_sec.max(0.0),
            elapsed_sec: 0.0,
            emitted: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.emitted >= self.count
    }

    pub fn tick(&mut self, dt_sec: f32) -> std::ops::Range<usize> {
        self.elapsed_sec += dt_sec.max(0.0);
        let start = self.emitted;
        while self.emitted < self.count
            && self.elapsed_sec >= self.emitted as f32 * self.interval_sec
        {
            self.emitted += 1;
        }
        start..self.emitted
    }
}
