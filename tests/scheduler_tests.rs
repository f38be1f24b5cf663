// Host-side tests for frame scheduling, pointer tracking and the cursor follower.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod boot {
        include!("../src/core/boot.rs");
    }
    pub mod burst {
        include!("../src/core/burst.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod easing {
        include!("../src/core/easing.rs");
    }
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod follower {
        include!("../src/core/follower.rs");
    }
    pub mod network {
        include!("../src/core/network.rs");
    }
    pub mod orbit {
        include!("../src/core/orbit.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
    pub mod pointer {
        include!("../src/core/pointer.rs");
    }
    pub mod projects {
        include!("../src/core/projects.rs");
    }
    pub mod scheduler {
        include!("../src/core/scheduler.rs");
    }
    pub mod scramble {
        include!("../src/core/scramble.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
    pub mod spy {
        include!("../src/core/spy.rs");
    }
    pub mod surface {
        include!("../src/core/surface.rs");
    }
    pub mod triggers {
        include!("../src/core/triggers.rs");
    }
}

use crate::core::easing::{Ease, Stagger, Tween};
use crate::core::follower::{format_coords, CoordsReadout, CursorFollower, EasedPoint};
use crate::core::pointer::{PointerState, PointerTracker};
use crate::core::scheduler::{FrameScheduler, FrameTime, Tickable, TimeScale};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

struct Tracer {
    name: &'static str,
    log: Rc<RefCell<Vec<(&'static str, u64)>>>,
}

impl Tickable for Tracer {
    fn on_frame(&mut self, frame: &FrameTime) {
        self.log.borrow_mut().push((self.name, frame.index));
    }
}

#[derive(Default)]
struct Counter {
    frames: u32,
    elapsed: f64,
}

impl Tickable for Counter {
    fn on_frame(&mut self, frame: &FrameTime) {
        self.frames += 1;
        self.elapsed = frame.elapsed_sec;
    }
}

#[test]
fn tickables_run_in_registration_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut sched = FrameScheduler::new();
    for name in ["scroll", "particles", "cursor"] {
        sched.register(
            name,
            Box::new(Tracer {
                name,
                log: log.clone(),
            }),
        );
    }
    assert_eq!(sched.labels(), vec!["scroll", "particles", "cursor"]);
    sched.run_frame(0.016);
    sched.run_frame(0.016);
    assert_eq!(
        *log.borrow(),
        vec![
            ("scroll", 1),
            ("particles", 1),
            ("cursor", 1),
            ("scroll", 2),
            ("particles", 2),
            ("cursor", 2)
        ]
    );
}

#[test]
fn unregister_removes_only_that_tickable() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut sched = FrameScheduler::new();
    let a = sched.register(
        "a",
        Box::new(Tracer {
            name: "a",
            log: log.clone(),
        }),
    );
    let b = sched.register(
        "b",
        Box::new(Tracer {
            name: "b",
            log: log.clone(),
        }),
    );
    assert!(sched.unregister(a));
    assert!(!sched.unregister(a));
    assert!(!sched.contains(a));
    assert!(sched.contains(b));
    assert_eq!(sched.len(), 1);
    sched.run_frame(0.016);
    assert_eq!(*log.borrow(), vec![("b", 1)]);
}

#[test]
fn handles_are_never_reused() {
    let mut sched = FrameScheduler::new();
    let first = sched.register("x", Box::new(Counter::default()));
    sched.unregister(first);
    let second = sched.register("x", Box::new(Counter::default()));
    assert_ne!(first, second);
    assert!(!sched.contains(first));
}

#[test]
fn shared_tickable_stays_observable() {
    let counter = Rc::new(RefCell::new(Counter::default()));
    let mut sched = FrameScheduler::new();
    sched.register("counter", Box::new(counter.clone()));
    for _ in 0..3 {
        sched.run_frame(0.5);
    }
    assert_eq!(counter.borrow().frames, 3);
    assert!((counter.borrow().elapsed - 1.5).abs() < 1e-9);
}

#[test]
fn clock_ignores_bad_frame_times() {
    let mut sched = FrameScheduler::new();
    assert!(sched.is_empty());
    sched.run_frame(-1.0);
    sched.run_frame(f32::NAN);
    let clock = sched.run_frame(0.25);
    assert_eq!(clock.index, 3);
    assert_eq!(clock.dt_sec, 0.25);
    assert!((clock.elapsed_sec - 0.25).abs() < 1e-9);
    assert_eq!(sched.clock(), clock);
}

#[derive(Default)]
struct TweenClock {
    wall: Vec<f32>,
    tween: Vec<f32>,
}

impl Tickable for TweenClock {
    fn on_frame(&mut self, frame: &FrameTime) {
        self.wall.push(frame.dt_sec);
        self.tween.push(frame.tween_dt_sec);
    }
}

#[test]
fn time_scale_slows_only_the_tween_clock() {
    let seen = Rc::new(RefCell::new(TweenClock::default()));
    let mut sched = FrameScheduler::new();
    sched.register("tweens", Box::new(seen.clone()));
    let scale = sched.time_scale();
    assert_eq!(scale.get(), 1.0);

    sched.run_frame(0.5);
    scale.set(0.1);
    sched.run_frame(0.5);
    scale.set(1.0);
    sched.run_frame(0.5);

    assert_eq!(seen.borrow().wall, vec![0.5, 0.5, 0.5]);
    let tween = seen.borrow().tween.clone();
    assert_eq!(tween[0], 0.5);
    assert!((tween[1] - 0.05).abs() < 1e-6);
    assert_eq!(tween[2], 0.5);
    assert!((sched.clock().elapsed_sec - 1.5).abs() < 1e-9);
}

#[test]
fn time_scale_rejects_bad_values_and_is_shared() {
    let scale = TimeScale::default();
    let other = scale.clone();
    other.set(0.25);
    assert_eq!(scale.get(), 0.25);
    scale.set(-1.0);
    scale.set(f32::NAN);
    scale.set(f32::INFINITY);
    assert_eq!(other.get(), 0.25);
    scale.set(0.0);
    assert_eq!(other.get(), 0.0);
}

#[test]
fn pointer_tracker_overwrites_position() {
    let mut tracker = PointerTracker::new();
    assert_eq!(tracker.get(), PointerState::default());
    tracker.on_move(12.0, 34.0);
    tracker.on_move(56.0, 78.0);
    assert_eq!(tracker.get(), PointerState { x: 56.0, y: 78.0 });
    assert_eq!(tracker.get().position(), Vec2::new(56.0, 78.0));
}

#[test]
fn follower_snaps_on_first_frame_then_lags() {
    let mut f = CursorFollower::default();
    f.update(&PointerState { x: 100.0, y: 100.0 }, 0.016);
    assert_eq!(f.cursor_translate(), Vec2::new(92.0, 92.0));
    assert_eq!(f.follower_translate(), Vec2::new(80.0, 80.0));

    let target = PointerState { x: 200.0, y: 100.0 };
    f.update(&target, 0.016);
    // the cursor dot has the shorter time constant
    assert!(f.cursor.pos.x > f.follower.pos.x);
    assert!(f.cursor.pos.x < 200.0);
    for _ in 0..200 {
        f.update(&target, 0.016);
    }
    assert!((f.cursor.pos.x - 200.0).abs() < 1e-2);
    assert!((f.follower.pos.x - 200.0).abs() < 1e-2);
}

#[test]
fn eased_point_covers_expected_fraction() {
    let mut p = EasedPoint::new(0.1);
    p.approach(Vec2::new(100.0, 0.0), 0.1);
    let expected = 100.0 * (1.0 - (-1.0f32).exp());
    assert!((p.pos.x - expected).abs() < 1e-3);
}

#[test]
fn coords_text_is_throttled() {
    let pointer = PointerState { x: 1.5, y: 20.25 };
    assert_eq!(format_coords(&pointer), "X: 1.500 | Y: 20.250");
    let mut readout = CoordsReadout::default();
    assert_eq!(readout.tick(&pointer, 0.05), None);
    assert_eq!(
        readout.tick(&pointer, 0.06).as_deref(),
        Some("X: 1.500 | Y: 20.250")
    );
    assert_eq!(readout.tick(&pointer, 0.02), None);
}

#[test]
fn tween_respects_delay_and_finishes() {
    let mut tw = Tween::new(20.0, 0.0, 1.0, Ease::Linear).with_delay(0.3);
    assert_eq!(tw.advance(0.2), 20.0);
    assert!((tw.advance(0.6) - 10.0).abs() < 1e-4);
    assert!(!tw.is_finished());
    assert_eq!(tw.advance(5.0), 0.0);
    assert!(tw.is_finished());
}

#[test]
fn eases_hit_both_endpoints() {
    for ease in [
        Ease::Linear,
        Ease::Power1Out,
        Ease::OutExpo,
        Ease::OutBack,
        Ease::Power4Out,
    ] {
        assert!(ease.apply(0.0).abs() < 1e-6, "{:?} at 0", ease);
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{:?} at 1", ease);
    }
    // back.out overshoots before settling
    assert!(Ease::OutBack.apply(0.6) > 1.0);
}

#[test]
fn stagger_fires_first_index_immediately() {
    let mut s = Stagger::new(3, 0.3);
    assert_eq!(s.tick(0.0), 0..1);
    assert_eq!(s.tick(0.2), 1..1);
    assert_eq!(s.tick(0.15), 1..2);
    assert_eq!(s.tick(1.0), 2..3);
    assert!(s.is_finished());
    assert_eq!(s.tick(1.0), 3..3);
}
