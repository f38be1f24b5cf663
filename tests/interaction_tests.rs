// Host-side tests for the hero, skills, navigation and contact effects.

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

use crate::core::boot::{BootEvent, BootSequence, HeroIntro, IntroFrame, BOOT_MESSAGES};
use crate::core::constants::SCRAMBLE_CHARSET;
use crate::core::burst::{BurstField, ContactForm, FormEvent, FormPhase};
use crate::core::orbit::{SolarSystem, ORBIT_SKILLS};
use crate::core::scramble::{ScrambleTimeline, TextScramble};
use crate::core::spy::{active_section, navbar_is_solid, ScrollSpy, SectionBounds, SpyChange};
use crate::core::surface::Rgba;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn scramble_locks_characters_left_to_right() {
    let mut rng = rng();
    let mut s = TextScramble::new("ADITH");
    let mut frames = Vec::new();
    while !s.is_done() {
        frames.push(s.step(&mut rng));
        assert!(frames.len() <= 20, "scramble never finished");
    }
    assert_eq!(frames.len(), 14);
    for (step, text) in frames.iter().enumerate() {
        assert_eq!(text.chars().count(), 5);
        let locked = ((step + 2) / 3).min(5);
        assert_eq!(&text[..locked], &"ADITH"[..locked], "step {}", step);
    }
    assert_eq!(frames.last().unwrap(), "ADITH");
    assert_eq!(s.step(&mut rng), "ADITH");
    assert_eq!(s.tick(1.0, &mut rng), None);
}

#[test]
fn scrambled_glyphs_come_from_the_charset() {
    let mut rng = rng();
    let mut s = TextScramble::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    let first = s.step(&mut rng);
    assert_eq!(first.chars().count(), 26);
    assert!(first.chars().all(|c| SCRAMBLE_CHARSET.contains(c)));
    while !s.is_done() {
        let text = s.step(&mut rng);
        assert!(text.chars().all(|c| SCRAMBLE_CHARSET.contains(c)));
    }
}

#[test]
fn scramble_tick_runs_whole_intervals() {
    let mut rng = rng();
    let mut s = TextScramble::new("AB");
    assert_eq!(s.tick(0.02, &mut rng), None);
    assert!(s.tick(0.02, &mut rng).is_some());
    assert_eq!(s.revealed(), 1);
    // plenty of time: runs to completion in one call
    assert_eq!(s.tick(1.0, &mut rng).as_deref(), Some("AB"));
    assert!(s.is_done());
}

#[test]
fn empty_scramble_finishes_on_first_step() {
    let mut rng = rng();
    let mut s = TextScramble::new("");
    assert_eq!(s.step(&mut rng), "");
    assert!(s.is_done());
}

#[test]
fn timeline_starts_cues_after_their_delay() {
    let mut rng = rng();
    let mut tl = ScrambleTimeline::new(&[(0.5, "ADITH"), (1.0, "DEV")]);
    assert!(tl.tick(0.4, &mut rng).is_empty());

    let updates = tl.tick(0.11, &mut rng);
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].cue, 0);
    assert!(updates[0].started);
    assert_eq!(updates[0].text.chars().count(), 5);

    let mut second_started = false;
    for _ in 0..100 {
        for u in tl.tick(0.016, &mut rng) {
            if u.cue == 1 && u.started {
                second_started = true;
            }
            if u.cue == 0 {
                assert!(!u.started);
            }
        }
    }
    assert!(second_started);
    assert!(tl.is_done());
}

fn lines(events: &[BootEvent]) -> Vec<usize> {
    events
        .iter()
        .filter_map(|e| match e {
            BootEvent::Line { index, .. } => Some(*index),
            _ => None,
        })
        .collect()
}

#[test]
fn boot_prints_a_line_every_interval() {
    let mut boot = BootSequence::new(BOOT_MESSAGES, 2);
    let first = boot.tick(0.0);
    assert_eq!(
        first.as_slice(),
        &[BootEvent::Line {
            index: 0,
            text: "> Initializing Developer Interface...".to_string()
        }]
    );
    assert!(lines(&boot.tick(0.79)).is_empty());
    assert_eq!(lines(&boot.tick(0.02)), vec![1]);
    assert_eq!(lines(&boot.tick(0.8)), vec![2]);
    assert_eq!(lines(&boot.tick(0.8)), vec![3]);
    assert!(lines(&boot.tick(0.5)).is_empty());
}

#[test]
fn boot_reveals_after_the_last_line_slot() {
    let mut boot = BootSequence::new(BOOT_MESSAGES, 2);
    assert!((boot.reveal_at_sec() - 3.7).abs() < 1e-5);
    let early = boot.tick(3.65);
    assert_eq!(lines(&early), vec![0, 1, 2, 3]);
    assert!(!early.iter().any(|e| matches!(e, BootEvent::Reveal { .. })));

    let start = boot.tick(0.1);
    assert_eq!(
        start.as_slice(),
        &[
            BootEvent::Reveal {
                target: 0,
                opacity: 0.0,
                translate_y: 20.0
            },
            BootEvent::Reveal {
                target: 1,
                opacity: 0.0,
                translate_y: 20.0
            },
        ]
    );

    // second target is staggered
    let mid = boot.tick(0.2);
    match mid.as_slice() {
        [BootEvent::Reveal { opacity: a, .. }, BootEvent::Reveal { opacity: b, .. }] => {
            assert!(*a > 0.5);
            assert_eq!(*b, 0.0);
        }
        other => panic!("unexpected {:?}", other),
    }

    let end = boot.tick(2.0);
    assert_eq!(end.last(), Some(&BootEvent::Finished));
    assert!(boot.is_finished());
    assert!(boot.tick(1.0).is_empty());
}

#[test]
fn boot_without_reveal_targets_finishes_at_reveal_time() {
    let mut boot = BootSequence::new(&["one"], 0);
    boot.tick(0.0);
    assert!(!boot.is_finished());
    let events = boot.tick(1.5);
    assert_eq!(events.as_slice(), &[BootEvent::Finished]);
}

#[test]
fn hero_intro_flashes_title_then_fades_cube() {
    let mut intro = HeroIntro::default();
    assert_eq!(
        intro.tick(0.0),
        Some(IntroFrame {
            title_opacity: 0.0,
            cube_opacity: 0.0
        })
    );

    // the cube fade overlaps the whole title flash
    let mid = intro.tick(0.05).unwrap();
    assert!((mid.title_opacity - 0.75).abs() < 1e-6);
    assert!(mid.cube_opacity > 0.0 && mid.cube_opacity < 0.2);

    let title_done = intro.tick(0.05).unwrap();
    assert_eq!(title_done.title_opacity, 1.0);
    assert!(title_done.cube_opacity < 1.0);
    assert!(!intro.is_finished());

    let end = intro.tick(1.0).unwrap();
    assert_eq!(end.title_opacity, 1.0);
    assert_eq!(end.cube_opacity, 1.0);
    assert!(intro.is_finished());
    assert_eq!(intro.tick(0.1), None);
}

#[test]
fn orbits_grow_outward_and_slow_down() {
    let solar = SolarSystem::new(ORBIT_SKILLS);
    let planets = solar.planets();
    assert_eq!(planets.len(), 13);
    assert_eq!(planets[0].radius, 40.0);
    assert_eq!(planets[0].period_sec, 10.0);
    assert_eq!(planets[12].radius, 520.0);
    assert_eq!(planets[12].period_sec, 34.0);
    assert_eq!(planets[0].offset(), Vec2::new(40.0, 0.0));
    assert_eq!(solar.extent(), 1040.0);
    assert_eq!(SolarSystem::new(&[]).extent(), 0.0);
}

#[test]
fn a_quarter_period_moves_a_planet_clockwise() {
    let mut solar = SolarSystem::new(&["HTML"]);
    solar.tick(2.5);
    let p = solar.planets()[0].offset();
    assert!(p.x.abs() < 1e-3);
    assert!((p.y - 40.0).abs() < 1e-3);
}

#[test]
fn hover_scales_planet_and_slows_time() {
    let mut solar = SolarSystem::new(&["HTML", "CSS"]);
    solar.set_hovered(Some(1));
    assert_eq!(solar.time_scale(), 0.1);
    // the caller hands in tween-clock time, already slowed
    solar.tick(0.3);
    assert_eq!(solar.planets()[1].scale, 2.0);
    assert_eq!(solar.planets()[0].scale, 1.0);
    assert!((solar.planets()[0].phase - 0.03).abs() < 1e-6);

    solar.set_hovered(Some(99));
    assert_eq!(solar.hovered(), None);
    assert_eq!(solar.time_scale(), 1.0);
    solar.tick(0.3);
    assert_eq!(solar.planets()[1].scale, 1.0);
}

fn sections() -> Vec<SectionBounds> {
    vec![
        SectionBounds {
            id: "home".into(),
            top: 0.0,
            height: 900.0,
        },
        SectionBounds {
            id: "about".into(),
            top: 900.0,
            height: 600.0,
        },
        SectionBounds {
            id: "skills".into(),
            top: 1500.0,
            height: 900.0,
        },
    ]
}

#[test]
fn active_section_leads_by_a_third() {
    let s = sections();
    assert_eq!(active_section(0.0, &s), Some("home"));
    assert_eq!(active_section(699.0, &s), Some("home"));
    assert_eq!(active_section(700.0, &s), Some("about"));
    assert_eq!(active_section(1200.0, &s), Some("skills"));
    assert_eq!(active_section(-400.0, &s), None);
    assert_eq!(active_section(100.0, &[]), None);
}

#[test]
fn navbar_turns_solid_past_fifty() {
    assert!(!navbar_is_solid(0.0));
    assert!(!navbar_is_solid(50.0));
    assert!(navbar_is_solid(50.5));
}

#[test]
fn spy_reports_only_changes() {
    let mut spy = ScrollSpy::new(sections());
    assert_eq!(
        spy.update(0.0),
        vec![SpyChange::Active(Some("home".to_string()))]
    );
    assert!(spy.update(10.0).is_empty());
    assert_eq!(spy.update(60.0), vec![SpyChange::Navbar { solid: true }]);
    assert_eq!(
        spy.update(800.0),
        vec![SpyChange::Active(Some("about".to_string()))]
    );
    assert_eq!(
        spy.update(0.0),
        vec![
            SpyChange::Active(Some("home".to_string())),
            SpyChange::Navbar { solid: false }
        ]
    );
    assert_eq!(spy.section_top("skills"), Some(1500.0));
    assert_eq!(spy.section_top("contact"), None);
}

#[test]
fn burst_sparks_fly_out_and_fade() {
    let mut rng = rng();
    let mut field = BurstField::new();
    let center = Vec2::new(300.0, 200.0);
    field.burst(center, Rgba::rgb([176, 38, 255]), &mut rng);
    assert_eq!(field.len(), 30);
    for s in field.sparks() {
        assert_eq!(s.position(), center);
        assert_eq!(s.opacity(), 1.0);
        assert!(s.delta.x.abs() <= 100.0 && s.delta.y.abs() <= 100.0);
    }
    field.tick(0.5);
    assert_eq!(field.len(), 30);
    assert!(field.sparks().iter().all(|s| s.opacity() < 1.0));
    field.tick(0.5);
    assert!(field.is_empty());
}

#[test]
fn keystroke_spark_lasts_half_a_second() {
    let mut rng = rng();
    let mut field = BurstField::new();
    field.spark(Vec2::ZERO, Rgba::rgb([0, 243, 255]), &mut rng);
    assert_eq!(field.len(), 1);
    assert!(field.sparks()[0].delta.length() <= 50.0);
    field.tick(0.25);
    assert_eq!(field.len(), 1);
    field.tick(0.25);
    assert!(field.is_empty());
}

#[test]
fn contact_form_transmits_then_restores() {
    let mut form = ContactForm::default();
    assert_eq!(form.tick(1.0), None);
    assert!(form.submit());
    assert!(!form.submit());
    assert_eq!(form.tick(1.0), None);
    assert_eq!(form.tick(0.5), Some(FormEvent::Sent));
    assert!(matches!(form.phase(), FormPhase::Sent { .. }));
    assert!(!form.submit());
    assert_eq!(form.tick(2.9), None);
    assert_eq!(form.tick(0.2), Some(FormEvent::Restored));
    assert_eq!(form.phase(), FormPhase::Idle);
    assert!(form.submit());
}
