// Host-side tests for the project table, modal state machine and scroll triggers.
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

use crate::core::projects::{
    escape_html, render_modal_body, ModalCommand, ModalController, ModalState, ProjectRecord,
    ProjectTable,
};
use crate::core::scroll::{ScrollEngine, ScrollParams};
use crate::core::triggers::{
    card_tilt_deg, carousel_shift, reveal_clip_path, ElementLayout, RevealTweens, TriggerEvent,
    TriggerKind, TriggerRegistry,
};

#[test]
fn table_holds_the_five_projects() {
    let table = ProjectTable::default();
    assert_eq!(table.len(), 5);
    for id in ["WeatherApp", "EduVision", "E-Commerce", "DataBreach", "SkillSync"] {
        let rec = table.get(id).unwrap();
        assert_eq!(rec.tech.len(), 4);
        assert_eq!(rec.features.len(), 4);
    }
    assert_eq!(table.get("E-Commerce").unwrap().title, "Exclusive E-commerce");
    assert!(table.get("weatherapp").is_none());
}

#[test]
fn modal_body_lists_tech_and_features() {
    let rec = ProjectTable::default().get("WeatherApp").unwrap();
    let html = render_modal_body(rec);
    assert!(html.contains("WeatherApp"));
    assert!(html.contains("OpenWeatherMap API"));
    assert!(html.contains("<li>Interactive 3D globe</li>"));
}

#[test]
fn modal_body_escapes_markup() {
    static REC: ProjectRecord = ProjectRecord {
        title: "<script>x</script>",
        description: "a & b",
        tech: &["\"quoted\""],
        features: &["it's"],
    };
    let html = render_modal_body(&REC);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
    assert!(html.contains("a &amp; b"));
    assert!(html.contains("&quot;quoted&quot;"));
    assert!(html.contains("it&#39;s"));
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn unknown_project_leaves_modal_untouched() {
    let mut modal = ModalController::new(ProjectTable::default());
    let cmds = modal.open("Nope");
    assert!(cmds.is_empty());
    assert_eq!(*modal.state(), ModalState::Closed);
    assert!(!modal.is_visible());

    modal.open("SkillSync");
    modal.tick(0.05);
    let before = modal.state().clone();
    assert!(modal.open("Nope").is_empty());
    assert_eq!(*modal.state(), before);
}

#[test]
fn modal_open_and_close_sequence() {
    let mut modal = ModalController::new(ProjectTable::default());
    let cmds = modal.open("EduVision");
    assert_eq!(cmds.len(), 2);
    assert!(matches!(&cmds[0], ModalCommand::Mount { html } if html.contains("EduVision")));
    assert_eq!(cmds[1], ModalCommand::Unhide);
    assert!(matches!(modal.state(), ModalState::Opening { .. }));
    assert!(modal.is_visible());

    let cmds = modal.tick(0.016);
    assert_eq!(cmds.as_slice(), &[ModalCommand::FadeIn]);
    assert_eq!(
        *modal.state(),
        ModalState::Open {
            id: "EduVision".to_string()
        }
    );
    assert!(modal.tick(0.016).is_empty());

    assert_eq!(modal.close().as_slice(), &[ModalCommand::FadeOut]);
    assert!(modal.close().is_empty());
    assert!(modal.tick(0.2).is_empty());
    assert_eq!(modal.tick(0.2).as_slice(), &[ModalCommand::Hide]);
    assert_eq!(*modal.state(), ModalState::Closed);
    assert!(modal.close().is_empty());
}

#[test]
fn opening_another_project_while_open_remounts() {
    let mut modal = ModalController::new(ProjectTable::default());
    modal.open("WeatherApp");
    modal.tick(0.1);
    let cmds = modal.open("DataBreach");
    assert!(matches!(&cmds[0], ModalCommand::Mount { html } if html.contains("Data Breach Checker")));
}

fn scroller(content: f32) -> ScrollEngine {
    let mut e = ScrollEngine::new(ScrollParams::default()).unwrap();
    e.on_resize(content, 1000.0, 800.0);
    e
}

#[test]
fn registry_takes_viewport_from_scroller() {
    let e = scroller(5000.0);
    let reg = TriggerRegistry::attach(&e);
    assert!(reg.is_empty());
    assert_eq!(reg.viewport().height, 800.0);
    assert_eq!(reg.viewport().width, 1000.0);
}

#[test]
fn reveal_fires_once_at_eighty_percent() {
    let mut e = scroller(5000.0);
    let mut reg = TriggerRegistry::attach(&e);
    reg.register("title", TriggerKind::Reveal { start_fraction: 0.8 });
    reg.refresh(
        &e,
        &[ElementLayout {
            id: "title".into(),
            top: 1000.0,
        }],
    );
    // fires when top - offset <= 640
    e.set_offset(359.0);
    assert!(reg.update(&e, 0.016).is_empty());
    e.set_offset(360.0);
    assert_eq!(
        reg.update(&e, 0.016),
        vec![TriggerEvent::Reveal { id: "title".into() }]
    );
    assert!(reg.is_fired("title"));
    e.set_offset(0.0);
    assert!(reg.update(&e, 0.016).is_empty());
    e.set_offset(900.0);
    assert!(reg.update(&e, 0.016).is_empty());
}

#[test]
fn triggers_without_layout_stay_dormant() {
    let mut e = scroller(5000.0);
    let mut reg = TriggerRegistry::attach(&e);
    reg.register("ghost", TriggerKind::Reveal { start_fraction: 0.8 });
    e.set_offset(3000.0);
    assert!(reg.update(&e, 0.016).is_empty());
    assert!(!reg.is_fired("ghost"));
}

fn pinned(length: f32) -> (ScrollEngine, TriggerRegistry) {
    let e = scroller(8000.0);
    let mut reg = TriggerRegistry::attach(&e);
    reg.register(
        "projects",
        TriggerKind::Pin {
            length,
            scrub_sec: 1.0,
        },
    );
    reg.refresh(
        &e,
        &[ElementLayout {
            id: "projects".into(),
            top: 2000.0,
        }],
    );
    (e, reg)
}

#[test]
fn pin_offset_holds_element_in_place() {
    let (mut e, mut reg) = pinned(1500.0);
    e.set_offset(2600.0);
    let events = reg.update(&e, 0.016);
    match &events[..] {
        [TriggerEvent::Scrub { id, pin_offset, .. }] => {
            assert_eq!(id, "projects");
            assert_eq!(*pin_offset, 600.0);
        }
        other => panic!("unexpected {:?}", other),
    }
    e.set_offset(5000.0);
    let events = reg.update(&e, 0.016);
    assert!(matches!(
        &events[0],
        TriggerEvent::Scrub { pin_offset, .. } if *pin_offset == 1500.0
    ));
}

#[test]
fn scrub_progress_lags_then_reaches_target() {
    let (mut e, mut reg) = pinned(1000.0);
    e.set_offset(2500.0);
    reg.update(&e, 0.1);
    let early = reg.progress("projects").unwrap();
    assert!(early > 0.0 && early < 0.5);
    for _ in 0..200 {
        reg.update(&e, 0.016);
    }
    assert_eq!(reg.progress("projects"), Some(0.5));
    // settled and not moving: nothing more to report
    assert!(reg.update(&e, 0.016).is_empty());
}

#[test]
fn pin_spacing_follows_pin_length() {
    let (_, mut reg) = pinned(0.0);
    assert_eq!(reg.pin_spacing("projects"), 0.0);
    assert!(reg.set_pin_length("projects", 2400.0));
    assert_eq!(reg.pin_spacing("projects"), 2400.0);
    assert_eq!(reg.total_pin_spacing(), 2400.0);
    assert!(!reg.set_pin_length("missing", 10.0));
    reg.register("card", TriggerKind::Reveal { start_fraction: 0.8 });
    assert!(!reg.set_pin_length("card", 10.0));
    assert_eq!(reg.len(), 2);
}

#[test]
fn carousel_shift_and_card_tilt() {
    assert_eq!(carousel_shift(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(carousel_shift(0.5, 3000.0, 1000.0), -1000.0);
    assert_eq!(carousel_shift(1.0, 3000.0, 1000.0), -2000.0);
    assert_eq!(carousel_shift(1.0, 800.0, 1000.0), 0.0);

    assert_eq!(card_tilt_deg(500.0, 1000.0), 0.0);
    assert_eq!(card_tilt_deg(750.0, 1000.0), 22.5);
    assert_eq!(card_tilt_deg(-900.0, 1000.0), -45.0);
    assert_eq!(card_tilt_deg(100.0, 0.0), 0.0);
}

#[test]
fn reveal_clip_path_opens_from_the_bottom() {
    assert_eq!(
        reveal_clip_path(0.0),
        "polygon(0 100.00%, 100% 100.00%, 100% 100%, 0 100%)"
    );
    assert_eq!(
        reveal_clip_path(1.0),
        "polygon(0 0.00%, 100% 0.00%, 100% 100%, 0 100%)"
    );
}

#[test]
fn reveal_tweens_report_until_done() {
    let mut tweens = RevealTweens::default();
    tweens.start("card-1");
    let first = tweens.tick(0.1);
    assert_eq!(first.len(), 1);
    assert!(first[0].1 > 0.0 && first[0].1 < 1.0);
    let last = tweens.tick(2.0);
    assert_eq!(last, vec![("card-1".to_string(), 1.0)]);
    assert!(tweens.is_empty());
    assert!(tweens.tick(0.1).is_empty());
}
