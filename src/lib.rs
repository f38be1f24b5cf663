#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::core::boot::{BootSequence, HeroIntro, BOOT_MESSAGES};
use crate::core::burst::{BurstField, ContactForm};
use crate::core::network::NETWORK_SKILLS;
use crate::core::orbit::{SolarSystem, ORBIT_SKILLS};
use crate::core::projects::{ModalController, ProjectTable};
use crate::core::scramble::ScrambleTimeline;
use crate::core::spy::ScrollSpy;
use crate::core::triggers::{RevealTweens, TriggerKind, TriggerRegistry};
use crate::core::{
    FieldParams, FrameScheduler, ParticleField, PointerTracker, Rgba, ScrollEngine, ScrollParams,
    HERO_TITLE_DELAY_SEC, PARTICLE_COUNT, REVEAL_START_FRACTION, SCRUB_SMOOTHING_SEC,
};
use fnv::FnvHashMap;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod layout;
mod views;

/// Shared page state. Engines are built first; the trigger registry can only
/// be attached to an already constructed scroller.
struct App {
    scheduler: Rc<RefCell<FrameScheduler>>,
    scroll: Rc<RefCell<ScrollEngine>>,
    pointer: Rc<RefCell<PointerTracker>>,
    triggers: Rc<RefCell<TriggerRegistry>>,
    spy: Rc<RefCell<ScrollSpy>>,
    modal: Rc<RefCell<ModalController>>,
    bursts: Rc<RefCell<BurstField>>,
    rng: Rc<RefCell<StdRng>>,
}

impl App {
    fn new() -> anyhow::Result<Self> {
        let scroll = ScrollEngine::new(ScrollParams::default())?;
        let triggers = TriggerRegistry::attach(&scroll);
        Ok(Self {
            scheduler: Rc::new(RefCell::new(FrameScheduler::new())),
            scroll: Rc::new(RefCell::new(scroll)),
            pointer: Rc::new(RefCell::new(PointerTracker::new())),
            triggers: Rc::new(RefCell::new(triggers)),
            spy: Rc::new(RefCell::new(ScrollSpy::default())),
            modal: Rc::new(RefCell::new(ModalController::new(ProjectTable::default()))),
            bursts: Rc::new(RefCell::new(BurstField::new())),
            rng: Rc::new(RefCell::new(StdRng::from_entropy())),
        })
    }

    fn register(&self, label: &str, tickable: Box<dyn crate::core::Tickable>) {
        self.scheduler.borrow_mut().register(label, tickable);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("neon-folio starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let app = App::new()?;

    // Scroll first so every later view reads this frame's offset.
    let mounts: [(&str, fn(&App, &web::Document) -> anyhow::Result<()>); 8] = [
        ("scroll", mount_scroll),
        ("nav", mount_nav),
        ("background", mount_background),
        ("cursor", mount_cursor),
        ("hero", mount_hero),
        ("skills", mount_skills),
        ("projects", mount_projects),
        ("contact", mount_contact),
    ];
    for (name, mount) in mounts {
        if let Err(e) = mount(&app, &document) {
            log::warn!("[init] {} skipped: {:?}", name, e);
        }
    }

    events::wire_pointermove(app.pointer.clone());
    events::wire_wheel(app.scroll.clone());

    log::info!(
        "[init] tickables: {:?}",
        app.scheduler.borrow().labels()
    );
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(app.scheduler.clone())));
    frame::start_loop(frame_ctx);
    Ok(())
}

fn mount_scroll(app: &App, document: &web::Document) -> anyhow::Result<()> {
    let content = dom::html_by_id(document, CONTENT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CONTENT_ID))?;

    let mut trigger_targets = Vec::new();
    let mut reveals = FnvHashMap::default();
    {
        let mut triggers = app.triggers.borrow_mut();
        for (i, el) in dom::query_all(document, REVEAL_SELECTOR)
            .into_iter()
            .enumerate()
        {
            if el.id().is_empty() {
                el.set_id(&format!("reveal-{}", i));
            }
            let id = el.id();
            triggers.register(
                &id,
                TriggerKind::Reveal {
                    start_fraction: REVEAL_START_FRACTION,
                },
            );
            reveals.insert(id.clone(), el.clone());
            trigger_targets.push((id, el));
        }
        if let Some(experience) = dom::html_by_id(document, EXPERIENCE_ID) {
            triggers.register(
                EXPERIENCE_ID,
                TriggerKind::Reveal {
                    start_fraction: REVEAL_START_FRACTION,
                },
            );
            trigger_targets.push((EXPERIENCE_ID.to_string(), experience));
        }
    }

    let projects = dom::html_by_id(document, PROJECTS_SECTION_ID);
    let carousel = dom::html_by_id(document, CAROUSEL_ID);
    let pinned = match (&projects, &carousel) {
        (Some(section), Some(strip)) => {
            app.triggers.borrow_mut().register(
                PROJECTS_SECTION_ID,
                TriggerKind::Pin {
                    length: 0.0,
                    scrub_sec: SCRUB_SMOOTHING_SEC,
                },
            );
            trigger_targets.push((PROJECTS_SECTION_ID.to_string(), section.clone()));
            Some(views::PinnedCarousel {
                section: section.clone(),
                carousel: strip.clone(),
                cards: dom::query_all(document, PROJECT_CARD_SELECTOR),
            })
        }
        _ => None,
    };

    let layout = Rc::new(layout::Layout {
        refs: layout::LayoutRefs {
            content: content.clone(),
            body: document.body(),
            projects,
            carousel,
            trigger_targets,
            sections: dom::query_all(document, SECTION_SELECTOR),
        },
        scroll: app.scroll.clone(),
        triggers: app.triggers.clone(),
        spy: app.spy.clone(),
    });
    layout.refresh();
    layout::wire_refresh(layout);

    let view = views::ContentView {
        scroll: app.scroll.clone(),
        triggers: app.triggers.clone(),
        content,
        reveals,
        reveal_tweens: RevealTweens::default(),
        carousel: pinned,
        timeline: views::Timeline::new(
            dom::html_by_id(document, TIMELINE_PROGRESS_ID),
            dom::query_all(document, TIMELINE_ITEM_SELECTOR),
            TIMELINE_ITEM_STAGGER_SEC,
        ),
    };
    view.hide_reveal_targets();
    app.register("content", Box::new(view));
    Ok(())
}

fn mount_nav(app: &App, document: &web::Document) -> anyhow::Result<()> {
    events::wire_nav_anchors(document, app.scroll.clone(), app.spy.clone());
    app.register(
        "nav",
        Box::new(views::NavView {
            scroll: app.scroll.clone(),
            spy: app.spy.clone(),
            navbar: dom::html_by_id(document, NAVBAR_ID),
            links: dom::query_all(document, NAV_LINK_SELECTOR),
        }),
    );
    Ok(())
}

fn mount_background(app: &App, document: &web::Document) -> anyhow::Result<()> {
    let canvas = dom::canvas_by_id(document, BG_CANVAS_ID)?;
    dom::sync_canvas_size(&canvas);
    let surface = canvas::CanvasSurface::new(canvas)?;
    let field = {
        let mut rng = app.rng.borrow_mut();
        ParticleField::initialize(
            PARTICLE_COUNT,
            surface.size(),
            FieldParams::default(),
            &mut *rng,
        )?
    };
    let view = Rc::new(RefCell::new(views::BackgroundView {
        field,
        surface,
        pointer: app.pointer.clone(),
        bursts: app.bursts.clone(),
    }));
    let on_resize = view.clone();
    if let Some(window) = web::window() {
        dom::add_listener::<web::Event>(window.as_ref(), "resize", move |_| {
            on_resize.borrow_mut().resize();
        });
    }
    app.register("background", Box::new(view));
    Ok(())
}

fn mount_cursor(app: &App, document: &web::Document) -> anyhow::Result<()> {
    app.register(
        "cursor",
        Box::new(views::CursorView {
            pointer: app.pointer.clone(),
            follower: Default::default(),
            readout: Default::default(),
            cursor_el: dom::html_by_id(document, CURSOR_ID),
            follower_el: dom::html_by_id(document, FOLLOWER_ID),
            coords_el: dom::html_by_id(document, COORDS_ID),
        }),
    );
    Ok(())
}

fn mount_hero(app: &App, document: &web::Document) -> anyhow::Result<()> {
    let title = dom::html_by_id(document, HERO_TITLE_ID);
    let subtitle = dom::html_by_id(document, HERO_SUBTITLE_ID);
    let reveal_els: Vec<web::HtmlElement> = [subtitle.clone(), dom::html_by_id(document, ENTER_BTN_ID)]
        .into_iter()
        .flatten()
        .collect();
    let boot = BootSequence::new(BOOT_MESSAGES, reveal_els.len());
    let scrambles = ScrambleTimeline::new(&[
        (HERO_TITLE_DELAY_SEC, HERO_TITLE_TEXT),
        (boot.reveal_at_sec(), HERO_SUBTITLE_TEXT),
    ]);
    app.register(
        "hero",
        Box::new(views::HeroView {
            intro: HeroIntro::default(),
            title_el: title.clone(),
            cube_els: dom::query_all(document, CUBE_SELECTOR),
            boot,
            scrambles,
            rng: app.rng.clone(),
            boot_text: dom::html_by_id(document, BOOT_TEXT_ID),
            document: document.clone(),
            reveal_els,
            scramble_targets: vec![title, subtitle],
        }),
    );
    Ok(())
}

fn mount_skills(app: &App, document: &web::Document) -> anyhow::Result<()> {
    match (
        dom::html_by_id(document, SKILLS_CONTAINER_ID),
        dom::canvas_by_id(document, SKILLS_CANVAS_ID),
    ) {
        (Some(container), Ok(canvas)) => {
            let surface = canvas::CanvasSurface::new(canvas)?;
            let view = {
                let mut rng = app.rng.borrow_mut();
                views::NetworkView::mount(document, container, surface, NETWORK_SKILLS, &mut *rng)?
            };
            let view = Rc::new(RefCell::new(view));
            let on_resize = view.clone();
            if let Some(window) = web::window() {
                dom::add_listener::<web::Event>(window.as_ref(), "resize", move |_| {
                    on_resize.borrow_mut().resize();
                });
            }
            app.register("skill-network", Box::new(view));
        }
        (_, Err(e)) => log::warn!("[skills] network skipped: {:?}", e),
        (None, _) => {}
    }

    if let Some(root) = dom::html_by_id(document, SOLAR_SYSTEM_ID) {
        let solar = Rc::new(RefCell::new(SolarSystem::new(ORBIT_SKILLS)));
        let time_scale = app.scheduler.borrow().time_scale();
        let view = views::SolarView::mount(document, &root, solar, time_scale)?;
        app.register("solar-system", Box::new(view));
    }
    Ok(())
}

fn mount_projects(app: &App, document: &web::Document) -> anyhow::Result<()> {
    let modal = dom::html_by_id(document, MODAL_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", MODAL_ID))?;
    let body = dom::html_by_id(document, MODAL_BODY_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", MODAL_BODY_ID))?;
    let modal_dom = views::ModalDom {
        modal,
        body,
        content: dom::html_by_id(document, MODAL_CONTENT_ID),
    };
    events::wire_modal(document, app.modal.clone(), modal_dom.clone());
    events::wire_global_keydown(app.modal.clone(), modal_dom.clone());
    app.register(
        "modal",
        Box::new(views::ModalView {
            controller: app.modal.clone(),
            dom: modal_dom,
        }),
    );
    Ok(())
}

fn mount_contact(app: &App, document: &web::Document) -> anyhow::Result<()> {
    let form = document
        .get_element_by_id(CONTACT_FORM_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CONTACT_FORM_ID))?
        .dyn_into::<web::HtmlFormElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let button = form
        .query_selector("button")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    let state = Rc::new(RefCell::new(views::ContactState {
        form: ContactForm::default(),
        saved_label: None,
    }));
    events::wire_contact_form(
        document,
        events::ContactWiring {
            form: form.clone(),
            button: button.clone(),
            state: state.clone(),
            bursts: app.bursts.clone(),
            rng: app.rng.clone(),
            spark_color: Rgba::rgb(SPARK_RGB),
        },
    );
    app.register(
        "contact",
        Box::new(views::ContactView {
            state,
            bursts: app.bursts.clone(),
            rng: app.rng.clone(),
            form_el: form,
            button,
            burst_color: Rgba::rgb(BURST_RGB),
        }),
    );
    Ok(())
}
