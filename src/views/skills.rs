use crate::canvas::CanvasSurface;
use crate::constants::{ORBIT_PATH_CLASS, PLANET_CLASS, SKILL_NODE_CLASS, SKILL_NODE_HOVER_SCALE};
use crate::core::network::SkillNetwork;
use crate::core::orbit::SolarSystem;
use crate::core::{FrameTime, Tickable, TimeScale};
use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn create_div(document: &web::Document, class: &str, text: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create_element: {:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    el.set_class_name(class);
    el.set_inner_text(text);
    Ok(el)
}

fn container_size(container: &web::HtmlElement) -> Vec2 {
    Vec2::new(
        container.offset_width() as f32,
        container.offset_height() as f32,
    )
}

/// Drifting skill boxes with connection lines drawn on a canvas behind them.
pub struct NetworkView {
    pub network: SkillNetwork,
    pub surface: CanvasSurface,
    pub container: web::HtmlElement,
    pub node_els: Vec<web::HtmlElement>,
}

impl NetworkView {
    pub fn mount(
        document: &web::Document,
        container: web::HtmlElement,
        surface: CanvasSurface,
        labels: &[&str],
        rng: &mut impl rand::Rng,
    ) -> anyhow::Result<Self> {
        let network = SkillNetwork::new(labels, container_size(&container), rng);
        let mut node_els = Vec::with_capacity(labels.len());
        for node in network.nodes() {
            let el = create_div(document, SKILL_NODE_CLASS, &node.label)?;
            dom::set_style(&el, "transition", "transform 0.3s");
            container
                .append_child(&el)
                .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))?;
            let target: &web::EventTarget = el.as_ref();
            let grow = el.clone();
            dom::add_listener::<web::MouseEvent>(target, "mouseenter", move |_| {
                dom::set_style(&grow, "transform", &format!("scale({})", SKILL_NODE_HOVER_SCALE));
            });
            let shrink = el.clone();
            dom::add_listener::<web::MouseEvent>(target, "mouseleave", move |_| {
                dom::set_style(&shrink, "transform", "scale(1)");
            });
            node_els.push(el);
        }
        log::info!("[skills] network with {} nodes", node_els.len());
        let mut view = Self {
            network,
            surface,
            container,
            node_els,
        };
        view.resize();
        Ok(view)
    }

    pub fn resize(&mut self) {
        dom::sync_canvas_size(self.surface.canvas());
        self.network.resize(container_size(&self.container));
    }
}

impl Tickable for NetworkView {
    fn on_frame(&mut self, _frame: &FrameTime) {
        self.network.step();
        for (node, el) in self.network.nodes().iter().zip(&self.node_els) {
            dom::set_style(el, "left", &format!("{:.2}px", node.pos.x));
            dom::set_style(el, "top", &format!("{:.2}px", node.pos.y));
        }
        self.network.render(&mut self.surface);
    }
}

/// Orbiting skill planets. Hover state is shared with the mouse handlers.
pub struct SolarView {
    pub solar: Rc<RefCell<SolarSystem>>,
    pub planet_els: Vec<web::HtmlElement>,
}

impl SolarView {
    pub fn mount(
        document: &web::Document,
        root: &web::HtmlElement,
        solar: Rc<RefCell<SolarSystem>>,
        time_scale: TimeScale,
    ) -> anyhow::Result<Self> {
        let mut planet_els = Vec::new();
        let planets = solar.borrow().planets().to_vec();
        for (i, planet) in planets.iter().enumerate() {
            let ring = create_div(document, ORBIT_PATH_CLASS, "")?;
            let diameter = format!("{:.0}px", planet.radius * 2.0);
            dom::set_style(&ring, "width", &diameter);
            dom::set_style(&ring, "height", &diameter);
            root.append_child(&ring)
                .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))?;

            let el = create_div(document, PLANET_CLASS, &planet.label)?;
            root.append_child(&el)
                .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))?;
            let target: &web::EventTarget = el.as_ref();
            let enter = solar.clone();
            let enter_scale = time_scale.clone();
            dom::add_listener::<web::MouseEvent>(target, "mouseenter", move |_| {
                let mut s = enter.borrow_mut();
                s.set_hovered(Some(i));
                enter_scale.set(s.time_scale());
            });
            let leave = solar.clone();
            let leave_scale = time_scale.clone();
            dom::add_listener::<web::MouseEvent>(target, "mouseleave", move |_| {
                let mut s = leave.borrow_mut();
                if s.hovered() == Some(i) {
                    s.set_hovered(None);
                    leave_scale.set(s.time_scale());
                }
            });
            planet_els.push(el);
        }
        log::info!("[skills] solar system with {} planets", planet_els.len());
        Ok(Self { solar, planet_els })
    }
}

impl Tickable for SolarView {
    fn on_frame(&mut self, frame: &FrameTime) {
        let mut solar = self.solar.borrow_mut();
        solar.tick(frame.tween_dt_sec);
        for (planet, el) in solar.planets().iter().zip(&self.planet_els) {
            let at = planet.offset();
            dom::set_style(
                el,
                "transform",
                &format!(
                    "translate3d({:.2}px, {:.2}px, 0) scale({:.3})",
                    at.x, at.y, planet.scale
                ),
            );
        }
    }
}
