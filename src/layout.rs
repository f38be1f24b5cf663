use crate::constants::PROJECTS_SECTION_ID;
use crate::core::spy::{ScrollSpy, SectionBounds};
use crate::core::triggers::{ElementLayout, TriggerRegistry};
use crate::core::ScrollEngine;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements whose geometry feeds the scroller, the triggers and the spy.
pub struct LayoutRefs {
    pub content: web::HtmlElement,
    pub body: Option<web::HtmlElement>,
    pub projects: Option<web::HtmlElement>,
    pub carousel: Option<web::HtmlElement>,
    /// Trigger id and element, for every registered trigger.
    pub trigger_targets: Vec<(String, web::HtmlElement)>,
    pub sections: Vec<web::HtmlElement>,
}

pub struct Layout {
    pub refs: LayoutRefs,
    pub scroll: Rc<RefCell<ScrollEngine>>,
    pub triggers: Rc<RefCell<TriggerRegistry>>,
    pub spy: Rc<RefCell<ScrollSpy>>,
}

/// Top edge in content coordinates. Walks offset parents so the content's
/// own transform does not leak into the result.
fn content_top(el: &web::HtmlElement, content: &web::HtmlElement) -> f32 {
    let mut top = 0.0;
    let mut cur = Some(el.clone());
    while let Some(e) = cur {
        if e.is_same_node(Some(content)) {
            break;
        }
        top += e.offset_top() as f32;
        cur = e
            .offset_parent()
            .and_then(|p| p.dyn_into::<web::HtmlElement>().ok());
    }
    top
}

impl Layout {
    /// Pins first, then measurement, then the scroll limit.
    pub fn refresh(&self) {
        let (vw, vh) = dom::viewport_size();
        self.scroll.borrow_mut().set_viewport(vw, vh);

        {
            let mut triggers = self.triggers.borrow_mut();
            if let (Some(projects), Some(carousel)) = (&self.refs.projects, &self.refs.carousel) {
                triggers.set_pin_length(PROJECTS_SECTION_ID, carousel.scroll_width() as f32);
                let spacing = triggers.pin_spacing(PROJECTS_SECTION_ID);
                dom::set_style(projects, "margin-bottom", &format!("{:.0}px", spacing));
            }

            let layout: Vec<ElementLayout> = self
                .refs
                .trigger_targets
                .iter()
                .map(|(id, el)| ElementLayout {
                    id: id.clone(),
                    top: content_top(el, &self.refs.content),
                })
                .collect();
            triggers.refresh(&*self.scroll.borrow(), &layout);
        }

        let sections = self
            .refs
            .sections
            .iter()
            .filter(|el| !el.id().is_empty())
            .map(|el| SectionBounds {
                id: el.id(),
                top: content_top(el, &self.refs.content),
                height: el.offset_height() as f32,
            })
            .collect();
        self.spy.borrow_mut().set_sections(sections);

        let content_height = self.refs.content.offset_height() as f32;
        self.scroll.borrow_mut().on_resize(content_height, vw, vh);
        if let Some(body) = &self.refs.body {
            dom::set_style(body, "height", &format!("{:.0}px", content_height));
        }
        log::info!(
            "[layout] content {:.0}px, viewport {:.0}x{:.0}, limit {:.0}",
            content_height,
            vw,
            vh,
            self.scroll.borrow().limit()
        );
    }
}

/// Refresh on window resize and whenever the content box changes size.
pub fn wire_refresh(layout: Rc<Layout>) {
    let on_resize = layout.clone();
    if let Some(window) = web::window() {
        dom::add_listener::<web::Event>(window.as_ref(), "resize", move |_| {
            on_resize.refresh();
        });
    }

    let on_observe = layout.clone();
    let closure = Closure::wrap(Box::new(move |_entries: js_sys::Array| {
        on_observe.refresh();
    }) as Box<dyn FnMut(_)>);
    match web::ResizeObserver::new(closure.as_ref().unchecked_ref()) {
        Ok(observer) => observer.observe(&layout.refs.content),
        Err(e) => log::warn!("[layout] ResizeObserver unavailable: {:?}", e),
    }
    closure.forget();
}
