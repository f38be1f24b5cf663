use crate::constants::WHEEL_LINE_PX;

pub const DOM_DELTA_PIXEL: u32 = 0;
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;

/// Normalize a wheel delta to pixels. Unknown modes pass through unchanged.
#[inline]
pub fn wheel_delta_px(delta: f64, mode: u32, viewport_height: f32) -> f32 {
    let delta = delta as f32;
    match mode {
        DOM_DELTA_LINE => delta * WHEEL_LINE_PX,
        DOM_DELTA_PAGE => delta * viewport_height,
        _ => delta,
    }
}

/// `"#about"` → `Some("about")`; anything that isn't an in-page anchor → None.
#[inline]
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.rsplit_once('#').map(|(_, id)| id)?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Whether a nav link's href points at the given section.
#[inline]
pub fn link_matches_section(href: &str, section_id: &str) -> bool {
    !section_id.is_empty() && anchor_target(href) == Some(section_id)
}
