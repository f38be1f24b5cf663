// Host-side tests for wheel normalization and anchor parsing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use input::{
    anchor_target, link_matches_section, wheel_delta_px, DOM_DELTA_LINE, DOM_DELTA_PAGE,
    DOM_DELTA_PIXEL,
};

#[test]
fn pixel_deltas_pass_through() {
    assert_eq!(wheel_delta_px(120.0, DOM_DELTA_PIXEL, 800.0), 120.0);
    assert_eq!(wheel_delta_px(-3.5, DOM_DELTA_PIXEL, 800.0), -3.5);
}

#[test]
fn line_and_page_deltas_scale() {
    assert_eq!(wheel_delta_px(3.0, DOM_DELTA_LINE, 800.0), 48.0);
    assert_eq!(wheel_delta_px(-1.0, DOM_DELTA_PAGE, 800.0), -800.0);
}

#[test]
fn unknown_delta_mode_is_treated_as_pixels() {
    assert_eq!(wheel_delta_px(10.0, 7, 800.0), 10.0);
}

#[test]
fn anchors() {
    assert_eq!(anchor_target("#about"), Some("about"));
    assert_eq!(anchor_target("index.html#skills"), Some("skills"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("https://example.com/"), None);
    assert_eq!(anchor_target(""), None);
}

#[test]
fn nav_links_match_their_section() {
    assert!(link_matches_section("#projects", "projects"));
    assert!(!link_matches_section("#projects", "project"));
    assert!(!link_matches_section("#", ""));
    assert!(!link_matches_section("/cv.pdf", "cv"));
}
