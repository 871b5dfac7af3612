#![cfg(not(feature = "hydrate"))]
#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn reads_are_neutral_without_a_window() {
    assert_eq!(now_ms(), 0.0);
    assert_eq!(scroll_y(), 0.0);
    assert_eq!(max_scroll(), 0.0);
    assert_eq!(viewport(), FALLBACK_VIEWPORT);
    assert!(!scroll_to_id("contact"));
}

#[test]
fn geometry_is_in_document_coordinates() {
    let geometry = geometry_at(-120.0, 900.0, 2000.0, Viewport::new(1280.0, 720.0));
    assert_eq!(geometry.element_top, 1880.0);
    assert_eq!(geometry.element_height, 900.0);
    assert_eq!(geometry.viewport_height, 720.0);
}

#[test]
fn selector_matches_the_anim_attribute() {
    assert_eq!(anim_selector("hero-chip"), "[data-anim=\"hero-chip\"]");
}
