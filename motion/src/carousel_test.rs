#![allow(clippy::float_cmp)]

use super::*;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// Gap function
// =============================================================

#[test]
fn gap_is_minimum_up_to_1024() {
    for width in [0.0, 320.0, 768.0, 1023.9, 1024.0] {
        assert_eq!(calculate_gap(width), 60.0, "width {width}");
    }
}

#[test]
fn gap_is_exactly_86_at_1456() {
    assert_eq!(calculate_gap(1456.0), 86.0);
}

#[test]
fn gap_interpolates_between_breakpoints() {
    // Halfway between 1024 and 1456.
    assert!(approx_eq(calculate_gap(1240.0), 73.0));
}

#[test]
fn gap_keeps_growing_past_1456() {
    assert!(approx_eq(calculate_gap(1556.0), 86.0 + 0.06018 * 100.0));
    assert!(calculate_gap(1920.0) > 86.0);
}

#[test]
fn gap_is_non_decreasing() {
    let mut prev = calculate_gap(0.0);
    let mut width = 0.0;
    while width <= 3000.0 {
        let gap = calculate_gap(width);
        assert!(gap >= prev, "gap shrank at width {width}");
        prev = gap;
        width += 7.5;
    }
}

#[test]
fn gap_treats_bad_widths_as_minimum() {
    assert_eq!(calculate_gap(-50.0), 60.0);
    assert_eq!(calculate_gap(f64::NAN), 60.0);
    assert_eq!(calculate_gap(f64::INFINITY), 60.0);
    assert_eq!(calculate_gap(f64::NEG_INFINITY), 60.0);
}

#[test]
fn infinite_width_keeps_transforms_finite() {
    let items = ["a", "b", "c"];
    let transforms = compute_item_transforms(&items, 1, f64::INFINITY);
    assert!(transforms.iter().all(|t| t.translate_x.is_finite() && t.translate_y.is_finite()));
    assert!(transforms.iter().all(|t| !t.to_css().contains("inf")));
}

#[test]
fn lift_is_eighty_percent_of_gap() {
    assert!(approx_eq(vertical_lift(60.0), 48.0));
    assert!(approx_eq(vertical_lift(86.0), 68.8));
}

// =============================================================
// Index math
// =============================================================

#[test]
fn navigation_wraps_around() {
    assert_eq!(previous_index(0, 3), 2);
    assert_eq!(next_index(2, 3), 0);
    assert_eq!(next_index(0, 3), 1);
    assert_eq!(previous_index(2, 3), 1);
}

#[test]
fn single_item_navigation_is_stable() {
    assert_eq!(next_index(0, 1), 0);
    assert_eq!(previous_index(0, 1), 0);
}

#[test]
fn empty_collection_navigation_stays_at_zero() {
    assert_eq!(next_index(0, 0), 0);
    assert_eq!(previous_index(5, 0), 0);
}

#[test]
fn stale_indices_are_normalized() {
    assert_eq!(normalize_index(7, 3), 1);
    assert_eq!(next_index(7, 3), 2);
    assert_eq!(previous_index(7, 3), 0);
}

// =============================================================
// Layout
// =============================================================

#[test]
fn four_item_scenario() {
    let items = ["A", "B", "C", "D"];
    let transforms = compute_item_transforms(&items, 1, 1200.0);
    assert_eq!(transforms.len(), 4);
    let gap = calculate_gap(1200.0);

    let b = transforms[1];
    assert_eq!(b.slot, Slot::Active);
    assert_eq!(b.scale, 1.0);
    assert_eq!(b.rotate_y_deg, 0.0);
    assert!(b.opacity_visible);
    assert_eq!(b.z_order, 3);

    let a = transforms[0];
    assert_eq!(a.slot, Slot::Left);
    assert_eq!(a.rotate_y_deg, 15.0);
    assert_eq!(a.scale, 0.85);
    assert!(a.opacity_visible);
    assert_eq!(a.translate_x, -gap);
    assert!(approx_eq(a.translate_y, -0.8 * gap));
    assert_eq!(a.z_order, 2);

    let c = transforms[2];
    assert_eq!(c.slot, Slot::Right);
    assert_eq!(c.rotate_y_deg, -15.0);
    assert_eq!(c.scale, 0.85);
    assert!(c.opacity_visible);
    assert_eq!(c.translate_x, gap);
    assert_eq!(c.z_order, 2);

    let d = transforms[3];
    assert_eq!(d.slot, Slot::Hidden);
    assert!(!d.opacity_visible);
    assert!(!d.interactive);
    assert_eq!(d.opacity(), 0.0);
    assert_eq!(d.z_order, 1);
}

#[test]
fn empty_collection_yields_no_transforms() {
    let items: [&str; 0] = [];
    assert!(compute_item_transforms(&items, 0, 1200.0).is_empty());
}

#[test]
fn single_item_is_active_without_neighbors() {
    let transforms = compute_item_transforms(&["only"], 0, 1200.0);
    assert_eq!(transforms.len(), 1);
    assert_eq!(transforms[0].slot, Slot::Active);
}

#[test]
fn two_items_show_one_left_neighbor() {
    let transforms = layout(2, 0, 1200.0);
    assert_eq!(transforms[0].slot, Slot::Active);
    assert_eq!(transforms[1].slot, Slot::Left);
}

#[test]
fn exactly_one_active_and_at_most_two_visible_neighbors() {
    for n in 1..8 {
        for active in 0..n {
            let transforms = layout(n, active, 1300.0);
            let active_count = transforms.iter().filter(|t| t.slot == Slot::Active).count();
            let visible = transforms.iter().filter(|t| t.opacity_visible).count();
            assert_eq!(active_count, 1);
            assert_eq!(visible, n.min(3));
        }
    }
}

#[test]
fn out_of_range_active_index_is_normalized() {
    let transforms = layout(3, 4, 1200.0);
    assert_eq!(transforms[1].slot, Slot::Active);
    assert_eq!(transforms[0].slot, Slot::Left);
    assert_eq!(transforms[2].slot, Slot::Right);
}

#[test]
fn css_for_visible_and_hidden_slots() {
    let left = ItemTransform::for_slot(Slot::Left, 60.0);
    let css = left.to_css();
    assert!(css.contains("z-index: 2;"));
    assert!(css.contains("opacity: 1;"));
    assert!(css.contains("translateX(-60px) translateY(-48px) scale(0.85) rotateY(15deg)"));
    assert!(css.contains("transition: all 0.8s cubic-bezier(.4,2,.3,1);"));

    let hidden = ItemTransform::for_slot(Slot::Hidden, 60.0).to_css();
    assert!(hidden.contains("opacity: 0;"));
    assert!(hidden.contains("pointer-events: none;"));
    assert!(!hidden.contains("transform:"));
}

// =============================================================
// Keyboard + quote reveal
// =============================================================

#[test]
fn arrow_keys_map_to_navigation() {
    assert_eq!(NavKey::from_key("ArrowLeft"), Some(NavKey::Previous));
    assert_eq!(NavKey::from_key("ArrowRight"), Some(NavKey::Next));
    assert_eq!(NavKey::from_key("Enter"), None);
}

#[test]
fn word_reveal_staggers_by_25ms() {
    let delays = word_reveal_delays("Standards  build   trust");
    assert_eq!(
        delays,
        vec![("Standards".to_owned(), 0.0), ("build".to_owned(), 25.0), ("trust".to_owned(), 50.0)]
    );
}

// =============================================================
// Carousel state
// =============================================================

#[test]
fn carousel_steps_and_wraps() {
    let mut carousel = Carousel::new(3, 1200.0);
    carousel.previous();
    assert_eq!(carousel.active_index(), 2);
    carousel.next();
    carousel.next();
    assert_eq!(carousel.active_index(), 1);
    carousel.navigate(NavKey::Previous);
    assert_eq!(carousel.active_index(), 0);
}

#[test]
fn carousel_go_to_normalizes() {
    let mut carousel = Carousel::new(4, 1200.0);
    carousel.go_to(9);
    assert_eq!(carousel.active_index(), 1);
}

#[test]
fn carousel_ignores_bad_width_samples() {
    let mut carousel = Carousel::new(4, 1200.0);
    carousel.set_viewport_width(0.0);
    carousel.set_viewport_width(f64::NAN);
    assert_eq!(carousel.viewport_width(), 1200.0);
    carousel.set_viewport_width(1456.0);
    assert_eq!(carousel.gap(), 86.0);
}

#[test]
fn carousel_shrink_keeps_index_in_range() {
    let mut carousel = Carousel::new(5, 1200.0);
    carousel.go_to(4);
    carousel.resize(3);
    assert_eq!(carousel.active_index(), 1);
    assert_eq!(carousel.layout().len(), 3);

    carousel.resize(0);
    assert!(carousel.is_empty());
    assert_eq!(carousel.active_index(), 0);
    assert!(carousel.layout().is_empty());
}
