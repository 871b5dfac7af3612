#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn glide_starts_at_origin() {
    let (y, done) = glide_position(1000.0, 1200.0, 0.0, 0.12, Ease::Power2Out);
    assert_eq!(y, 1000.0);
    assert!(!done);
}

#[test]
fn glide_lands_exactly_on_target() {
    let (y, done) = glide_position(1000.0, 1200.0, 0.12, 0.12, Ease::Power2Out);
    assert_eq!(y, 1200.0);
    assert!(done);
    let (y, done) = glide_position(1000.0, 1200.0, 3.0, 0.12, Ease::Power2Out);
    assert_eq!(y, 1200.0);
    assert!(done);
}

#[test]
fn glide_eases_out() {
    // power2.out covers more than half the distance by the midpoint.
    let (y, _) = glide_position(0.0, 100.0, 0.05, 0.1, Ease::Power2Out);
    assert!(y > 50.0 && y < 100.0, "y = {y}");
}

#[test]
fn glide_moves_upward_too() {
    let (y, _) = glide_position(500.0, 300.0, 0.05, 0.1, Ease::Linear);
    assert!((y - 400.0).abs() < 1e-9);
}

#[test]
fn zero_duration_jumps() {
    assert_eq!(glide_position(0.0, 80.0, 0.0, 0.0, Ease::Linear), (80.0, true));
    assert_eq!(glide_position(0.0, 80.0, 0.0, f64::NAN, Ease::Linear), (80.0, true));
}

#[test]
fn settle_waits_for_idle_plus_delay() {
    let timing = SnapTiming::default();
    assert_eq!(settle_delay_ms(&timing), SCROLL_IDLE_MS);
    assert_eq!(settle_delay_ms(&SnapTiming { delay_s: 0.25, ..timing }), SCROLL_IDLE_MS + 250.0);
}

#[test]
fn settle_ignores_bad_delays() {
    let timing = SnapTiming::default();
    assert_eq!(settle_delay_ms(&SnapTiming { delay_s: -1.0, ..timing }), SCROLL_IDLE_MS);
    assert_eq!(settle_delay_ms(&SnapTiming { delay_s: f64::NAN, ..timing }), SCROLL_IDLE_MS);
}
