#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn home_ranges() -> Vec<PinnedRange> {
    vec![PinnedRange::new(0.1, 0.2), PinnedRange::new(0.6, 0.7)]
}

// =============================================================
// PinnedRange
// =============================================================

#[test]
fn center_is_midpoint() {
    assert!(approx_eq(PinnedRange::new(0.3, 0.4).center(), 0.35));
    assert!(approx_eq(PinnedRange::new(0.5, 0.5).center(), 0.5));
}

#[test]
fn inverted_and_non_finite_ranges_are_invalid() {
    assert!(PinnedRange::new(0.2, 0.2).is_valid());
    assert!(!PinnedRange::new(0.4, 0.3).is_valid());
    assert!(!PinnedRange::new(f64::NAN, 0.3).is_valid());
    assert!(!PinnedRange::new(0.1, f64::INFINITY).is_valid());
}

#[test]
fn degenerate_range_has_buffer_window() {
    let range = PinnedRange::new(0.5, 0.5);
    assert!(range.contains_buffered(0.49, SNAP_BUFFER));
    assert!(range.contains_buffered(0.515, SNAP_BUFFER));
    assert!(!range.contains_buffered(0.53, SNAP_BUFFER));
}

#[test]
fn trigger_normalizes_against_max_scroll() {
    let range = PinnedTrigger::new(500.0, Some(1500.0)).normalize(5000.0);
    assert!(approx_eq(range.start, 0.1));
    assert!(approx_eq(range.end, 0.3));
}

#[test]
fn trigger_without_end_collapses_to_start() {
    let range = PinnedTrigger::new(2000.0, None).normalize(4000.0);
    assert!(approx_eq(range.start, 0.5));
    assert!(approx_eq(range.end, 0.5));
}

// =============================================================
// compute_snap_target
// =============================================================

#[test]
fn empty_ranges_pass_through() {
    for v in [0.0, 0.01, 0.25, 0.5, 0.99, 1.0] {
        assert_eq!(compute_snap_target(v, &[]), v);
    }
}

#[test]
fn nearest_center_is_selected() {
    let target = compute_snap_target(0.63, &home_ranges());
    assert!(approx_eq(target, 0.65), "got {target}");
}

#[test]
fn value_inside_first_range_snaps_to_its_center() {
    let target = compute_snap_target(0.12, &home_ranges());
    assert!(approx_eq(target, 0.15), "got {target}");
}

#[test]
fn free_scroll_between_ranges() {
    assert_eq!(compute_snap_target(0.4, &home_ranges()), 0.4);
    assert_eq!(compute_snap_target(0.95, &home_ranges()), 0.95);
}

#[test]
fn buffer_extends_range_slightly() {
    let ranges = [PinnedRange::new(0.3, 0.4)];
    assert!(approx_eq(compute_snap_target(0.29, &ranges), 0.35));
    assert!(approx_eq(compute_snap_target(0.41, &ranges), 0.35));
    assert_eq!(compute_snap_target(0.27, &ranges), 0.27);
    assert_eq!(compute_snap_target(0.43, &ranges), 0.43);
}

#[test]
fn snapping_is_idempotent() {
    let ranges = home_ranges();
    for v in [0.09, 0.15, 0.21, 0.5, 0.59, 0.66, 0.72] {
        let once = compute_snap_target(v, &ranges);
        let twice = compute_snap_target(once, &ranges);
        assert_eq!(once, twice, "value {v}");
    }
}

#[test]
fn overlapping_ranges_compare_all_centers() {
    let ranges = [PinnedRange::new(0.2, 0.6), PinnedRange::new(0.3, 0.4)];
    // 0.33 sits in both; 0.35 is closer than 0.4.
    assert!(approx_eq(compute_snap_target(0.33, &ranges), 0.35));
    // 0.55 is only inside the wide range, yet its center 0.4 is still nearest.
    assert!(approx_eq(compute_snap_target(0.55, &ranges), 0.4));
}

#[test]
fn candidates_include_ranges_not_containing_value() {
    // Inside the long range near its end, but the short range's center is closer.
    let ranges = [PinnedRange::new(0.0, 0.5), PinnedRange::new(0.52, 0.54)];
    assert!(approx_eq(compute_snap_target(0.49, &ranges), 0.53));
}

#[test]
fn malformed_ranges_are_ignored() {
    let ranges = [PinnedRange::new(0.5, 0.4), PinnedRange::new(f64::NAN, 0.9)];
    assert_eq!(compute_snap_target(0.45, &ranges), 0.45);

    let mixed = [PinnedRange::new(0.5, 0.4), PinnedRange::new(0.1, 0.2)];
    assert!(approx_eq(compute_snap_target(0.18, &mixed), 0.15));
    assert_eq!(compute_snap_target(0.45, &mixed), 0.45);
}

#[test]
fn equidistant_centers_prefer_earliest_start() {
    // Centers 0.375 and 0.625 are both exactly 0.125 away from 0.5.
    let ranges = [PinnedRange::new(0.5, 0.75), PinnedRange::new(0.25, 0.5)];
    assert_eq!(compute_snap_target(0.5, &ranges), 0.375);

    let reversed = [PinnedRange::new(0.25, 0.5), PinnedRange::new(0.5, 0.75)];
    assert_eq!(compute_snap_target(0.5, &reversed), 0.375);
}

#[test]
fn non_finite_value_is_returned_unchanged() {
    assert!(compute_snap_target(f64::NAN, &home_ranges()).is_nan());
}

#[test]
fn custom_buffer_widens_window() {
    let ranges = [PinnedRange::new(0.3, 0.4)];
    assert_eq!(snap_with_buffer(0.25, &ranges, SNAP_BUFFER), 0.25);
    assert!(approx_eq(snap_with_buffer(0.25, &ranges, 0.06), 0.35));
}

// =============================================================
// SnapTiming
// =============================================================

#[test]
fn snap_duration_grows_with_distance_and_saturates() {
    let timing = SnapTiming::default();
    assert_eq!(timing.duration_for(0.0), SNAP_DURATION_MIN_S);
    assert!(timing.duration_for(0.05) > SNAP_DURATION_MIN_S);
    assert!(timing.duration_for(0.05) < SNAP_DURATION_MAX_S);
    assert!(approx_eq(timing.duration_for(0.5), SNAP_DURATION_MAX_S));
    assert!(approx_eq(timing.duration_for(-0.5), SNAP_DURATION_MAX_S));
    assert!(approx_eq(timing.duration_for(f64::NAN), SNAP_DURATION_MAX_S));
}

// =============================================================
// SnapCoordinator
// =============================================================

#[test]
fn coordinator_not_installed_without_pins() {
    assert!(SnapCoordinator::install(&[], 4000.0).is_none());
}

#[test]
fn coordinator_not_installed_without_scroll_distance() {
    let pins = [PinnedTrigger::new(0.0, Some(800.0))];
    assert!(SnapCoordinator::install(&pins, 0.0).is_none());
    assert!(SnapCoordinator::install(&pins, f64::NAN).is_none());
}

#[test]
fn coordinator_not_installed_when_every_pin_is_malformed() {
    let pins = [PinnedTrigger::new(900.0, Some(100.0))];
    assert!(SnapCoordinator::install(&pins, 4000.0).is_none());
}

#[test]
fn coordinator_sorts_ranges_by_start() {
    let pins = [
        PinnedTrigger::new(2400.0, Some(3200.0)),
        PinnedTrigger::new(0.0, Some(800.0)),
    ];
    let coordinator = SnapCoordinator::install(&pins, 8000.0).expect("pins should install");
    let starts = coordinator.ranges().iter().map(|r| r.start).collect::<Vec<_>>();
    assert!(approx_eq(starts[0], 0.0));
    assert!(approx_eq(starts[1], 0.3));
}

#[test]
fn coordinator_snaps_like_the_free_function() {
    let coordinator = SnapCoordinator::from_ranges(home_ranges()).expect("ranges should install");
    assert!(approx_eq(coordinator.snap(0.63), 0.65));
    assert_eq!(coordinator.snap(0.4), 0.4);
}

#[test]
fn coordinator_plan_skips_free_scroll_and_settled_positions() {
    let coordinator = SnapCoordinator::from_ranges(home_ranges()).expect("ranges should install");
    assert_eq!(coordinator.plan(0.4), None);
    let center = coordinator.snap(0.63);
    assert_eq!(coordinator.plan(center), None);

    let (target, duration) = coordinator.plan(0.63).expect("should plan a snap");
    assert!(approx_eq(target, 0.65));
    assert!(duration >= SNAP_DURATION_MIN_S && duration <= SNAP_DURATION_MAX_S);
}

#[test]
fn coordinator_timing_can_be_overridden() {
    let timing = SnapTiming { duration_min_s: 0.2, duration_max_s: 0.4, delay_s: 0.1, ease: Ease::Linear };
    let coordinator = SnapCoordinator::from_ranges(home_ranges())
        .expect("ranges should install")
        .with_timing(timing);
    assert_eq!(coordinator.timing(), timing);
}
