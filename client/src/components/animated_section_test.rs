#![allow(clippy::float_cmp)]

use super::*;
use crate::util::timelines::TimelineId;

fn pin(start: f64, end: f64) -> PinnedTrigger {
    PinnedTrigger::new(start, Some(end))
}

// =============================================================
// Pin bookkeeping
// =============================================================

#[test]
fn upsert_adds_new_keys() {
    let mut pins = Vec::new();
    upsert_pin(&mut pins, "hero", pin(0.0, 160.0));
    upsert_pin(&mut pins, "integrate", pin(900.0, 1220.0));
    assert_eq!(pins.len(), 2);
}

#[test]
fn upsert_replaces_a_remeasured_pin() {
    let mut pins = Vec::new();
    upsert_pin(&mut pins, "hero", pin(0.0, 160.0));
    upsert_pin(&mut pins, "hero", pin(0.0, 200.0));
    assert_eq!(pins.len(), 1);
    assert_eq!(pins[0].1.end_px, Some(200.0));
}

#[test]
fn triggers_come_back_in_document_order() {
    let pins = vec![
        ("empower".to_owned(), pin(2400.0, 2720.0)),
        ("hero".to_owned(), pin(0.0, 160.0)),
        ("integrate".to_owned(), pin(900.0, 1220.0)),
    ];
    let starts = sorted_triggers(&pins).iter().map(|t| t.start_px).collect::<Vec<_>>();
    assert_eq!(starts, vec![0.0, 900.0, 2400.0]);
}

// =============================================================
// Layout
// =============================================================

#[test]
fn pinned_records_use_the_sticky_stage() {
    assert!(is_pinned(&TimelineId::HeroScroll.load().unwrap()));
    assert!(is_pinned(&TimelineId::FeatureScroll.load().unwrap()));
    assert!(!is_pinned(&TimelineId::HeadingScrub.load().unwrap()));
    assert!(!is_pinned(&TimelineId::HeroLoad.load().unwrap()));
    assert!(!is_pinned(&TimelineId::ValueCards.load().unwrap()));
}

#[test]
fn spacer_adds_the_pin_distance_to_the_viewport() {
    assert_eq!(spacer_height(800.0, 320.0), 1120.0);
    assert_eq!(spacer_height(800.0, -10.0), 800.0);
}

#[test]
fn spacer_style_sets_only_the_height() {
    assert_eq!(spacer_style(1120.0), "height: 1120px;");
    assert_eq!(spacer_style(812.5), "height: 812.5px;");
}
