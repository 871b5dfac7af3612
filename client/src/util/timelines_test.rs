#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use motion::timeline::{Trigger, Viewport};

use super::*;

#[test]
fn every_builtin_record_parses() {
    for id in TimelineId::ALL {
        let timeline = id.load().unwrap_or_else(|e| panic!("{id:?}: {e}"));
        assert!(!timeline.targets().is_empty(), "{id:?} has no targets");
    }
}

#[test]
fn pinned_records_use_scroll_triggers() {
    for id in [TimelineId::HeroScroll, TimelineId::FeatureScroll] {
        let Trigger::Scroll(scroll) = id.load().unwrap().trigger else {
            panic!("{id:?} should be scroll driven");
        };
        assert!(scroll.pin);
        assert!(scroll.scrub > 0.0);
    }
}

#[test]
fn hero_scroll_starts_at_rest() {
    let timeline = TimelineId::HeroScroll.load().unwrap();
    let frames = timeline.sample_progress(0.0, &HashMap::new(), Viewport::new(1280.0, 800.0));
    assert!(frames.iter().all(|f| f.opacity == 1.0 && f.scale == 1.0));
}

#[test]
fn feature_scroll_starts_hidden_and_ends_hidden() {
    let timeline = TimelineId::FeatureScroll.load().unwrap();
    let viewport = Viewport::new(1280.0, 800.0);
    let counts = HashMap::new();
    let start = timeline.sample_progress(0.0, &counts, viewport);
    let headline = start.iter().find(|f| f.target == "feature-headline").unwrap();
    assert_eq!(headline.opacity, 0.0);

    let end = timeline.sample_progress(1.0, &counts, viewport);
    assert!(end.iter().all(|f| f.opacity == 0.0));
}

#[test]
fn listing_records_reverse_but_learning_records_do_not() {
    let reverse = |id: TimelineId| match id.load().unwrap().trigger {
        Trigger::Enter(enter) => enter.reverse,
        other => panic!("{id:?} has trigger {other:?}"),
    };
    assert!(reverse(TimelineId::ListingGrid));
    assert!(reverse(TimelineId::ListingHeader));
    assert!(!reverse(TimelineId::ValueCards));
    assert!(!reverse(TimelineId::SectionReveal));
}
