use super::*;

#[test]
fn exactly_one_event_is_featured() {
    assert_eq!(UPCOMING_EVENTS.iter().filter(|e| e.featured).count(), 1);
    let state = EventsState::default();
    assert_eq!(state.featured().map(|e| e.title), Some("AI India Summit 2026"));
}

#[test]
fn all_filter_lists_every_non_featured_event() {
    let state = EventsState::default();
    let listed = state.listed();
    assert_eq!(listed.len(), 5);
    assert!(listed.iter().all(|e| !e.featured));
}

#[test]
fn type_filter_narrows_the_listing() {
    let state = EventsState { filter: Some(EventType::Workshop) };
    let titles: Vec<_> = state.listed().iter().map(|e| e.title).collect();
    assert_eq!(titles, vec!["Cloud Architecture Workshop"]);
}

#[test]
fn featured_type_filter_lists_nothing_below_the_highlight() {
    let state = EventsState { filter: Some(EventType::Conference) };
    assert!(state.listed().is_empty());
    assert!(state.featured().is_some());
}

#[test]
fn counts_get_thousands_separators() {
    assert_eq!(format_count(75), "75");
    assert_eq!(format_count(1200), "1,200");
    assert_eq!(format_count(8000), "8,000");
    assert_eq!(format_count(1_234_567), "1,234,567");
}
