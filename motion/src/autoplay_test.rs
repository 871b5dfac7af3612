#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Autoplay
// =============================================================

#[test]
fn single_item_is_never_scheduled() {
    let mut autoplay = Autoplay::default();
    autoplay.start(0.0, 1);
    assert!(!autoplay.is_running());
    assert!(!autoplay.poll(60_000.0));

    autoplay.start(0.0, 0);
    assert!(!autoplay.is_running());
}

#[test]
fn tick_is_due_after_interval() {
    let mut autoplay = Autoplay::default();
    autoplay.start(1000.0, 3);
    assert_eq!(autoplay.deadline_ms(), Some(6000.0));
    assert!(!autoplay.poll(5999.0));
    assert!(autoplay.poll(6000.0));
    assert_eq!(autoplay.deadline_ms(), Some(11_000.0));
}

#[test]
fn restart_pushes_deadline_out() {
    let mut autoplay = Autoplay::default();
    autoplay.start(0.0, 3);
    autoplay.restart(4000.0);
    assert!(!autoplay.poll(5000.0));
    assert!(autoplay.poll(9000.0));
}

#[test]
fn stale_generation_is_rejected() {
    let mut autoplay = Autoplay::default();
    autoplay.start(0.0, 3);
    let armed = autoplay.generation();
    autoplay.restart(2000.0);
    assert!(!autoplay.fire(armed, 5000.0));
    let current = autoplay.generation();
    assert!(autoplay.fire(current, 7000.0));
    assert_ne!(autoplay.generation(), current);
}

#[test]
fn stopped_timer_ignores_fire() {
    let mut autoplay = Autoplay::default();
    autoplay.start(0.0, 3);
    autoplay.stop();
    let generation = autoplay.generation();
    assert!(!autoplay.fire(generation, 5000.0));
    assert!(!autoplay.is_running());
}

#[test]
fn growing_collection_starts_ticking() {
    let mut autoplay = Autoplay::new(1000.0);
    autoplay.start(0.0, 1);
    autoplay.set_len(500.0, 4);
    assert_eq!(autoplay.deadline_ms(), Some(1500.0));

    autoplay.set_len(800.0, 1);
    assert!(!autoplay.is_running());
}

#[test]
fn resizing_running_timer_keeps_deadline() {
    let mut autoplay = Autoplay::new(1000.0);
    autoplay.start(0.0, 3);
    autoplay.set_len(400.0, 5);
    assert_eq!(autoplay.deadline_ms(), Some(1000.0));
}

// =============================================================
// CarouselDriver
// =============================================================

#[test]
fn timer_advances_the_carousel() {
    let mut driver = CarouselDriver::new(3, 1200.0, 0.0);
    let generation = driver.autoplay().generation();
    assert!(driver.on_timer(generation, 5000.0));
    assert_eq!(driver.active_index(), 1);
}

#[test]
fn manual_click_racing_a_tick_advances_once() {
    let mut driver = CarouselDriver::new(4, 1200.0, 0.0);
    let pending = driver.autoplay().generation();

    driver.next_manual(4999.0);
    assert!(!driver.on_timer(pending, 5000.0));
    assert_eq!(driver.active_index(), 1);
}

#[test]
fn manual_navigation_resets_the_interval() {
    let mut driver = CarouselDriver::new(3, 1200.0, 0.0);
    driver.previous_manual(3000.0);
    assert_eq!(driver.active_index(), 2);
    assert!(!driver.poll(5000.0));
    assert!(driver.poll(8000.0));
    assert_eq!(driver.active_index(), 0);
}

#[test]
fn keyboard_and_jump_navigation_also_reset() {
    let mut driver = CarouselDriver::new(5, 1200.0, 0.0);
    driver.navigate_manual(NavKey::Next, 1000.0);
    driver.go_to_manual(4, 2000.0);
    assert_eq!(driver.active_index(), 4);
    assert_eq!(driver.autoplay().deadline_ms(), Some(7000.0));
}

#[test]
fn single_item_driver_never_moves() {
    let mut driver = CarouselDriver::new(1, 1200.0, 0.0);
    assert!(!driver.poll(100_000.0));
    driver.next_manual(10.0);
    assert_eq!(driver.active_index(), 0);
    assert!(!driver.autoplay().is_running());
}

#[test]
fn custom_interval() {
    let mut driver = CarouselDriver::new(3, 1200.0, 0.0).with_interval(250.0, 0.0);
    assert!(driver.poll(250.0));
    assert!(driver.poll(500.0));
    assert_eq!(driver.active_index(), 2);
}

#[test]
fn shrinking_collection_keeps_index_valid() {
    let mut driver = CarouselDriver::new(5, 1200.0, 0.0);
    driver.go_to_manual(4, 0.0);
    driver.set_len(2, 100.0);
    assert_eq!(driver.active_index(), 0);
    assert!(driver.autoplay().is_running());

    driver.set_len(0, 200.0);
    assert!(!driver.autoplay().is_running());
    assert!(driver.carousel().is_empty());
}

#[test]
fn stopped_driver_ignores_ticks() {
    let mut driver = CarouselDriver::new(3, 1200.0, 0.0);
    driver.stop();
    assert!(!driver.poll(10_000.0));
    assert_eq!(driver.active_index(), 0);
}
