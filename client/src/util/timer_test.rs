#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn delay_rounds_to_whole_milliseconds() {
    assert_eq!(delay_to_ms(300.0), 300);
    assert_eq!(delay_to_ms(24.6), 25);
    assert_eq!(delay_to_ms(0.4), 0);
}

#[test]
fn delay_clamps_bad_input() {
    assert_eq!(delay_to_ms(-5.0), 0);
    assert_eq!(delay_to_ms(f64::NAN), 0);
    assert_eq!(delay_to_ms(f64::INFINITY), 0);
    assert_eq!(delay_to_ms(1e12), u32::MAX);
}

#[test]
fn handles_are_inert_without_a_browser() {
    let slot = TimerSlot::new();
    slot.schedule(10.0, || panic!("timers never fire during server rendering"));
    slot.cancel();

    let ticker = Ticker::new();
    ticker.start(16.0, || panic!("tickers never fire during server rendering"));
    assert!(!ticker.is_running());
    ticker.stop();
}
