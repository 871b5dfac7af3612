//! Owned browser timers for components.
//!
//! DESIGN
//! ======
//! `TimerSlot` holds at most one pending `Timeout`; scheduling drops (and so
//! cancels) the previous one. `Ticker` does the same for an `Interval`. Both
//! are `Copy` handles over reactive storage, so event handlers can capture
//! them, and the pending timer is dropped with the owning component.
//!
//! Timers never run during server rendering; there the handles are inert.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::{Interval, Timeout};
#[cfg(feature = "hydrate")]
use leptos::prelude::*;

/// Browser timers take whole milliseconds. Negative and non-finite delays
/// fire as soon as possible.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn delay_to_ms(delay_ms: f64) -> u32 {
    if !delay_ms.is_finite() || delay_ms <= 0.0 {
        return 0;
    }
    delay_ms.round().min(f64::from(u32::MAX)) as u32
}

#[derive(Clone, Copy)]
pub struct TimerSlot {
    #[cfg(feature = "hydrate")]
    pending: StoredValue<Option<Timeout>, LocalStorage>,
}

impl Default for TimerSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerSlot {
    #[must_use]
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "hydrate")]
            pending: StoredValue::new_local(None),
        }
    }

    /// Run `callback` after `delay_ms`, replacing any pending timer.
    pub fn schedule(self, delay_ms: f64, callback: impl FnOnce() + 'static) {
        #[cfg(feature = "hydrate")]
        {
            let timeout = Timeout::new(delay_to_ms(delay_ms), callback);
            self.pending.try_update_value(|slot| *slot = Some(timeout));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay_ms, callback);
        }
    }

    pub fn cancel(self) {
        #[cfg(feature = "hydrate")]
        self.pending.try_update_value(|slot| slot.take());
    }
}

#[derive(Clone, Copy)]
pub struct Ticker {
    #[cfg(feature = "hydrate")]
    running: StoredValue<Option<Interval>, LocalStorage>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ticker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "hydrate")]
            running: StoredValue::new_local(None),
        }
    }

    /// Call `tick` every `period_ms` until stopped. Restarting replaces the
    /// running interval.
    pub fn start(self, period_ms: f64, tick: impl FnMut() + 'static) {
        #[cfg(feature = "hydrate")]
        {
            let interval = Interval::new(delay_to_ms(period_ms).max(1), tick);
            self.running.try_update_value(|slot| *slot = Some(interval));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (period_ms, tick);
        }
    }

    /// Whether an interval is installed.
    #[must_use]
    pub fn is_running(self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.running.try_with_value(Option::is_some).unwrap_or(false)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    pub fn stop(self) {
        #[cfg(feature = "hydrate")]
        self.running.try_update_value(|slot| slot.take());
    }
}
