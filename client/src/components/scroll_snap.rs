//! Page-level scroll snapping onto pinned sections.
//!
//! Pinned sections report themselves to the page's [`PinRegistry`] while
//! they mount. Shortly after mount this component builds a
//! `SnapCoordinator` from whatever was reported; pages with nothing pinned
//! (or nothing to scroll) never snap. When scrolling comes to rest inside a
//! buffered pin, the window glides to that pin's center.

#[cfg(test)]
#[path = "scroll_snap_test.rs"]
mod scroll_snap_test;

use leptos::prelude::*;
use motion::easing::Ease;
use motion::scroll_snap::SnapTiming;

use crate::components::animated_section::PinRegistry;

/// Delay between mount and reading the reported pins, so every pinned
/// section has measured itself.
pub const INSTALL_DELAY_MS: f64 = 500.0;

/// Quiet period after the last scroll event that counts as "scroll ended".
pub const SCROLL_IDLE_MS: f64 = 120.0;

/// Wait after the last scroll event before settling: the idle period plus
/// the snap's configured delay.
#[must_use]
pub fn settle_delay_ms(timing: &SnapTiming) -> f64 {
    let delay_ms = timing.delay_s * 1000.0;
    if delay_ms.is_finite() { SCROLL_IDLE_MS + delay_ms.max(0.0) } else { SCROLL_IDLE_MS }
}

/// Scroll offset `elapsed_s` into a snap glide from `from_px` to `to_px`.
/// Returns the offset and whether the glide has finished.
#[must_use]
pub fn glide_position(from_px: f64, to_px: f64, elapsed_s: f64, duration_s: f64, ease: Ease) -> (f64, bool) {
    if !duration_s.is_finite() || duration_s <= 0.0 || elapsed_s >= duration_s {
        return (to_px, true);
    }
    let t = ease.apply((elapsed_s / duration_s).max(0.0));
    (from_px + (to_px - from_px) * t, false)
}

/// Installs scroll snapping for the current page. Renders nothing.
#[component]
pub fn ScrollSnap() -> impl IntoView {
    let Some(registry) = use_context::<PinRegistry>() else {
        leptos::logging::warn!("ScrollSnap mounted without a PinRegistry");
        return;
    };

    #[cfg(feature = "hydrate")]
    snapper::install(registry);
    #[cfg(not(feature = "hydrate"))]
    let _ = registry;
}

#[cfg(feature = "hydrate")]
mod snapper {
    use std::cell::Cell;
    use std::rc::Rc;

    use leptos::prelude::*;
    use motion::scroll_snap::SnapCoordinator;

    use super::{INSTALL_DELAY_MS, glide_position, settle_delay_ms};
    use crate::components::animated_section::PinRegistry;
    use crate::util::browser;
    use crate::util::timer::{Ticker, TimerSlot};

    const FRAME_MS: f64 = 16.0;

    struct Snapper {
        coordinator: SnapCoordinator,
        max_scroll: f64,
        gliding: Cell<bool>,
        idle: TimerSlot,
        glide: Ticker,
    }

    impl Snapper {
        fn on_scroll(self: &Rc<Self>) {
            if self.gliding.get() {
                return;
            }
            let snapper = Rc::clone(self);
            self.idle.schedule(settle_delay_ms(&self.coordinator.timing()), move || snapper.settle());
        }

        fn settle(self: &Rc<Self>) {
            let from = browser::scroll_y();
            let Some((target, duration_s)) = self.coordinator.plan(from / self.max_scroll) else {
                return;
            };
            let to = target * self.max_scroll;
            let ease = self.coordinator.timing().ease;
            let started = browser::now_ms();
            log::debug!("snapping {from:.0}px -> {to:.0}px over {duration_s:.2}s");

            self.gliding.set(true);
            let snapper = Rc::clone(self);
            self.glide.start(FRAME_MS, move || {
                let elapsed_s = (browser::now_ms() - started) / 1000.0;
                let (y, done) = glide_position(from, to, elapsed_s, duration_s, ease);
                browser::scroll_to(y);
                if done {
                    snapper.gliding.set(false);
                    snapper.glide.stop();
                }
            });
        }
    }

    pub(super) fn install(registry: PinRegistry) {
        let delay = TimerSlot::new();
        let idle = TimerSlot::new();
        let glide = Ticker::new();
        let listener = StoredValue::new_local(None::<WindowListenerHandle>);

        delay.schedule(INSTALL_DELAY_MS, move || {
            let max_scroll = browser::max_scroll();
            let Some(coordinator) = SnapCoordinator::install(&registry.triggers(), max_scroll) else {
                log::debug!("scroll snap not installed: no pinned sections");
                return;
            };
            let snapper = Rc::new(Snapper { coordinator, max_scroll, gliding: Cell::new(false), idle, glide });
            let handle = window_event_listener(leptos::ev::scroll, move |_| snapper.on_scroll());
            listener.set_value(Some(handle));
        });

        on_cleanup(move || {
            delay.cancel();
            idle.cancel();
            glide.stop();
            if let Some(handle) = listener.try_update_value(Option::take).flatten() {
                handle.remove();
            }
        });
    }
}
