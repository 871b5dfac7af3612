//! Carousel autoplay scheduling.
//!
//! The browser timer is only a wake-up call. Whether a tick actually advances
//! the carousel is decided here, against an explicit clock and a generation
//! counter: every arm, restart, or stop bumps the generation, and a callback
//! carrying an older generation is ignored. A manual click that races a
//! pending tick therefore advances the carousel exactly once.

#[cfg(test)]
#[path = "autoplay_test.rs"]
mod autoplay_test;

use crate::carousel::{Carousel, NavKey};
use crate::consts::AUTOPLAY_INTERVAL_MS;

/// Clock-driven autoplay timer.
#[derive(Debug, Clone, PartialEq)]
pub struct Autoplay {
    interval_ms: f64,
    len: usize,
    deadline_ms: Option<f64>,
    generation: u64,
}

impl Default for Autoplay {
    fn default() -> Self {
        Self::new(AUTOPLAY_INTERVAL_MS)
    }
}

impl Autoplay {
    #[must_use]
    pub fn new(interval_ms: f64) -> Self {
        Self { interval_ms, len: 0, deadline_ms: None, generation: 0 }
    }

    #[must_use]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Pending deadline, or `None` when nothing is scheduled.
    #[must_use]
    pub fn deadline_ms(&self) -> Option<f64> {
        self.deadline_ms
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Begin ticking for a collection of `len` items. Collections with one
    /// item or fewer have nothing to rotate and stay stopped.
    pub fn start(&mut self, now_ms: f64, len: usize) {
        self.len = len;
        self.restart(now_ms);
    }

    /// Re-arm a full interval from `now_ms`, cancelling any pending tick.
    pub fn restart(&mut self, now_ms: f64) {
        if self.len <= 1 {
            self.stop();
            return;
        }
        self.generation += 1;
        self.deadline_ms = Some(now_ms + self.interval_ms);
    }

    pub fn stop(&mut self) {
        self.generation += 1;
        self.deadline_ms = None;
    }

    /// Update the collection size; starts or stops ticking as needed.
    pub fn set_len(&mut self, now_ms: f64, len: usize) {
        let was_running = self.is_running();
        self.len = len;
        if len <= 1 {
            self.stop();
        } else if !was_running {
            self.restart(now_ms);
        }
    }

    /// Whether a tick is due at `now_ms`. A due tick re-arms for the next
    /// interval before returning `true`.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.restart(now_ms);
                true
            }
            _ => false,
        }
    }

    /// Timer callback for a tick armed at `generation`. Stale generations are
    /// rejected; a current one re-arms and returns `true`.
    pub fn fire(&mut self, generation: u64, now_ms: f64) -> bool {
        if generation != self.generation || !self.is_running() {
            return false;
        }
        self.restart(now_ms);
        true
    }
}

/// A carousel and its autoplay timer, kept in lockstep.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselDriver {
    carousel: Carousel,
    autoplay: Autoplay,
}

impl CarouselDriver {
    #[must_use]
    pub fn new(len: usize, viewport_width: f64, now_ms: f64) -> Self {
        let mut autoplay = Autoplay::default();
        autoplay.start(now_ms, len);
        Self { carousel: Carousel::new(len, viewport_width), autoplay }
    }

    #[must_use]
    pub fn with_interval(mut self, interval_ms: f64, now_ms: f64) -> Self {
        self.autoplay = Autoplay::new(interval_ms);
        self.autoplay.start(now_ms, self.carousel.len());
        self
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    #[must_use]
    pub fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.carousel.active_index()
    }

    pub fn next_manual(&mut self, now_ms: f64) {
        self.carousel.next();
        self.autoplay.restart(now_ms);
    }

    pub fn previous_manual(&mut self, now_ms: f64) {
        self.carousel.previous();
        self.autoplay.restart(now_ms);
    }

    pub fn navigate_manual(&mut self, key: NavKey, now_ms: f64) {
        match key {
            NavKey::Previous => self.previous_manual(now_ms),
            NavKey::Next => self.next_manual(now_ms),
        }
    }

    pub fn go_to_manual(&mut self, index: usize, now_ms: f64) {
        self.carousel.go_to(index);
        self.autoplay.restart(now_ms);
    }

    /// Advance for a timer armed at `generation`. Returns whether the
    /// carousel moved.
    pub fn on_timer(&mut self, generation: u64, now_ms: f64) -> bool {
        if self.autoplay.fire(generation, now_ms) {
            self.carousel.next();
            return true;
        }
        false
    }

    /// Clock-polled variant of [`CarouselDriver::on_timer`].
    pub fn poll(&mut self, now_ms: f64) -> bool {
        if self.autoplay.poll(now_ms) {
            self.carousel.next();
            return true;
        }
        false
    }

    pub fn set_len(&mut self, len: usize, now_ms: f64) {
        self.carousel.resize(len);
        self.autoplay.set_len(now_ms, len);
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.carousel.set_viewport_width(width);
    }

    pub fn stop(&mut self) {
        self.autoplay.stop();
    }
}
