//! Hover-intent state machine for dropdown menus.
//!
//! DESIGN
//! ======
//! A dropdown is `Closed`, `Opening`, `Open`, or `Closing`. Pointer events
//! move it between states; the two transitional states own exactly one
//! pending deadline. Every transition bumps a generation counter, so a timer
//! callback from an earlier state cannot complete a later one. The browser
//! side only has to schedule a timeout when a method hands back a
//! [`TimerRequest`] and report it through [`HoverIntent::fire`].

#[cfg(test)]
#[path = "hover_intent_test.rs"]
mod hover_intent_test;

use crate::consts::{MENU_CLOSE_DELAY_MS, MENU_OPEN_DELAY_MS};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// A timeout the caller should schedule, tagged with the generation that
/// armed it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerRequest {
    pub generation: u64,
    pub delay_ms: f64,
}

/// One dropdown's hover state.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverIntent {
    state: MenuState,
    open_delay_ms: f64,
    close_delay_ms: f64,
    deadline_ms: Option<f64>,
    generation: u64,
}

impl Default for HoverIntent {
    fn default() -> Self {
        Self::new(MENU_OPEN_DELAY_MS, MENU_CLOSE_DELAY_MS)
    }
}

impl HoverIntent {
    #[must_use]
    pub fn new(open_delay_ms: f64, close_delay_ms: f64) -> Self {
        Self { state: MenuState::Closed, open_delay_ms, close_delay_ms, deadline_ms: None, generation: 0 }
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Whether the dropdown panel should be rendered. A closing menu stays
    /// visible until its grace period runs out.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self.state, MenuState::Open | MenuState::Closing)
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn deadline_ms(&self) -> Option<f64> {
        self.deadline_ms
    }

    pub fn pointer_enter(&mut self, now_ms: f64) -> Option<TimerRequest> {
        match self.state {
            MenuState::Open | MenuState::Opening => None,
            MenuState::Closing => {
                self.settle(MenuState::Open);
                None
            }
            MenuState::Closed => self.begin(MenuState::Opening, MenuState::Open, self.open_delay_ms, now_ms),
        }
    }

    pub fn pointer_leave(&mut self, now_ms: f64) -> Option<TimerRequest> {
        match self.state {
            MenuState::Closed | MenuState::Closing => None,
            MenuState::Opening => {
                self.settle(MenuState::Closed);
                None
            }
            MenuState::Open => self.begin(MenuState::Closing, MenuState::Closed, self.close_delay_ms, now_ms),
        }
    }

    /// Click or tap: flips between open and closed without any delay.
    pub fn toggle(&mut self) {
        if self.is_visible() {
            self.settle(MenuState::Closed);
        } else {
            self.settle(MenuState::Open);
        }
    }

    pub fn open_now(&mut self) {
        self.settle(MenuState::Open);
    }

    pub fn close_now(&mut self) {
        self.settle(MenuState::Closed);
    }

    /// Complete a due transition. Returns whether the state changed.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => self.complete(),
            _ => false,
        }
    }

    /// Timer callback for a request armed at `generation`. Stale callbacks
    /// are ignored.
    pub fn fire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.deadline_ms.is_none() {
            return false;
        }
        self.complete()
    }

    fn begin(&mut self, pending: MenuState, done: MenuState, delay_ms: f64, now_ms: f64) -> Option<TimerRequest> {
        if delay_ms <= 0.0 {
            self.settle(done);
            return None;
        }
        self.generation += 1;
        self.state = pending;
        self.deadline_ms = Some(now_ms + delay_ms);
        Some(TimerRequest { generation: self.generation, delay_ms })
    }

    fn settle(&mut self, state: MenuState) {
        self.generation += 1;
        self.state = state;
        self.deadline_ms = None;
    }

    fn complete(&mut self) -> bool {
        match self.state {
            MenuState::Opening => {
                self.settle(MenuState::Open);
                true
            }
            MenuState::Closing => {
                self.settle(MenuState::Closed);
                true
            }
            MenuState::Open | MenuState::Closed => false,
        }
    }
}

/// Several named dropdowns where at most one is shown at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuGroup<K> {
    menus: Vec<(K, HoverIntent)>,
}

impl<K: Copy + PartialEq> MenuGroup<K> {
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = K>) -> Self {
        Self::with_delays(keys, MENU_OPEN_DELAY_MS, MENU_CLOSE_DELAY_MS)
    }

    #[must_use]
    pub fn with_delays(keys: impl IntoIterator<Item = K>, open_delay_ms: f64, close_delay_ms: f64) -> Self {
        let menus = keys
            .into_iter()
            .map(|key| (key, HoverIntent::new(open_delay_ms, close_delay_ms)))
            .collect();
        Self { menus }
    }

    #[must_use]
    pub fn menu(&self, key: K) -> Option<&HoverIntent> {
        self.menus.iter().find(|(k, _)| *k == key).map(|(_, menu)| menu)
    }

    #[must_use]
    pub fn state(&self, key: K) -> MenuState {
        self.menu(key).map_or(MenuState::Closed, HoverIntent::state)
    }

    #[must_use]
    pub fn is_visible(&self, key: K) -> bool {
        self.menu(key).is_some_and(HoverIntent::is_visible)
    }

    /// The menu currently shown, if any.
    #[must_use]
    pub fn visible(&self) -> Option<K> {
        self.menus.iter().find(|(_, menu)| menu.is_visible()).map(|(key, _)| *key)
    }

    pub fn pointer_enter(&mut self, key: K, now_ms: f64) -> Option<TimerRequest> {
        self.close_others(key);
        self.menu_mut(key)?.pointer_enter(now_ms)
    }

    pub fn pointer_leave(&mut self, key: K, now_ms: f64) -> Option<TimerRequest> {
        self.menu_mut(key)?.pointer_leave(now_ms)
    }

    pub fn toggle(&mut self, key: K) {
        self.close_others(key);
        if let Some(menu) = self.menu_mut(key) {
            menu.toggle();
        }
    }

    pub fn fire(&mut self, key: K, generation: u64) -> bool {
        self.menu_mut(key).is_some_and(|menu| menu.fire(generation))
    }

    pub fn poll(&mut self, now_ms: f64) -> bool {
        let mut changed = false;
        for (_, menu) in &mut self.menus {
            changed |= menu.poll(now_ms);
        }
        changed
    }

    /// Close every menu immediately (route changes, outside clicks).
    pub fn close_all(&mut self) {
        for (_, menu) in &mut self.menus {
            menu.close_now();
        }
    }

    fn close_others(&mut self, key: K) {
        for (k, menu) in &mut self.menus {
            if *k != key && menu.state() != MenuState::Closed {
                menu.close_now();
            }
        }
    }

    fn menu_mut(&mut self, key: K) -> Option<&mut HoverIntent> {
        self.menus.iter_mut().find(|(k, _)| *k == key).map(|(_, menu)| menu)
    }
}
