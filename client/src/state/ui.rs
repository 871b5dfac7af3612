//! Site-wide chrome state (theme, navigation bar, mobile menu).
//!
//! DESIGN
//! ======
//! Provided once by `App` as `RwSignal<UiState>`. Theme is process-wide:
//! initialized from the stored preference on hydrate, never torn down.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::dark_mode::Theme;

/// Scroll offset past which the navigation bar switches to its compact,
/// opaque style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub theme: Theme,
    pub mobile_menu_open: bool,
    pub scrolled: bool,
}

impl UiState {
    /// Record the latest scroll offset. Returns whether `scrolled` changed,
    /// so callers can skip redundant signal writes.
    pub fn set_scroll_y(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > SCROLLED_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Navigation closes the mobile menu.
    pub fn route_changed(&mut self) {
        self.mobile_menu_open = false;
    }
}
