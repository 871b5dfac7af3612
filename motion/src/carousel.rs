//! Circular carousel layout and index math.
//!
//! DESIGN
//! ======
//! The carousel shows three cards at a time: the active card centered, its
//! predecessor tilted in on the left, and its successor tilted in on the
//! right. Everything else is parked invisibly behind them. Layout is a pure
//! function of `(item count, active index, viewport width)` so rendering can
//! recompute it on every change without bookkeeping.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use crate::consts::{
    GAP_MAX_PX, GAP_MAX_WIDTH_PX, GAP_MIN_PX, GAP_MIN_WIDTH_PX, GAP_OVERFLOW_SLOPE, LIFT_RATIO, NEIGHBOR_ROTATE_DEG,
    NEIGHBOR_SCALE, SLOT_TRANSITION, WORD_REVEAL_STEP_MS, Z_ACTIVE, Z_HIDDEN, Z_NEIGHBOR,
};

/// Horizontal offset of the neighbor cards for a container width.
///
/// Flat at the minimum up to 1024px, linear up to the nominal maximum at
/// 1456px, then growing slowly for any finite width. Non-finite widths get
/// the minimum.
#[must_use]
pub fn calculate_gap(width: f64) -> f64 {
    if !width.is_finite() || width <= GAP_MIN_WIDTH_PX {
        return GAP_MIN_PX;
    }
    if width >= GAP_MAX_WIDTH_PX {
        return GAP_MIN_PX.max(GAP_MAX_PX + GAP_OVERFLOW_SLOPE * (width - GAP_MAX_WIDTH_PX));
    }
    GAP_MIN_PX + (GAP_MAX_PX - GAP_MIN_PX) * ((width - GAP_MIN_WIDTH_PX) / (GAP_MAX_WIDTH_PX - GAP_MIN_WIDTH_PX))
}

/// How far neighbor cards rise above the active card.
#[must_use]
pub fn vertical_lift(gap: f64) -> f64 {
    gap * LIFT_RATIO
}

/// `(active + 1) mod n`; `0` for an empty collection.
#[must_use]
pub fn next_index(active: usize, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    (active % n + 1) % n
}

/// `(active - 1 + n) mod n`; `0` for an empty collection.
#[must_use]
pub fn previous_index(active: usize, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    (active % n + n - 1) % n
}

/// Bring a possibly stale index back into `[0, n)`.
#[must_use]
pub fn normalize_index(active: usize, n: usize) -> usize {
    if n == 0 { 0 } else { active % n }
}

/// Role of one card relative to the active card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Active,
    Left,
    Right,
    Hidden,
}

/// Classify `index` for a collection of `n` items. Active wins over left,
/// and left over right, so two-item carousels show one neighbor.
#[must_use]
pub fn classify(index: usize, active: usize, n: usize) -> Slot {
    if n == 0 {
        return Slot::Hidden;
    }
    let active = normalize_index(active, n);
    if index == active {
        Slot::Active
    } else if index == previous_index(active, n) {
        Slot::Left
    } else if index == next_index(active, n) {
        Slot::Right
    } else {
        Slot::Hidden
    }
}

/// Visual state for one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemTransform {
    pub slot: Slot,
    pub z_order: i32,
    pub opacity_visible: bool,
    pub interactive: bool,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotate_y_deg: f64,
}

impl ItemTransform {
    #[must_use]
    pub fn for_slot(slot: Slot, gap: f64) -> Self {
        let lift = vertical_lift(gap);
        match slot {
            Slot::Active => Self {
                slot,
                z_order: Z_ACTIVE,
                opacity_visible: true,
                interactive: true,
                translate_x: 0.0,
                translate_y: 0.0,
                scale: 1.0,
                rotate_y_deg: 0.0,
            },
            Slot::Left => Self {
                slot,
                z_order: Z_NEIGHBOR,
                opacity_visible: true,
                interactive: true,
                translate_x: -gap,
                translate_y: -lift,
                scale: NEIGHBOR_SCALE,
                rotate_y_deg: NEIGHBOR_ROTATE_DEG,
            },
            Slot::Right => Self {
                slot,
                z_order: Z_NEIGHBOR,
                opacity_visible: true,
                interactive: true,
                translate_x: gap,
                translate_y: -lift,
                scale: NEIGHBOR_SCALE,
                rotate_y_deg: -NEIGHBOR_ROTATE_DEG,
            },
            Slot::Hidden => Self {
                slot,
                z_order: Z_HIDDEN,
                opacity_visible: false,
                interactive: false,
                translate_x: 0.0,
                translate_y: 0.0,
                scale: 1.0,
                rotate_y_deg: 0.0,
            },
        }
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        if self.opacity_visible { 1.0 } else { 0.0 }
    }

    /// Inline CSS for the card. Hidden cards keep no transform so they
    /// collapse onto the active card while fading.
    #[must_use]
    pub fn to_css(&self) -> String {
        let pointer_events = if self.interactive { "auto" } else { "none" };
        let mut css = format!(
            "z-index: {}; opacity: {}; pointer-events: {pointer_events};",
            self.z_order,
            self.opacity()
        );
        if self.slot != Slot::Hidden {
            css.push_str(&format!(
                " transform: translateX({}px) translateY({}px) scale({}) rotateY({}deg);",
                self.translate_x, self.translate_y, self.scale, self.rotate_y_deg
            ));
        }
        css.push_str(&format!(" transition: {SLOT_TRANSITION};"));
        css
    }
}

/// One transform per item, in item order. Empty input yields no output so
/// the caller can skip rendering entirely.
#[must_use]
pub fn compute_item_transforms<T>(items: &[T], active_index: usize, viewport_width: f64) -> Vec<ItemTransform> {
    layout(items.len(), active_index, viewport_width)
}

/// [`compute_item_transforms`] when only the item count is known.
#[must_use]
pub fn layout(n: usize, active_index: usize, viewport_width: f64) -> Vec<ItemTransform> {
    let gap = calculate_gap(viewport_width);
    (0..n)
        .map(|index| ItemTransform::for_slot(classify(index, active_index, n), gap))
        .collect()
}

/// Keys the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Previous,
    Next,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(NavKey::Previous),
            "ArrowRight" => Some(NavKey::Next),
            _ => None,
        }
    }
}

/// Start delay for each word of a quote reveal, in milliseconds.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn word_reveal_delays(quote: &str) -> Vec<(String, f64)> {
    quote
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| (word.to_owned(), WORD_REVEAL_STEP_MS * i as f64))
        .collect()
}

/// Carousel position and measured container width.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    len: usize,
    active_index: usize,
    viewport_width: f64,
}

impl Carousel {
    #[must_use]
    pub fn new(len: usize, viewport_width: f64) -> Self {
        Self { len, active_index: 0, viewport_width }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[must_use]
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn next(&mut self) {
        self.active_index = next_index(self.active_index, self.len);
    }

    pub fn previous(&mut self) {
        self.active_index = previous_index(self.active_index, self.len);
    }

    pub fn go_to(&mut self, index: usize) {
        self.active_index = normalize_index(index, self.len);
    }

    pub fn navigate(&mut self, key: NavKey) {
        match key {
            NavKey::Previous => self.previous(),
            NavKey::Next => self.next(),
        }
    }

    /// Record a new container measurement. Non-positive or non-finite samples
    /// are ignored and the previous width is kept.
    pub fn set_viewport_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.viewport_width = width;
        }
    }

    /// Change the collection size, keeping the active index in range.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        self.active_index = normalize_index(self.active_index, len);
    }

    #[must_use]
    pub fn gap(&self) -> f64 {
        calculate_gap(self.viewport_width)
    }

    #[must_use]
    pub fn layout(&self) -> Vec<ItemTransform> {
        layout(self.len, self.active_index, self.viewport_width)
    }
}
