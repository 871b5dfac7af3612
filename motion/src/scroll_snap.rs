//! Snap targets for pinned scroll sections.
//!
//! A page with pinned ("scroll-jacked") sections reports each pin as a pixel
//! span along the document. Those spans are normalized against the maximum
//! scroll distance into [`PinnedRange`]s, and every time scrolling settles the
//! current normalized position is passed through [`compute_snap_target`]:
//! positions near a pinned range are pulled to the closest range center,
//! everything else scrolls freely.

#[cfg(test)]
#[path = "scroll_snap_test.rs"]
mod scroll_snap_test;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::consts::{SNAP_BUFFER, SNAP_DURATION_MAX_S, SNAP_DURATION_MIN_S};
use crate::easing::Ease;

/// Normalized snap distance that maps to the longest snap duration.
const FULL_SPAN_DISTANCE: f64 = 0.1;

/// One pinned scroll region, in normalized scroll fractions.
///
/// The center is always derived from `start`/`end` so the two can never drift
/// apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinnedRange {
    pub start: f64,
    pub end: f64,
}

impl PinnedRange {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn center(&self) -> f64 {
        self.start + (self.end - self.start) * 0.5
    }

    /// Ranges with non-finite bounds or `start > end` never match.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.start <= self.end
    }

    /// Whether `value` lies within `[start - buffer, end + buffer]`.
    #[must_use]
    pub fn contains_buffered(&self, value: f64, buffer: f64) -> bool {
        self.is_valid() && value >= self.start - buffer && value <= self.end + buffer
    }
}

/// A pinned section as reported by the page, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinnedTrigger {
    pub start_px: f64,
    /// Pins without an explicit end collapse to a zero-length range.
    pub end_px: Option<f64>,
}

impl PinnedTrigger {
    #[must_use]
    pub fn new(start_px: f64, end_px: Option<f64>) -> Self {
        Self { start_px, end_px }
    }

    /// Convert to a normalized range against the document's maximum scroll.
    #[must_use]
    pub fn normalize(&self, max_scroll_px: f64) -> PinnedRange {
        let end_px = self.end_px.unwrap_or(self.start_px);
        PinnedRange::new(self.start_px / max_scroll_px, end_px / max_scroll_px)
    }
}

/// Snap target for `value` using the standard [`SNAP_BUFFER`].
///
/// Returns `value` untouched when no range (expanded by the buffer) contains
/// it; otherwise returns the center nearest to `value` across all valid
/// ranges. Equidistant centers resolve to the range with the earliest start.
#[must_use]
pub fn compute_snap_target(value: f64, ranges: &[PinnedRange]) -> f64 {
    snap_with_buffer(value, ranges, SNAP_BUFFER)
}

/// [`compute_snap_target`] with an explicit tolerance buffer.
#[must_use]
pub fn snap_with_buffer(value: f64, ranges: &[PinnedRange], buffer: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let in_pinned = ranges.iter().any(|range| range.contains_buffered(value, buffer));
    if !in_pinned {
        return value;
    }
    nearest_range(value, ranges).map_or(value, |range| range.center())
}

fn nearest_range(value: f64, ranges: &[PinnedRange]) -> Option<&PinnedRange> {
    let mut best: Option<(&PinnedRange, f64)> = None;
    for range in ranges.iter().filter(|range| range.is_valid()) {
        let distance = (range.center() - value).abs();
        let better = match best {
            None => true,
            Some((current, current_distance)) => match distance.total_cmp(&current_distance) {
                Ordering::Less => true,
                Ordering::Equal => range.start < current.start,
                Ordering::Greater => false,
            },
        };
        if better {
            best = Some((range, distance));
        }
    }
    best.map(|(range, _)| range)
}

/// Animation parameters for moving the viewport onto a snap target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapTiming {
    pub duration_min_s: f64,
    pub duration_max_s: f64,
    pub delay_s: f64,
    pub ease: Ease,
}

impl Default for SnapTiming {
    fn default() -> Self {
        Self {
            duration_min_s: SNAP_DURATION_MIN_S,
            duration_max_s: SNAP_DURATION_MAX_S,
            delay_s: 0.0,
            ease: Ease::Power2Out,
        }
    }
}

impl SnapTiming {
    /// Snap duration for a normalized travel distance, growing linearly from
    /// the minimum and saturating at the maximum.
    #[must_use]
    pub fn duration_for(&self, distance: f64) -> f64 {
        let t = if distance.is_finite() {
            (distance.abs() / FULL_SPAN_DISTANCE).clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.duration_min_s + (self.duration_max_s - self.duration_min_s) * t
    }
}

/// Page-level snap behavior built from the pins present after mount.
///
/// Construction returns `None` when the page has nothing to snap to; callers
/// then simply never install scroll snapping.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapCoordinator {
    ranges: Vec<PinnedRange>,
    timing: SnapTiming,
}

impl SnapCoordinator {
    /// Build from pixel-space pins. Requires a scrollable document and at
    /// least one valid pin.
    #[must_use]
    pub fn install(triggers: &[PinnedTrigger], max_scroll_px: f64) -> Option<Self> {
        if !max_scroll_px.is_finite() || max_scroll_px <= 0.0 {
            return None;
        }
        let ranges = triggers
            .iter()
            .map(|trigger| trigger.normalize(max_scroll_px))
            .collect::<Vec<_>>();
        Self::from_ranges(ranges)
    }

    /// Build from normalized ranges, dropping malformed ones.
    #[must_use]
    pub fn from_ranges(ranges: Vec<PinnedRange>) -> Option<Self> {
        let mut ranges = ranges
            .into_iter()
            .filter(PinnedRange::is_valid)
            .collect::<Vec<_>>();
        if ranges.is_empty() {
            return None;
        }
        ranges.sort_by(|a, b| a.start.total_cmp(&b.start));
        Some(Self { ranges, timing: SnapTiming::default() })
    }

    #[must_use]
    pub fn with_timing(mut self, timing: SnapTiming) -> Self {
        self.timing = timing;
        self
    }

    #[must_use]
    pub fn ranges(&self) -> &[PinnedRange] {
        &self.ranges
    }

    #[must_use]
    pub fn timing(&self) -> SnapTiming {
        self.timing
    }

    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        compute_snap_target(value, &self.ranges)
    }

    /// Snap target plus the duration needed to reach it, or `None` when the
    /// position should be left alone.
    #[must_use]
    pub fn plan(&self, value: f64) -> Option<(f64, f64)> {
        let target = self.snap(value);
        if !target.is_finite() || (target - value).abs() < f64::EPSILON {
            return None;
        }
        Some((target, self.timing.duration_for(target - value)))
    }
}
