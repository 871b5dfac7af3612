//! Shared numeric constants for the motion crate.

// ── Scroll snapping ─────────────────────────────────────────────

/// Normalized distance beyond a pinned range that still counts as "inside".
pub const SNAP_BUFFER: f64 = 0.02;

/// Shortest snap animation, in seconds.
pub const SNAP_DURATION_MIN_S: f64 = 0.08;

/// Longest snap animation, in seconds.
pub const SNAP_DURATION_MAX_S: f64 = 0.18;

// ── Carousel geometry ───────────────────────────────────────────

/// Viewport width at or below which the neighbor gap is at its minimum.
pub const GAP_MIN_WIDTH_PX: f64 = 1024.0;

/// Viewport width at which the neighbor gap reaches its nominal maximum.
pub const GAP_MAX_WIDTH_PX: f64 = 1456.0;

pub const GAP_MIN_PX: f64 = 60.0;
pub const GAP_MAX_PX: f64 = 86.0;

/// Gap growth per pixel of width past [`GAP_MAX_WIDTH_PX`].
pub const GAP_OVERFLOW_SLOPE: f64 = 0.06018;

/// Neighbor lift as a fraction of the horizontal gap.
pub const LIFT_RATIO: f64 = 0.8;

pub const NEIGHBOR_SCALE: f64 = 0.85;
pub const NEIGHBOR_ROTATE_DEG: f64 = 15.0;

pub const Z_ACTIVE: i32 = 3;
pub const Z_NEIGHBOR: i32 = 2;
pub const Z_HIDDEN: i32 = 1;

/// CSS transition applied to every carousel slot.
pub const SLOT_TRANSITION: &str = "all 0.8s cubic-bezier(.4,2,.3,1)";

/// Delay between consecutive words of the active quote reveal.
pub const WORD_REVEAL_STEP_MS: f64 = 25.0;

// ── Timers ──────────────────────────────────────────────────────

/// Carousel autoplay period.
pub const AUTOPLAY_INTERVAL_MS: f64 = 5000.0;

/// Hover-intent delay before a dropdown opens.
pub const MENU_OPEN_DELAY_MS: f64 = 0.0;

/// Hover-intent grace period before a dropdown closes.
pub const MENU_CLOSE_DELAY_MS: f64 = 300.0;

// ── Timelines ───────────────────────────────────────────────────

/// Tween duration when a record omits one, in seconds.
pub const DEFAULT_TWEEN_DURATION_S: f64 = 0.5;
