//! Declarative animation timelines and the shared sampler.
//!
//! Pages describe their entrance and scroll animations as JSON records:
//!
//! ```json
//! {
//!   "trigger": { "type": "scroll", "start": "top top", "end": "+=20%", "scrub": 0.1, "pin": true },
//!   "defaults": { "ease": "power2.in" },
//!   "tweens": [
//!     { "target": "headline", "to": { "x": "-18vw", "opacity": 0 }, "at": 0.55, "duration": 0.45 }
//!   ]
//! }
//! ```
//!
//! [`Timeline::sample`] turns a record plus a playhead into one
//! [`TargetFrame`] per animated element. The browser side only measures
//! (elapsed time, scroll position, child counts, viewport) and writes the
//! resulting inline styles back.
//!
//! Property resolution follows the usual tween-library conventions: a side
//! that is omitted (`from` or `to`) means "whatever the property holds at that
//! point", starting from the element's rest value; before its first tween
//! starts a property shows that tween's start value; once several tweens on
//! the same property have started, the latest one wins.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_TWEEN_DURATION_S;
use crate::easing::Ease;
use crate::scroll_snap::PinnedTrigger;

// =============================================================
// Errors
// =============================================================

#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    #[error("invalid timeline record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("timeline has no tweens")]
    NoTweens,
    #[error("tween {index} has an empty target")]
    EmptyTarget { index: usize },
    #[error("tween {index}: {field} must be finite and non-negative, got {value}")]
    InvalidTiming { index: usize, field: &'static str, value: f64 },
    #[error("scrub must be finite and non-negative, got {value}")]
    InvalidScrub { value: f64 },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid length {raw:?}")]
pub struct LengthParseError {
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid scroll position {raw:?}")]
pub struct ScrollEdgeParseError {
    pub raw: String,
}

// =============================================================
// Lengths
// =============================================================

/// Viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A translate distance with its CSS unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LengthRecord", into = "String")]
pub enum Length {
    Px(f64),
    Vw(f64),
    Vh(f64),
    /// Percent of the element's own box, left for the browser to resolve.
    Percent(f64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LengthRecord {
    Number(f64),
    Text(String),
}

impl Length {
    /// Resolve viewport units to pixels. Percentages stay relative.
    #[must_use]
    pub fn resolve(self, viewport: Viewport) -> Offset {
        match self {
            Length::Px(v) => Offset::px(v),
            Length::Vw(v) => Offset::px(v * viewport.width / 100.0),
            Length::Vh(v) => Offset::px(v * viewport.height / 100.0),
            Length::Percent(v) => Offset { px: 0.0, percent: v },
        }
    }
}

impl FromStr for Length {
    type Err = LengthParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let text = raw.trim();
        let err = || LengthParseError { raw: raw.to_owned() };
        let (number, build): (&str, fn(f64) -> Length) = if let Some(n) = text.strip_suffix("px") {
            (n, Length::Px)
        } else if let Some(n) = text.strip_suffix("vw") {
            (n, Length::Vw)
        } else if let Some(n) = text.strip_suffix("vh") {
            (n, Length::Vh)
        } else if let Some(n) = text.strip_suffix('%') {
            (n, Length::Percent)
        } else {
            (text, Length::Px)
        };
        let value = number.trim().parse::<f64>().map_err(|_| err())?;
        if !value.is_finite() {
            return Err(err());
        }
        Ok(build(value))
    }
}

impl TryFrom<LengthRecord> for Length {
    type Error = LengthParseError;

    fn try_from(record: LengthRecord) -> Result<Self, Self::Error> {
        match record {
            LengthRecord::Number(v) if v.is_finite() => Ok(Length::Px(v)),
            LengthRecord::Number(v) => Err(LengthParseError { raw: v.to_string() }),
            LengthRecord::Text(text) => text.parse(),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{v}px"),
            Length::Vw(v) => write!(f, "{v}vw"),
            Length::Vh(v) => write!(f, "{v}vh"),
            Length::Percent(v) => write!(f, "{v}%"),
        }
    }
}

impl From<Length> for String {
    fn from(value: Length) -> Self {
        value.to_string()
    }
}

/// A resolved translate distance: pixels plus a percentage of the element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub px: f64,
    pub percent: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { px: 0.0, percent: 0.0 };

    #[must_use]
    pub fn px(px: f64) -> Self {
        Self { px, percent: 0.0 }
    }

    #[must_use]
    pub fn to_css(self) -> String {
        let px = css_number(self.px);
        let percent = css_number(self.percent);
        match (px == "0", percent == "0") {
            (_, true) => format!("{px}px"),
            (true, false) => format!("{percent}%"),
            (false, false) => format!("calc({px}px + {percent}%)"),
        }
    }
}

/// Round to thousandths and drop negative zero.
fn css_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded.abs() < 1e-9 { "0".to_owned() } else { format!("{rounded}") }
}

trait Interpolate: Copy {
    fn interpolate(from: Self, to: Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(from: Self, to: Self, t: f64) -> Self {
        from + (to - from) * t
    }
}

impl Interpolate for Offset {
    fn interpolate(from: Self, to: Self, t: f64) -> Self {
        Offset { px: f64::interpolate(from.px, to.px, t), percent: f64::interpolate(from.percent, to.percent, t) }
    }
}

// =============================================================
// Tweens
// =============================================================

/// Animatable properties. Omitted fields are left alone by the tween.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatedProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

/// When a tween runs, in seconds (or timeline units for scroll timelines).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub at: f64,
    pub duration: f64,
    /// Delay between consecutive children of the target.
    pub stagger: f64,
    pub ease: Ease,
}

impl Default for Timing {
    fn default() -> Self {
        Self { at: 0.0, duration: DEFAULT_TWEEN_DURATION_S, stagger: 0.0, ease: Ease::default() }
    }
}

impl Timing {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn child_start(&self, child: usize) -> f64 {
        self.at + self.stagger * child as f64
    }

    /// Linear progress of `child` at `time`, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, time: f64, child: usize) -> f64 {
        let start = self.child_start(child);
        if self.duration <= 0.0 {
            return if time >= start { 1.0 } else { 0.0 };
        }
        ((time - start) / self.duration).clamp(0.0, 1.0)
    }

    /// When the last of `children` finishes.
    #[must_use]
    pub fn end(&self, children: usize) -> f64 {
        self.child_start(children.saturating_sub(1)) + self.duration
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    /// Name of the animated element (its `data-anim` attribute).
    pub target: String,
    pub from: AnimatedProps,
    pub to: AnimatedProps,
    pub timing: Timing,
}

// =============================================================
// Triggers
// =============================================================

/// A reference point along an element or the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    Top,
    Center,
    Bottom,
    Percent(f64),
    Px(f64),
}

impl Anchor {
    fn parse(word: &str) -> Option<Self> {
        match word {
            "top" => Some(Anchor::Top),
            "center" => Some(Anchor::Center),
            "bottom" => Some(Anchor::Bottom),
            other => match other.parse::<Length>() {
                Ok(Length::Px(v)) => Some(Anchor::Px(v)),
                Ok(Length::Percent(v)) => Some(Anchor::Percent(v)),
                Ok(Length::Vw(_) | Length::Vh(_)) | Err(_) => None,
            },
        }
    }

    #[must_use]
    pub fn offset(self, size: f64) -> f64 {
        match self {
            Anchor::Top => 0.0,
            Anchor::Center => size / 2.0,
            Anchor::Bottom => size,
            Anchor::Percent(p) => size * p / 100.0,
            Anchor::Px(v) => v,
        }
    }
}

/// Where a scroll-driven timeline starts or ends.
///
/// `"top 75%"` is reached when the element's top meets 75% of the viewport
/// height. `"+=20%"` is relative: 20% of the viewport height past the other
/// edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ScrollEdge {
    Meet { element: Anchor, viewport: Anchor },
    Relative(Length),
}

impl FromStr for ScrollEdge {
    type Err = ScrollEdgeParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let err = || ScrollEdgeParseError { raw: raw.to_owned() };
        let text = raw.trim();
        if let Some(rest) = text.strip_prefix("+=") {
            return match rest.parse::<Length>().map_err(|_| err())? {
                length @ (Length::Px(_) | Length::Percent(_)) => Ok(ScrollEdge::Relative(length)),
                Length::Vw(_) | Length::Vh(_) => Err(err()),
            };
        }
        let mut words = text.split_whitespace();
        let (Some(element), Some(viewport), None) = (words.next(), words.next(), words.next()) else {
            return Err(err());
        };
        Ok(ScrollEdge::Meet {
            element: Anchor::parse(element).ok_or_else(err)?,
            viewport: Anchor::parse(viewport).ok_or_else(err)?,
        })
    }
}

impl TryFrom<String> for ScrollEdge {
    type Error = ScrollEdgeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn anchor_name(anchor: Anchor) -> String {
    match anchor {
        Anchor::Top => "top".to_owned(),
        Anchor::Center => "center".to_owned(),
        Anchor::Bottom => "bottom".to_owned(),
        Anchor::Percent(v) => format!("{v}%"),
        Anchor::Px(v) => format!("{v}px"),
    }
}

impl From<ScrollEdge> for String {
    fn from(value: ScrollEdge) -> Self {
        match value {
            ScrollEdge::Meet { element, viewport } => format!("{} {}", anchor_name(element), anchor_name(viewport)),
            ScrollEdge::Relative(length) => format!("+={length}"),
        }
    }
}

/// Measurements needed to place a scroll trigger on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerGeometry {
    /// Element top in document coordinates.
    pub element_top: f64,
    pub element_height: f64,
    pub viewport_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollTrigger {
    pub start: ScrollEdge,
    pub end: ScrollEdge,
    /// Seconds the playhead lags behind the scrollbar; `0` follows exactly.
    #[serde(default)]
    pub scrub: f64,
    #[serde(default)]
    pub pin: bool,
}

impl ScrollTrigger {
    /// Document scroll offsets where the timeline starts and ends.
    #[must_use]
    pub fn scroll_span(&self, geometry: TriggerGeometry) -> (f64, f64) {
        let start = edge_scroll(self.start, geometry, geometry.element_top);
        let end = edge_scroll(self.end, geometry, start);
        (start, end)
    }

    /// Timeline progress for a document scroll offset.
    #[must_use]
    pub fn progress(&self, scroll_y: f64, geometry: TriggerGeometry) -> f64 {
        let (start, end) = self.scroll_span(geometry);
        if end <= start {
            return if scroll_y >= start { 1.0 } else { 0.0 };
        }
        ((scroll_y - start) / (end - start)).clamp(0.0, 1.0)
    }

    /// The pixel span this trigger pins, for snap coordination.
    #[must_use]
    pub fn pinned(&self, geometry: TriggerGeometry) -> Option<PinnedTrigger> {
        if !self.pin {
            return None;
        }
        let (start, end) = self.scroll_span(geometry);
        Some(PinnedTrigger::new(start, Some(end)))
    }
}

fn edge_scroll(edge: ScrollEdge, geometry: TriggerGeometry, relative_to: f64) -> f64 {
    match edge {
        ScrollEdge::Meet { element, viewport } => {
            geometry.element_top + element.offset(geometry.element_height) - viewport.offset(geometry.viewport_height)
        }
        ScrollEdge::Relative(Length::Percent(p)) => relative_to + geometry.viewport_height * p / 100.0,
        ScrollEdge::Relative(Length::Px(v)) => relative_to + v,
        ScrollEdge::Relative(Length::Vw(_) | Length::Vh(_)) => relative_to,
    }
}

/// Plays forward when the start edge is crossed going down and, unless
/// `reverse` is off, back to the beginning when it is crossed going up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnterTrigger {
    pub start: ScrollEdge,
    #[serde(default = "default_reverse")]
    pub reverse: bool,
}

fn default_reverse() -> bool {
    true
}

impl EnterTrigger {
    #[must_use]
    pub fn is_entered(&self, scroll_y: f64, geometry: TriggerGeometry) -> bool {
        scroll_y >= edge_scroll(self.start, geometry, geometry.element_top)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trigger {
    /// Plays once, measured in seconds since mount.
    #[default]
    Load,
    /// Driven by scroll progress mapped onto the timeline's duration.
    Scroll(ScrollTrigger),
    /// Plays in real time once the element scrolls into view.
    Enter(EnterTrigger),
}

// =============================================================
// Records
// =============================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TimingDefaults {
    ease: Option<Ease>,
    duration: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct TweenRecord {
    target: String,
    #[serde(default)]
    from: AnimatedProps,
    #[serde(default)]
    to: AnimatedProps,
    at: Option<f64>,
    duration: Option<f64>,
    stagger: Option<f64>,
    ease: Option<Ease>,
}

#[derive(Debug, Deserialize)]
struct TimelineRecord {
    #[serde(default)]
    trigger: Trigger,
    #[serde(default)]
    defaults: TimingDefaults,
    tweens: Vec<TweenRecord>,
}

fn check_timing(index: usize, field: &'static str, value: f64) -> Result<f64, TimelineError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(TimelineError::InvalidTiming { index, field, value })
    }
}

// =============================================================
// Timeline
// =============================================================

/// One frame of one animated element.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetFrame {
    pub target: String,
    /// Child index within the target (staggered tweens).
    pub child: usize,
    pub x: Offset,
    pub y: Offset,
    pub opacity: f64,
    pub scale: f64,
}

impl TargetFrame {
    #[must_use]
    pub fn at_rest(target: &str, child: usize) -> Self {
        Self { target: target.to_owned(), child, x: Offset::ZERO, y: Offset::ZERO, opacity: 1.0, scale: 1.0 }
    }

    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "transform: translate({}, {}) scale({}); opacity: {};",
            self.x.to_css(),
            self.y.to_css(),
            css_number(self.scale),
            css_number(self.opacity)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    pub trigger: Trigger,
    pub tweens: Vec<Tween>,
}

impl Timeline {
    /// Parse and validate a JSON timeline record.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineError`] for malformed JSON, unknown eases, bad
    /// lengths or scroll positions, and negative or non-finite timings.
    pub fn from_json(json: &str) -> Result<Self, TimelineError> {
        let record: TimelineRecord = serde_json::from_str(json)?;
        Self::from_record(record)
    }

    fn from_record(record: TimelineRecord) -> Result<Self, TimelineError> {
        if record.tweens.is_empty() {
            return Err(TimelineError::NoTweens);
        }
        if let Trigger::Scroll(scroll) = record.trigger
            && (!scroll.scrub.is_finite() || scroll.scrub < 0.0)
        {
            return Err(TimelineError::InvalidScrub { value: scroll.scrub });
        }

        let default_ease = record.defaults.ease.unwrap_or_default();
        let default_duration = record.defaults.duration.unwrap_or(DEFAULT_TWEEN_DURATION_S);
        let mut tweens = Vec::with_capacity(record.tweens.len());
        for (index, tween) in record.tweens.into_iter().enumerate() {
            let target = tween.target.trim();
            if target.is_empty() {
                return Err(TimelineError::EmptyTarget { index });
            }
            let timing = Timing {
                at: check_timing(index, "at", tween.at.unwrap_or(0.0))?,
                duration: check_timing(index, "duration", tween.duration.unwrap_or(default_duration))?,
                stagger: check_timing(index, "stagger", tween.stagger.unwrap_or(0.0))?,
                ease: tween.ease.unwrap_or(default_ease),
            };
            tweens.push(Tween { target: target.to_owned(), from: tween.from, to: tween.to, timing });
        }
        Ok(Self { trigger: record.trigger, tweens })
    }

    /// Distinct targets in declaration order.
    #[must_use]
    pub fn targets(&self) -> Vec<&str> {
        let mut targets: Vec<&str> = Vec::new();
        for tween in &self.tweens {
            if !targets.contains(&tween.target.as_str()) {
                targets.push(&tween.target);
            }
        }
        targets
    }

    /// End of the last tween, given how many children each target has.
    #[must_use]
    pub fn duration(&self, child_counts: &HashMap<String, usize>) -> f64 {
        self.tweens
            .iter()
            .map(|tween| tween.timing.end(child_count(child_counts, &tween.target)))
            .fold(0.0, f64::max)
    }

    /// Frames for every child of every target at `time`. Targets missing
    /// from `child_counts` are treated as a single element.
    #[must_use]
    pub fn sample(&self, time: f64, child_counts: &HashMap<String, usize>, viewport: Viewport) -> Vec<TargetFrame> {
        let mut frames = Vec::new();
        for target in self.targets() {
            let tweens = self.tweens.iter().filter(|tween| tween.target == target).collect::<Vec<_>>();
            for child in 0..child_count(child_counts, target) {
                let rest = TargetFrame::at_rest(target, child);
                frames.push(TargetFrame {
                    x: track(&tweens, child, time, rest.x, |props| props.x.map(|l| l.resolve(viewport))),
                    y: track(&tweens, child, time, rest.y, |props| props.y.map(|l| l.resolve(viewport))),
                    opacity: track(&tweens, child, time, rest.opacity, |props| props.opacity),
                    scale: track(&tweens, child, time, rest.scale, |props| props.scale),
                    ..rest
                });
            }
        }
        frames
    }

    /// [`Timeline::sample`] at a fraction of the total duration, for
    /// scroll-driven timelines.
    #[must_use]
    pub fn sample_progress(
        &self,
        progress: f64,
        child_counts: &HashMap<String, usize>,
        viewport: Viewport,
    ) -> Vec<TargetFrame> {
        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        self.sample(progress * self.duration(child_counts), child_counts, viewport)
    }
}

fn child_count(child_counts: &HashMap<String, usize>, target: &str) -> usize {
    child_counts.get(target).copied().unwrap_or(1)
}

/// Value of one property of one child at `time`.
fn track<V: Interpolate>(
    tweens: &[&Tween],
    child: usize,
    time: f64,
    rest: V,
    pick: impl Fn(&AnimatedProps) -> Option<V>,
) -> V {
    let mut touching = tweens
        .iter()
        .filter_map(|tween| {
            let from = pick(&tween.from);
            let to = pick(&tween.to);
            (from.is_some() || to.is_some()).then_some((*tween, from, to))
        })
        .collect::<Vec<_>>();
    touching.sort_by(|a, b| a.0.timing.child_start(child).total_cmp(&b.0.timing.child_start(child)));

    let mut held = rest;
    let mut first_start = None;
    let mut current = None;
    for (tween, from, to) in touching {
        let start_value = from.unwrap_or(held);
        let end_value = to.unwrap_or(held);
        if first_start.is_none() {
            first_start = Some(start_value);
        }
        if time >= tween.timing.child_start(child) {
            let eased = tween.timing.ease.apply(tween.timing.progress(time, child));
            current = Some(V::interpolate(start_value, end_value, eased));
        }
        held = end_value;
    }
    current.or(first_start).unwrap_or(rest)
}

// =============================================================
// Scrub smoothing
// =============================================================

/// Lagging follower for scrubbed scroll progress.
///
/// Each time the target moves, the follower restarts a linear glide from its
/// current value that lands on the target `lag_s` seconds later.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scrub {
    lag_s: f64,
    state: Option<Glide>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Glide {
    from: f64,
    target: f64,
    current: f64,
    elapsed_s: f64,
}

impl Scrub {
    #[must_use]
    pub fn new(lag_s: f64) -> Self {
        Self { lag_s, state: None }
    }

    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.state.map(|glide| glide.current)
    }

    /// Advance by `dt_s` seconds toward `target` and return the new value.
    /// The first sample lands on the target directly.
    pub fn step(&mut self, target: f64, dt_s: f64) -> f64 {
        let dt_s = if dt_s.is_finite() { dt_s.max(0.0) } else { 0.0 };
        let Some(mut glide) = self.state else {
            self.state = Some(Glide { from: target, target, current: target, elapsed_s: 0.0 });
            return target;
        };
        if self.lag_s <= 0.0 || !self.lag_s.is_finite() {
            glide = Glide { from: target, target, current: target, elapsed_s: 0.0 };
        } else {
            if (glide.target - target).abs() > f64::EPSILON {
                glide = Glide { from: glide.current, target, current: glide.current, elapsed_s: 0.0 };
            }
            glide.elapsed_s += dt_s;
            let t = (glide.elapsed_s / self.lag_s).min(1.0);
            glide.current = f64::interpolate(glide.from, glide.target, t);
        }
        self.state = Some(glide);
        glide.current
    }
}

// =============================================================
// Playhead
// =============================================================

/// Real-time playhead for timelines that play and reverse on scroll.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Playhead {
    time: f64,
    forward: bool,
}

impl Playhead {
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[must_use]
    pub fn is_forward(&self) -> bool {
        self.forward
    }

    pub fn play(&mut self) {
        self.forward = true;
    }

    pub fn reverse(&mut self) {
        self.forward = false;
    }

    /// Move by `dt_s` in the current direction, staying within
    /// `[0, duration]`. Returns the new time.
    pub fn advance(&mut self, dt_s: f64, duration: f64) -> f64 {
        let dt_s = if dt_s.is_finite() { dt_s.max(0.0) } else { 0.0 };
        let duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
        let next = if self.forward { self.time + dt_s } else { self.time - dt_s };
        self.time = next.clamp(0.0, duration);
        self.time
    }

    /// Whether the playhead has stopped at the end it is heading to.
    #[must_use]
    pub fn is_settled(&self, duration: f64) -> bool {
        if self.forward { self.time >= duration } else { self.time <= 0.0 }
    }
}
