//! Shared runner for declarative section animations.
//!
//! DESIGN
//! ======
//! A section names a built-in timeline; elements inside it opt in with
//! `data-anim="<target>"`. The runner measures (clock, scroll offset,
//! geometry, child counts), asks `motion::timeline` for frames and writes
//! them back as inline styles. One runner drives every trigger kind:
//!
//! - `load`: plays once from mount.
//! - `scroll`: follows scroll progress through a `Scrub` lag. Pinned
//!   timelines render inside a sticky stage whose spacer is sized to the
//!   pin distance, and report their span to the page's [`PinRegistry`].
//! - `enter`: plays forward when the start edge is crossed, and back when
//!   it is crossed upward if the record allows reversing.
//!
//! The ticker only runs while something is moving.

#[cfg(test)]
#[path = "animated_section_test.rs"]
mod animated_section_test;

use leptos::prelude::*;
use motion::scroll_snap::PinnedTrigger;
use motion::timeline::{Timeline, Trigger};

use crate::util::timelines::TimelineId;
#[cfg(feature = "hydrate")]
use crate::util::timer::Ticker;

/// Pinned scroll spans reported by the sections of one page, keyed by
/// section id. Provided by pages that install scroll snapping.
#[derive(Clone, Copy)]
pub struct PinRegistry(RwSignal<Vec<(String, PinnedTrigger)>>);

impl Default for PinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PinRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self(RwSignal::new(Vec::new()))
    }

    pub fn report(self, key: &str, trigger: PinnedTrigger) {
        self.0.update(|pins| upsert_pin(pins, key, trigger));
    }

    /// Reported pins in document order.
    #[must_use]
    pub fn triggers(self) -> Vec<PinnedTrigger> {
        sorted_triggers(&self.0.get_untracked())
    }
}

/// Replace the pin reported under `key`, or add it.
pub fn upsert_pin(pins: &mut Vec<(String, PinnedTrigger)>, key: &str, trigger: PinnedTrigger) {
    match pins.iter_mut().find(|(k, _)| k == key) {
        Some((_, existing)) => *existing = trigger,
        None => pins.push((key.to_owned(), trigger)),
    }
}

#[must_use]
pub fn sorted_triggers(pins: &[(String, PinnedTrigger)]) -> Vec<PinnedTrigger> {
    let mut triggers = pins.iter().map(|(_, trigger)| *trigger).collect::<Vec<_>>();
    triggers.sort_by(|a, b| a.start_px.total_cmp(&b.start_px));
    triggers
}

/// Whether a timeline needs the sticky pin stage.
#[must_use]
pub fn is_pinned(timeline: &Timeline) -> bool {
    matches!(timeline.trigger, Trigger::Scroll(scroll) if scroll.pin)
}

/// Spacer height that keeps a sticky stage pinned for `span_px` of scroll.
#[must_use]
pub fn spacer_height(viewport_height: f64, span_px: f64) -> f64 {
    viewport_height + span_px.max(0.0)
}

/// Inline style for the pin spacer.
#[must_use]
pub fn spacer_style(height: f64) -> String {
    format!("height: {height}px;")
}

/// A block whose `data-anim` children are animated by `timeline`.
#[component]
pub fn AnimatedSection(
    timeline: TimelineId,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let parsed = match timeline.load() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            leptos::logging::warn!("timeline {timeline:?} disabled: {e}");
            None
        }
    };
    let pinned = parsed.as_ref().is_some_and(is_pinned);
    let node_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    if let Some(parsed) = parsed {
        let pin = if pinned {
            use_context::<PinRegistry>().zip(id.clone())
        } else {
            None
        };
        runner::install(node_ref, parsed, pin);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = parsed;

    if pinned {
        view! {
            <div id=id class="pin-spacer" node_ref=node_ref>
                <div class=format!("pin-stage {class}")>{children()}</div>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div id=id class=format!("anim-block {class}") node_ref=node_ref>
                {children()}
            </div>
        }
        .into_any()
    }
}

#[cfg(feature = "hydrate")]
mod runner {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use leptos::prelude::*;
    use motion::timeline::{EnterTrigger, Playhead, Scrub, ScrollTrigger, Timeline, Trigger};

    use super::{PinRegistry, Ticker, spacer_height, spacer_style};
    use crate::util::browser;

    const FRAME_MS: f64 = 16.0;
    const SETTLE_EPSILON: f64 = 1e-4;

    enum Mode {
        Load { started_ms: f64 },
        Scroll { trigger: ScrollTrigger, scrub: Scrub },
        Enter { trigger: EnterTrigger, playhead: Playhead },
    }

    struct Runner {
        root: web_sys::Element,
        timeline: Timeline,
        counts: HashMap<String, usize>,
        pin: Option<(PinRegistry, String)>,
        mode: Mode,
        last_ms: f64,
    }

    impl Runner {
        fn new(root: web_sys::Element, timeline: Timeline, pin: Option<(PinRegistry, String)>) -> Self {
            let now = browser::now_ms();
            let mode = match timeline.trigger {
                Trigger::Load => Mode::Load { started_ms: now },
                Trigger::Scroll(trigger) => Mode::Scroll { trigger, scrub: Scrub::new(trigger.scrub) },
                Trigger::Enter(trigger) => Mode::Enter { trigger, playhead: Playhead::default() },
            };
            Self { root, timeline, counts: HashMap::new(), pin, mode, last_ms: now }
        }

        /// Re-read child counts and pin geometry after mount or resize.
        fn measure(&mut self) {
            self.counts = self
                .timeline
                .targets()
                .into_iter()
                .map(|target| (target.to_owned(), browser::count_targets(&self.root, target)))
                .collect();

            let (Mode::Scroll { trigger, .. }, Some((registry, key))) = (&self.mode, &self.pin) else {
                return;
            };
            let geometry = browser::element_geometry(&self.root);
            let (start, end) = trigger.scroll_span(geometry);
            let height = spacer_height(geometry.viewport_height, end - start);
            browser::set_inline_style(&self.root, &spacer_style(height));
            if let Some(pinned) = trigger.pinned(geometry) {
                registry.report(key, pinned);
            }
        }

        /// Render one frame. Returns whether anything is still moving.
        fn frame(&mut self, now_ms: f64) -> bool {
            let dt_s = ((now_ms - self.last_ms) / 1000.0).max(0.0);
            self.last_ms = now_ms;
            let viewport = browser::viewport();
            let (frames, moving) = match &mut self.mode {
                Mode::Load { started_ms } => {
                    let time = (now_ms - *started_ms) / 1000.0;
                    let duration = self.timeline.duration(&self.counts);
                    (self.timeline.sample(time, &self.counts, viewport), time < duration)
                }
                Mode::Scroll { trigger, scrub } => {
                    let geometry = browser::element_geometry(&self.root);
                    let target = trigger.progress(browser::scroll_y(), geometry);
                    let progress = scrub.step(target, dt_s);
                    let moving = (progress - target).abs() > SETTLE_EPSILON;
                    (self.timeline.sample_progress(progress, &self.counts, viewport), moving)
                }
                Mode::Enter { trigger, playhead } => {
                    let geometry = browser::element_geometry(&self.root);
                    if trigger.is_entered(browser::scroll_y(), geometry) {
                        playhead.play();
                    } else if trigger.reverse {
                        playhead.reverse();
                    }
                    let duration = self.timeline.duration(&self.counts);
                    let time = playhead.advance(dt_s, duration);
                    (self.timeline.sample(time, &self.counts, viewport), !playhead.is_settled(duration))
                }
            };
            browser::apply_frames(&self.root, &frames);
            moving
        }
    }

    fn wake(runner: &Rc<RefCell<Runner>>, ticker: Ticker) {
        if ticker.is_running() {
            return;
        }
        runner.borrow_mut().last_ms = browser::now_ms();
        let runner = Rc::clone(runner);
        ticker.start(FRAME_MS, move || {
            let moving = runner.borrow_mut().frame(browser::now_ms());
            if !moving {
                ticker.stop();
            }
        });
    }

    pub(super) fn install(
        node_ref: NodeRef<leptos::html::Div>,
        timeline: Timeline,
        pin: Option<(PinRegistry, String)>,
    ) {
        let ticker = Ticker::new();
        let pending = Rc::new(RefCell::new(Some((timeline, pin))));
        Effect::new(move || {
            let Some(div) = node_ref.get() else {
                return;
            };
            let Some((timeline, pin)) = pending.borrow_mut().take() else {
                return;
            };
            let runner = Rc::new(RefCell::new(Runner::new(div.into(), timeline, pin)));
            {
                let mut state = runner.borrow_mut();
                state.measure();
                let now = browser::now_ms();
                state.frame(now);
            }
            wake(&runner, ticker);

            let on_scroll = {
                let runner = Rc::clone(&runner);
                window_event_listener(leptos::ev::scroll, move |_| wake(&runner, ticker))
            };
            let on_resize = {
                let runner = Rc::clone(&runner);
                window_event_listener(leptos::ev::resize, move |_| {
                    runner.borrow_mut().measure();
                    wake(&runner, ticker);
                })
            };
            on_cleanup(move || {
                on_scroll.remove();
                on_resize.remove();
                ticker.stop();
            });
        });
    }
}
