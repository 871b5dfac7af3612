//! Scroll, carousel, and menu motion math for the IAISO site.
//!
//! This crate is framework-free and deterministic: every function takes the
//! current time, scroll position, or viewport sample as an argument and
//! returns plain data. The `client` crate owns the browser glue (event
//! listeners, timers, inline styles) and feeds samples into these modules.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`scroll_snap`] | Snap targets for pinned scroll sections |
//! | [`carousel`] | Circular testimonial carousel layout and index math |
//! | [`autoplay`] | Autoplay tick scheduling with manual-navigation reset |
//! | [`hover_intent`] | Dropdown open/close state machine with owned timers |
//! | [`easing`] | GSAP-style easing curves |
//! | [`timeline`] | Declarative animation records and the shared sampler |
//! | [`consts`] | Shared numeric constants (buffers, intervals, geometry) |

pub mod autoplay;
pub mod carousel;
pub mod consts;
pub mod easing;
pub mod hover_intent;
pub mod scroll_snap;
pub mod timeline;
