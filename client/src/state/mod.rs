//! Reactive state shared through Leptos context.
//!
//! DESIGN
//! ======
//! Each struct is plain data wrapped in an `RwSignal` by the component that
//! owns it; the transition logic lives on the struct so it can be tested
//! without a reactive runtime.

pub mod blog;
pub mod events;
pub mod shop;
pub mod ui;
