//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Everything outside `browser` and `timer` is plain data and is tested
//! natively.

pub mod browser;
pub mod certifications;
pub mod contact_form;
pub mod dark_mode;
pub mod site_map;
pub mod timelines;
pub mod timer;
