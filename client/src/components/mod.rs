//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome (navigation, footer, theme toggle) and the
//! animated building blocks pages compose: timeline-driven sections, scroll
//! snapping, logo strips, the testimonials carousel and the contact form.

pub mod animated_section;
pub mod contact_section;
pub mod footer;
pub mod hover_menus;
pub mod iaiso_nav;
pub mod logo_marquee;
pub mod rooman_nav;
pub mod scroll_snap;
pub mod testimonials;
pub mod theme_toggle;
