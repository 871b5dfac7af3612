//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state and content, and delegates
//! animation, navigation chrome and forms to `components`. IAISO pages come
//! first, then the Rooman pages.

pub mod ai_solutions;
pub mod certifications;
pub mod events;
pub mod iaiso_home;
pub mod membership;
pub mod not_found;
pub mod program;

pub mod about;
pub mod blog;
pub mod rooman_home;
pub mod services;
pub mod shop;
