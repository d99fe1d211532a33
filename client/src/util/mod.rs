//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Everything here compiles without `hydrate` and degrades to an
//! "unavailable" answer so server rendering and native tests stay deterministic.

pub mod browser;
pub mod system_scheme;
