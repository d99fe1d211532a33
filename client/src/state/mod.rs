//! Client state shared through Leptos context.
//!
//! DESIGN
//! ======
//! `theme` wraps the browser-backed theme store in a signal so components can
//! read it reactively; `projects` is static route data with no reactivity.

pub mod projects;
pub mod theme;
