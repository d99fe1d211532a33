//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages resolve route parameters and compose `components`; none of them
//! touch theme state directly.

pub mod home;
pub mod not_found;
pub mod project;
