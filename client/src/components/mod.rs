//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Theme controls read and write the shared theme context from `use_theme`;
//! the project card is plain presentation over static catalog data.

pub mod color_picker;
pub mod project_card;
pub mod site_header;
pub mod theme_ready;
pub mod theme_toggle;
