//! Theme state and accent color math for the portfolio site.
//!
//! This crate owns the light/dark mode and the user-chosen accent color. It is
//! plain Rust with no browser dependency: the host (the Leptos `client`)
//! supplies a [`PreferenceStorage`] backed by `localStorage` and a
//! [`ThemeSurface`] backed by the `<html>` element, and forwards
//! `prefers-color-scheme` changes into the store.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`color`] | Hex/HSL conversion, validated [`AccentColor`], hex input drafts, preset swatches |
//! | [`mode`] | [`ThemeMode`] and its persisted string form |
//! | [`prefs`] | Storage seam, persisted keys, in-memory fallback |
//! | [`surface`] | Document seam: mode attribute and HSL style variables |
//! | [`store`] | [`ThemeStore`], the single writer of theme state |
//! | [`error`] | Error enums shared by the modules above |

pub mod color;
pub mod error;
pub mod mode;
pub mod prefs;
pub mod store;
pub mod surface;

pub use color::{AccentColor, DEFAULT_ACCENT, HexDraft, Hsl, PRESET_ACCENTS, hex_to_hsl, hsl_to_hex};
pub use error::{StorageError, SurfaceError, ThemeError};
pub use mode::ThemeMode;
pub use prefs::{MemoryStorage, PreferenceStorage};
pub use store::{ThemeSnapshot, ThemeStore};
pub use surface::{MemorySurface, ThemeSurface};
