//! Error types for the theme crate.
//!
//! None of these are fatal. Storage and surface errors are logged by the store
//! and degrade it to in-memory state; [`ThemeError`] is returned to callers
//! that can choose to ignore it (the color picker does).

/// Errors surfaced by [`crate::ThemeStore`] operations and accessors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// Theme state was read before `initialize` ran or outside a provider.
    #[error("theme state is not initialized")]
    NotInitialized,
    /// The value is not a `#rrggbb` color.
    #[error("invalid accent color: {0:?}")]
    InvalidColor(String),
}

/// Errors from a [`crate::PreferenceStorage`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No durable storage exists (server render, disabled storage).
    #[error("preference storage unavailable")]
    Unavailable,
    #[error("failed to read preference: {0}")]
    Read(String),
    #[error("failed to write preference: {0}")]
    Write(String),
}

/// Errors from a [`crate::ThemeSurface`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// No document is attached.
    #[error("theme surface unavailable")]
    Unavailable,
    /// The document refused the attribute or property.
    #[error("theme surface rejected update: {0}")]
    Rejected(String),
}
