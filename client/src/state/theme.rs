//! Theme context: the browser-backed [`ThemeStore`] behind a Leptos signal.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` calls [`provide_theme`] once. Its effect runs only after hydration,
//! so the server render and the first client render agree on the default
//! state; components gate theme-dependent markup on [`ThemeContext::is_ready`].
//! The effect initializes the store from storage and the current OS scheme,
//! then subscribes to scheme changes for as long as the effect lives.

use leptos::prelude::*;
use theme::{AccentColor, Hsl, ThemeError, ThemeMode, ThemeSnapshot, ThemeStore};

use crate::util::browser::{DocumentRoot, WebStorage};
use crate::util::system_scheme;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

pub type BrowserThemeStore = ThemeStore<WebStorage, DocumentRoot>;

/// Copyable handle to the shared theme store.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    store: RwSignal<BrowserThemeStore>,
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeContext {
    pub fn new() -> Self {
        Self { store: RwSignal::new(ThemeStore::new(WebStorage, DocumentRoot)) }
    }

    /// Load preferences and apply them.
    ///
    /// # Errors
    ///
    /// [`ThemeError::NotInitialized`] if the owning scope is already gone.
    pub fn initialize(&self, system_mode: ThemeMode) -> Result<ThemeSnapshot, ThemeError> {
        self.store
            .try_update(|s| {
                s.initialize(system_mode);
                s.snapshot()
            })
            .unwrap_or(Err(ThemeError::NotInitialized))
    }

    pub fn mode(&self) -> ThemeMode {
        self.store.with(ThemeStore::mode)
    }

    pub fn accent(&self) -> AccentColor {
        self.store.with(|s| s.accent().clone())
    }

    pub fn hsl(&self) -> Hsl {
        self.store.with(ThemeStore::hsl)
    }

    pub fn is_ready(&self) -> bool {
        self.store.with(ThemeStore::is_ready)
    }

    pub fn toggle_mode(&self) -> ThemeMode {
        self.store.try_update(ThemeStore::toggle_mode).unwrap_or_default()
    }

    /// Commit `raw` as the accent color.
    ///
    /// Invalid input is rejected before the signal is touched, so subscribers
    /// are not notified for a no-op.
    ///
    /// # Errors
    ///
    /// [`ThemeError::InvalidColor`] for anything but `#rrggbb`.
    pub fn set_accent_color(&self, raw: &str) -> Result<Hsl, ThemeError> {
        let accent = AccentColor::parse(raw)?;
        self.store
            .try_update(|s| s.set_accent_color(accent.as_str()))
            .unwrap_or(Err(ThemeError::NotInitialized))
    }

    /// # Errors
    ///
    /// [`ThemeError::NotInitialized`] before [`Self::initialize`].
    pub fn attach_system_listener(&self) -> Result<(), ThemeError> {
        self.store
            .try_update(ThemeStore::attach_system_listener)
            .unwrap_or(Err(ThemeError::NotInitialized))
    }

    pub fn detach_system_listener(&self) {
        self.store.try_update(ThemeStore::detach_system_listener);
    }

    pub fn handle_system_change(&self, system_mode: ThemeMode) -> bool {
        // Read first so an ignored change does not notify subscribers.
        let follows = self
            .store
            .try_with_untracked(|s| s.is_listening() && !s.has_mode_override() && s.mode() != system_mode)
            .unwrap_or(false);
        follows && self.store.try_update(|s| s.handle_system_change(system_mode)).unwrap_or(false)
    }

    pub fn teardown(&self) {
        self.store.try_update(ThemeStore::teardown);
    }
}

/// The theme context provided by an ancestor.
///
/// # Errors
///
/// [`ThemeError::NotInitialized`] when no ancestor called [`provide_theme`].
pub fn use_theme() -> Result<ThemeContext, ThemeError> {
    use_context::<ThemeContext>().ok_or(ThemeError::NotInitialized)
}

/// Create the theme context, provide it, and start the browser session.
pub fn provide_theme() -> ThemeContext {
    let theme = ThemeContext::new();
    provide_context(theme);

    Effect::new(move || {
        match theme.initialize(system_scheme::current_mode()) {
            Ok(snapshot) => log::info!("theme ready: {} {}", snapshot.mode.as_str(), snapshot.accent),
            Err(err) => {
                log::warn!("theme initialization skipped: {err}");
                return;
            }
        }
        if let Err(err) = theme.attach_system_listener() {
            log::warn!("system scheme listener not attached: {err}");
            return;
        }

        let listener = system_scheme::subscribe(move |mode| {
            if theme.handle_system_change(mode) {
                log::debug!("applied system color scheme {}", mode.as_str());
            }
        });
        let guard = StoredValue::new_local(listener);
        on_cleanup(move || {
            theme.detach_system_listener();
            guard.dispose();
        });
    });

    on_cleanup(move || theme.teardown());
    theme
}
