//! Theme state store: the single owner and writer of mode and accent state.
//!
//! LIFECYCLE
//! =========
//! `new` -> `initialize` (reads preferences, applies them, becomes ready) ->
//! `attach_system_listener` -> mutations -> `teardown`.
//!
//! Every mutation applies to the surface first and then persists, so the
//! document never shows a value that was not committed. A mode derived from
//! the system preference is applied but not persisted: only `toggle_mode`
//! writes the `theme` key, and its presence is what marks an explicit
//! override that later system changes must respect.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. The first storage error is logged and the
//! store switches to an in-memory map for the rest of the session instead of
//! failing the caller.

use serde::{Deserialize, Serialize};

use crate::color::{AccentColor, Hsl};
use crate::error::{StorageError, ThemeError};
use crate::mode::ThemeMode;
use crate::prefs::{ACCENT_KEY, MemoryStorage, PreferenceStorage, THEME_KEY};
use crate::surface::{self, ThemeSurface};

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Read-only copy of the live theme state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeSnapshot {
    pub mode: ThemeMode,
    pub accent: AccentColor,
    pub hsl: Hsl,
}

/// Theme mode and accent color with persistence and document sync.
#[derive(Debug)]
pub struct ThemeStore<S, D> {
    storage: S,
    surface: D,
    /// Holds writes once `storage` has failed.
    fallback: MemoryStorage,
    durable: bool,
    mode: ThemeMode,
    accent: AccentColor,
    mode_override: bool,
    ready: bool,
    listening: bool,
}

impl<S: PreferenceStorage, D: ThemeSurface> ThemeStore<S, D> {
    pub fn new(storage: S, surface: D) -> Self {
        Self {
            storage,
            surface,
            fallback: MemoryStorage::new(),
            durable: true,
            mode: ThemeMode::default(),
            accent: AccentColor::default(),
            mode_override: false,
            ready: false,
            listening: false,
        }
    }

    /// Resolve the starting state, apply it, and mark the store ready.
    ///
    /// A stored mode wins over `system_mode`. Unknown stored values fall back
    /// to the system mode and the default accent. Calling again while ready
    /// returns the current state without re-reading storage.
    pub fn initialize(&mut self, system_mode: ThemeMode) -> (ThemeMode, AccentColor) {
        if self.ready {
            return (self.mode, self.accent.clone());
        }

        let stored_mode = self.read(THEME_KEY);
        let stored_accent = self.read(ACCENT_KEY);

        let parsed_mode = stored_mode.as_deref().and_then(ThemeMode::parse);
        if parsed_mode.is_none() && stored_mode.is_some() {
            log::warn!("ignoring unknown stored theme {stored_mode:?}");
        }
        self.mode_override = parsed_mode.is_some();
        self.mode = parsed_mode.unwrap_or(system_mode);

        self.accent = match stored_accent {
            Some(raw) => AccentColor::parse(&raw).unwrap_or_else(|err| {
                log::warn!("ignoring stored accent: {err}");
                AccentColor::default()
            }),
            None => AccentColor::default(),
        };

        self.apply_mode();
        self.apply_accent(self.accent.to_hsl());
        self.ready = true;
        log::debug!(
            "theme initialized: mode={} accent={} override={}",
            self.mode.as_str(),
            self.accent,
            self.mode_override
        );
        (self.mode, self.accent.clone())
    }

    /// Flip the mode and persist it as an explicit user choice.
    pub fn toggle_mode(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.mode_override = true;
        self.apply_mode();
        self.write(THEME_KEY, self.mode.as_str());
        self.mode
    }

    /// Commit a new accent color and return its derived HSL.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidColor`] for anything but `#rrggbb`; the
    /// previous color stays applied and persisted.
    pub fn set_accent_color(&mut self, raw: &str) -> Result<Hsl, ThemeError> {
        let accent = AccentColor::parse(raw)?;
        let hsl = accent.to_hsl();
        let persisted = accent.as_str().to_owned();
        self.accent = accent;
        self.apply_accent(hsl);
        self.write(ACCENT_KEY, &persisted);
        Ok(hsl)
    }

    /// Start accepting [`Self::handle_system_change`] notifications.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::NotInitialized`] before `initialize`.
    pub fn attach_system_listener(&mut self) -> Result<(), ThemeError> {
        if !self.ready {
            return Err(ThemeError::NotInitialized);
        }
        self.listening = true;
        Ok(())
    }

    pub fn detach_system_listener(&mut self) {
        self.listening = false;
    }

    /// Follow an OS dark/light change. Returns whether the mode changed.
    ///
    /// Ignored while detached or once the user has toggled explicitly.
    pub fn handle_system_change(&mut self, system_mode: ThemeMode) -> bool {
        if !self.listening || self.mode_override || self.mode == system_mode {
            return false;
        }
        self.mode = system_mode;
        self.apply_mode();
        log::debug!("theme follows system preference: {}", system_mode.as_str());
        true
    }

    /// End the session: detach the listener and clear readiness.
    pub fn teardown(&mut self) {
        self.listening = false;
        self.ready = false;
    }

    /// Current state, available only once ready.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::NotInitialized`] before `initialize` or after
    /// `teardown`.
    pub fn snapshot(&self) -> Result<ThemeSnapshot, ThemeError> {
        if !self.ready {
            return Err(ThemeError::NotInitialized);
        }
        Ok(ThemeSnapshot { mode: self.mode, accent: self.accent.clone(), hsl: self.hsl() })
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn accent(&self) -> &AccentColor {
        &self.accent
    }

    pub fn hsl(&self) -> Hsl {
        self.accent.to_hsl()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn has_mode_override(&self) -> bool {
        self.mode_override
    }

    /// `false` once storage has failed and writes only live in memory.
    pub fn is_persistent(&self) -> bool {
        self.durable
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    fn apply_mode(&mut self) {
        if let Err(err) = surface::apply_mode(&mut self.surface, self.mode) {
            log::warn!("failed to apply theme mode: {err}");
        }
    }

    fn apply_accent(&mut self, hsl: Hsl) {
        if let Err(err) = surface::apply_accent(&mut self.surface, hsl) {
            log::warn!("failed to apply accent color: {err}");
        }
    }

    fn read(&mut self, key: &str) -> Option<String> {
        if !self.durable {
            return self.fallback.value(key).map(str::to_owned);
        }
        match self.storage.get(key) {
            Ok(value) => value,
            Err(err) => {
                self.degrade(&err);
                self.fallback.value(key).map(str::to_owned)
            }
        }
    }

    fn write(&mut self, key: &str, value: &str) {
        if self.durable {
            match self.storage.set(key, value) {
                Ok(()) => return,
                Err(err) => self.degrade(&err),
            }
        }
        self.fallback.insert(key, value);
    }

    /// Switch to the in-memory map, carrying over what was already loaded
    /// from durable storage so a later `initialize` still sees it.
    fn degrade(&mut self, err: &StorageError) {
        log::warn!("{err}; keeping theme preferences in memory");
        self.durable = false;
        if !self.ready {
            return;
        }
        if self.mode_override {
            self.fallback.insert(THEME_KEY, self.mode.as_str());
        }
        self.fallback.insert(ACCENT_KEY, self.accent.as_str());
    }
}
