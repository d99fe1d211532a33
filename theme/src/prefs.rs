//! Persisted preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser the backend is `localStorage`; on the server and in tests it
//! is [`MemoryStorage`]. Values are stored as plain strings under two keys with
//! no versioning: unknown values are ignored by the reader.

use std::collections::HashMap;

use crate::error::StorageError;

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

/// Key holding `"light"` or `"dark"`. Present only after an explicit toggle.
pub const THEME_KEY: &str = "theme";
/// Key holding the accent color as `#rrggbb`.
pub const ACCENT_KEY: &str = "primary-color";

/// Durable string key-value storage.
pub trait PreferenceStorage {
    /// Read `key`; `Ok(None)` when it was never written.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local storage. Never fails.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the value stored under `key`.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.value(key).map(str::to_owned))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.insert(key, value);
        Ok(())
    }
}
