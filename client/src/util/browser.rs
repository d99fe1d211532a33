//! Browser backends for the theme store: `localStorage` and `<html>`.
//!
//! TRADE-OFFS
//! ==========
//! Both backends look up `window` on every call instead of caching handles,
//! which keeps them zero-sized and `Send + Sync` so the store can live in a
//! Leptos signal. Without `hydrate` they report `Unavailable`; the store then
//! keeps preferences in memory and skips document updates.

use theme::{PreferenceStorage, StorageError, SurfaceError, ThemeSurface};
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebStorage;

impl PreferenceStorage for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|err| StorageError::Read(js_error(&err)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|err| StorageError::Write(js_error(&err)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// `document.documentElement`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl ThemeSurface for DocumentRoot {
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), SurfaceError> {
        #[cfg(feature = "hydrate")]
        {
            root_element()?
                .set_attribute(name, value)
                .map_err(|err| SurfaceError::Rejected(js_error(&err)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, value);
            Err(SurfaceError::Unavailable)
        }
    }

    fn set_style_property(&mut self, name: &str, value: &str) -> Result<(), SurfaceError> {
        #[cfg(feature = "hydrate")]
        {
            let element = root_element()?
                .dyn_into::<web_sys::HtmlElement>()
                .map_err(|_| SurfaceError::Unavailable)?;
            element
                .style()
                .set_property(name, value)
                .map_err(|err| SurfaceError::Rejected(js_error(&err)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, value);
            Err(SurfaceError::Unavailable)
        }
    }
}

/// Accessing `localStorage` throws when storage is disabled, so both the
/// throw and a missing object map to `Unavailable`.
#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn root_element() -> Result<web_sys::Element, SurfaceError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .ok_or(SurfaceError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn js_error(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
