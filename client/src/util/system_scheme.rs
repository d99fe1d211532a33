//! `prefers-color-scheme` probing and change subscription.

use theme::ThemeMode;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

#[cfg(test)]
#[path = "system_scheme_test.rs"]
mod system_scheme_test;

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// The OS color scheme right now. Light when no browser is attached.
pub fn current_mode() -> ThemeMode {
    #[cfg(feature = "hydrate")]
    {
        ThemeMode::from_prefers_dark(dark_query().is_some_and(|mq| mq.matches()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ThemeMode::Light
    }
}

/// Live `change` listener on the dark-scheme media query.
///
/// Dropping the guard removes the listener, so the owner controls its
/// lifetime by holding it.
pub struct SystemSchemeListener {
    #[cfg(feature = "hydrate")]
    query: web_sys::MediaQueryList,
    #[cfg(feature = "hydrate")]
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
}

impl Drop for SystemSchemeListener {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            if let Err(err) = self
                .query
                .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove color scheme listener: {err:?}");
            }
        }
    }
}

/// Call `on_change` with the new mode whenever the OS scheme flips.
///
/// Returns `None` when there is no browser or `matchMedia` is unsupported.
pub fn subscribe(on_change: impl FnMut(ThemeMode) + 'static) -> Option<SystemSchemeListener> {
    #[cfg(feature = "hydrate")]
    {
        let mut on_change = on_change;
        let query = dark_query()?;
        let callback = wasm_bindgen::closure::Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
            move |event: web_sys::MediaQueryListEvent| on_change(ThemeMode::from_prefers_dark(event.matches())),
        );
        match query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(SystemSchemeListener { query, callback }),
            Err(err) => {
                log::warn!("failed to add color scheme listener: {err:?}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        drop(on_change);
        None
    }
}

#[cfg(feature = "hydrate")]
fn dark_query() -> Option<web_sys::MediaQueryList> {
    match web_sys::window()?.match_media(DARK_SCHEME_QUERY) {
        Ok(query) => query,
        Err(err) => {
            log::debug!("matchMedia unsupported: {err:?}");
            None
        }
    }
}
