//! Document surface the theme is applied to.
//!
//! The presentation layer reads one attribute and three style variables:
//!
//! ```css
//! [data-theme="dark"] { ... }
//! --primary: hsl(var(--primary-hue) var(--primary-saturation) var(--primary-lightness));
//! ```

use std::collections::HashMap;

use crate::color::Hsl;
use crate::error::SurfaceError;
use crate::mode::ThemeMode;

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

pub const MODE_ATTRIBUTE: &str = "data-theme";
pub const HUE_VAR: &str = "--primary-hue";
pub const SATURATION_VAR: &str = "--primary-saturation";
pub const LIGHTNESS_VAR: &str = "--primary-lightness";

/// Root element of the rendered document.
pub trait ThemeSurface {
    /// # Errors
    ///
    /// Returns a [`SurfaceError`] when the attribute cannot be set.
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), SurfaceError>;

    /// # Errors
    ///
    /// Returns a [`SurfaceError`] when the style property cannot be set.
    fn set_style_property(&mut self, name: &str, value: &str) -> Result<(), SurfaceError>;
}

/// Write the mode attribute.
///
/// # Errors
///
/// Propagates the surface error.
pub fn apply_mode<D: ThemeSurface + ?Sized>(surface: &mut D, mode: ThemeMode) -> Result<(), SurfaceError> {
    surface.set_attribute(MODE_ATTRIBUTE, mode.as_str())
}

/// Write the three accent style variables.
///
/// # Errors
///
/// Stops at and returns the first surface error.
pub fn apply_accent<D: ThemeSurface + ?Sized>(surface: &mut D, hsl: Hsl) -> Result<(), SurfaceError> {
    let (hue, saturation, lightness) = hsl.css_components();
    surface.set_style_property(HUE_VAR, &hue)?;
    surface.set_style_property(SATURATION_VAR, &saturation)?;
    surface.set_style_property(LIGHTNESS_VAR, &lightness)
}

/// Surface that records the last value written per name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySurface {
    pub attributes: HashMap<String, String>,
    pub style: HashMap<String, String>,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn style_property(&self, name: &str) -> Option<&str> {
        self.style.get(name).map(String::as_str)
    }
}

impl ThemeSurface for MemorySurface {
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), SurfaceError> {
        self.attributes.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn set_style_property(&mut self, name: &str, value: &str) -> Result<(), SurfaceError> {
        self.style.insert(name.to_owned(), value.to_owned());
        Ok(())
    }
}
