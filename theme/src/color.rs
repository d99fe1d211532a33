//! Accent color parsing and RGB <-> HSL conversion.
//!
//! DESIGN
//! ======
//! The accent color is stored and persisted as canonical `#rrggbb`. HSL is
//! always re-derived from that hex value, never stored, so repeated
//! conversions cannot drift. Parsing here is strict (exactly `#` plus six hex
//! digits); the looser rules for a half-typed text field live in [`HexDraft`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Accent color used when nothing valid is stored.
pub const DEFAULT_ACCENT: &str = "#0066ff";

/// What [`hex_to_hsl`] returns for input it cannot parse.
pub const FALLBACK_HSL: Hsl = Hsl { h: 240.0, s: 100.0, l: 50.0 };

/// Swatches offered by the color picker, as `(label, hex)`.
pub const PRESET_ACCENTS: [(&str, &str); 8] = [
    ("Blue", "#0066ff"),
    ("Purple", "#8b5cf6"),
    ("Cyan", "#06b6d4"),
    ("Emerald", "#10b981"),
    ("Amber", "#f59e0b"),
    ("Red", "#ef4444"),
    ("Pink", "#ec4899"),
    ("Lime", "#84cc16"),
];

/// 8-bit RGB channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Format as lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Hue in degrees (0-360), saturation and lightness in percent (0-100).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Values for the hue, saturation and lightness style variables.
    ///
    /// Hue is whole degrees; saturation and lightness are whole percentages
    /// with a `%` suffix, ready for `hsl(var(--h) var(--s) var(--l))`.
    #[must_use]
    pub fn css_components(self) -> (String, String, String) {
        (
            format!("{}", self.h.round()),
            format!("{}%", self.s.round()),
            format!("{}%", self.l.round()),
        )
    }
}

/// Parse a strict `#rrggbb` string (either case) into channels.
pub fn parse_hex_rgb(raw: &str) -> Option<Rgb> {
    let hex = raw.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16);
    match (channel(0), channel(2), channel(4)) {
        (Ok(r), Ok(g), Ok(b)) => Some(Rgb { r, g, b }),
        _ => None,
    }
}

/// Convert `#rrggbb` to HSL. Malformed input yields [`FALLBACK_HSL`].
pub fn hex_to_hsl(hex: &str) -> Hsl {
    parse_hex_rgb(hex).map_or(FALLBACK_HSL, rgb_to_hsl)
}

/// Convert HSL back to lowercase `#rrggbb`.
///
/// Hue wraps modulo 360; saturation and lightness are clamped to 0-100.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    hsl_to_rgb(h, s, l).to_hex()
}

#[allow(clippy::float_cmp)]
fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl { h: 0.0, s: 0.0, l: l * 100.0 };
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl { h: h / 6.0 * 360.0, s: s * 100.0, l: l * 100.0 }
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h.rem_euclid(360.0) / 360.0;
    let s = s.clamp(0.0, 100.0) / 100.0;
    let l = l.clamp(0.0, 100.0) / 100.0;

    let (r, g, b) = if s <= 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb { r: to_channel(r), g: to_channel(g), b: to_channel(b) }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(unit: f64) -> u8 {
    (unit.clamp(0.0, 1.0) * 255.0).round() as u8
}

// =============================================================================
// ACCENT COLOR
// =============================================================================

/// A validated accent color in canonical lowercase `#rrggbb` form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccentColor(String);

impl AccentColor {
    /// Validate and canonicalize `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidColor`] unless `raw` is `#` followed by
    /// exactly six hex digits.
    pub fn parse(raw: &str) -> Result<Self, ThemeError> {
        parse_hex_rgb(raw)
            .map(|rgb| Self(rgb.to_hex()))
            .ok_or_else(|| ThemeError::InvalidColor(raw.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derived HSL components.
    #[must_use]
    pub fn to_hsl(&self) -> Hsl {
        hex_to_hsl(&self.0)
    }
}

impl Default for AccentColor {
    fn default() -> Self {
        Self(DEFAULT_ACCENT.to_owned())
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccentColor {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AccentColor {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AccentColor> for String {
    fn from(value: AccentColor) -> Self {
        value.0
    }
}

// =============================================================================
// HEX DRAFT
// =============================================================================

/// Transient state of the free-form hex text field.
///
/// `text` is what the field shows and may be incomplete; `color` is set only
/// when `text` resolves to a full color that may be committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HexDraft {
    pub text: String,
    pub color: Option<AccentColor>,
}

impl HexDraft {
    /// Normalize raw field input.
    ///
    /// Leading/trailing whitespace is dropped, a missing `#` is added to
    /// non-empty input, and `#rgb` shorthand resolves to `#rrggbb`.
    #[must_use]
    pub fn from_input(raw: &str) -> Self {
        let trimmed = raw.trim();
        let text = if trimmed.is_empty() || trimmed.starts_with('#') {
            trimmed.to_owned()
        } else {
            format!("#{trimmed}")
        };
        let candidate = expand_shorthand(&text).unwrap_or_else(|| text.clone());
        let color = parse_hex_rgb(&candidate).map(|rgb| AccentColor(rgb.to_hex()));
        Self { text, color }
    }
}

fn expand_shorthand(text: &str) -> Option<String> {
    let digits = text.strip_prefix('#')?;
    if digits.len() != 3 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    Some(digits.chars().fold(String::from("#"), |mut out, c| {
        out.push(c);
        out.push(c);
        out
    }))
}
