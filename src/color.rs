//! RGB colors on a 0..=255 channel scale.
//!
//! Channels are kept as `f32` so that a blend computed from a non-finite time
//! value stays NaN instead of silently snapping to a valid color. Consumers can
//! test [`Rgb::is_valid`] and the SVG writer emits such colors as `transparent`.

use serde::Deserialize;
use std::fmt;

use crate::utils::interpolate_f32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// A color whose every channel is NaN.
    pub const INVALID: Rgb = Rgb::new(f32::NAN, f32::NAN, f32::NAN);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    ///
    /// # Examples
    /// ```
    /// use daydial::color::Rgb;
    /// assert_eq!(Rgb::from_hex("#ffe66d"), Some(Rgb::new(255.0, 230.0, 109.0)));
    /// assert_eq!(Rgb::from_hex("zzz"), None);
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r as f32, g as f32, b as f32))
    }

    /// True when every channel is a finite number.
    pub fn is_valid(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Linear blend towards `target`; `t` is clamped to [0, 1].
    ///
    /// A NaN `t` produces [`Rgb::INVALID`].
    pub fn lerp(&self, target: &Rgb, t: f32) -> Self {
        if t.is_nan() {
            return Self::INVALID;
        }
        Self {
            r: interpolate_f32(self.r, target.r, t),
            g: interpolate_f32(self.g, target.g, t),
            b: interpolate_f32(self.b, target.b, t),
        }
    }

    /// Channels rounded and clamped to bytes, or `None` for an invalid color.
    pub fn to_rgb8(&self) -> Option<(u8, u8, u8)> {
        if !self.is_valid() {
            return None;
        }
        let channel = |v: f32| v.round().clamp(0.0, 255.0) as u8;
        Some((channel(self.r), channel(self.g), channel(self.b)))
    }

    /// `#rrggbb`, or `transparent` for an invalid color.
    pub fn to_hex(&self) -> String {
        match self.to_rgb8() {
            Some((r, g, b)) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            None => "transparent".to_string(),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// The two endpoints of the day/night blend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub day: Rgb,
    pub night: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            day: crate::constants::DAY_COLOR,
            night: crate::constants::NIGHT_COLOR,
        }
    }
}

/// Hex color string as written in the config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct HexColor(pub String);

impl HexColor {
    pub fn parse(&self) -> Option<Rgb> {
        Rgb::from_hex(&self.0)
    }
}
