//! RGBA color handling with hex parsing, HSL math and serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Threshold on the 0-255 lightness scale below which a window color is dark.
pub const DARK_LIGHTNESS_THRESHOLD: u8 = 128;

/// RGBA color value with hex string representation.
///
/// Channels are 0-255. Alpha 255 is fully opaque. Serializes as `#rrggbb`
/// when opaque and as `#aarrggbb` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbaColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha channel (0-255)
    pub a: u8,
}

impl RgbaColor {
    /// Creates an opaque color from individual channel values.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with an explicit alpha channel.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the same color with a different alpha.
    #[must_use]
    pub const fn with_alpha(&self, a: u8) -> Self {
        Self { a, ..*self }
    }

    /// Whether the alpha channel is fully opaque.
    #[must_use]
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Parses a color from a hex string.
    ///
    /// Supports "#RRGGBB", "RRGGBB" and the alpha-prefixed "#AARRGGBB".
    ///
    /// # Examples
    ///
    /// ```
    /// use posterwizard::models::RgbaColor;
    ///
    /// let color = RgbaColor::from_hex("#1e1e1e").unwrap();
    /// assert_eq!(color, RgbaColor::rgb(30, 30, 30));
    ///
    /// let color = RgbaColor::from_hex("#e61e1e1e").unwrap();
    /// assert_eq!(color, RgbaColor::rgba(30, 30, 30, 230));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        let channel = |range: std::ops::Range<usize>, name: &str| -> Result<u8> {
            let digits = hex
                .get(range)
                .with_context(|| format!("Invalid {name} channel in hex color '{hex}'"))?;
            u8::from_str_radix(digits, 16)
                .with_context(|| format!("Invalid {name} channel in hex color '{hex}'"))
        };

        match hex.len() {
            6 => Ok(Self::rgb(
                channel(0..2, "red")?,
                channel(2..4, "green")?,
                channel(4..6, "blue")?,
            )),
            8 => Ok(Self::rgba(
                channel(2..4, "red")?,
                channel(4..6, "green")?,
                channel(6..8, "blue")?,
                channel(0..2, "alpha")?,
            )),
            _ => anyhow::bail!(
                "Invalid hex color format '{hex}'. Expected RRGGBB or AARRGGBB"
            ),
        }
    }

    /// Lower-case `#rrggbb` name. Alpha is dropped.
    #[must_use]
    pub fn name(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Lower-case `#aarrggbb` name.
    #[must_use]
    pub fn name_argb(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.a, self.r, self.g, self.b)
    }

    /// HSL lightness on the 0-255 scale: the mean of the largest and smallest
    /// channel, rounded half up.
    #[must_use]
    pub fn lightness(&self) -> u8 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        ((u16::from(max) + u16::from(min) + 1) / 2) as u8
    }

    /// Whether this color counts as a dark window background.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.lightness() < DARK_LIGHTNESS_THRESHOLD
    }

    /// Converts to HSL.
    ///
    /// # Returns
    ///
    /// A tuple `(h, s, l)`, each in 0.0-1.0. Hue is 0.0 for grays.
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard color model uses single-char names
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return (0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        (h / 6.0, s, l)
    }

    /// Creates an opaque color from HSL components (each clamped to 0.0-1.0).
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = h.clamp(0.0, 1.0);
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        if s == 0.0 {
            let v = to_channel(l);
            return Self::rgb(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Self::rgb(
            to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            to_channel(hue_to_rgb(p, q, h)),
            to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }

    /// Returns the color lightened by `percent`.
    ///
    /// The HSL lightness is multiplied by `(100 + percent) / 100` and clamped
    /// to 1.0. Hue, saturation and alpha are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use posterwizard::models::RgbaColor;
    ///
    /// let button = RgbaColor::rgb(45, 45, 45);
    /// assert_eq!(button.lighter(10), RgbaColor::rgb(50, 50, 50));
    /// ```
    #[must_use]
    pub fn lighter(&self, percent: u16) -> Self {
        self.scale_lightness(f64::from(100 + u32::from(percent)) / 100.0)
    }

    /// Returns the color darkened by `percent`.
    ///
    /// The HSL lightness is multiplied by `100 / (100 + percent)`.
    #[must_use]
    pub fn darker(&self, percent: u16) -> Self {
        self.scale_lightness(100.0 / f64::from(100 + u32::from(percent)))
    }

    fn scale_lightness(&self, factor: f64) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, (l * factor).min(1.0)).with_alpha(self.a)
    }
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

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for RgbaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "{}", self.name())
        } else {
            write!(f, "{}", self.name_argb())
        }
    }
}

impl From<RgbaColor> for String {
    fn from(color: RgbaColor) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for RgbaColor {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}
