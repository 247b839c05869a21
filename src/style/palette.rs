//! Base and derived palettes for adaptive light/dark styling.
//!
//! The host environment supplies a [`BasePalette`]; [`derive_palette`] turns it
//! into the surface and border colors every widget category shares.

use serde::{Deserialize, Serialize};

use crate::config::ThemeMode;
use crate::models::RgbaColor;

/// Foundational colors of the current system appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BasePalette {
    /// Window background
    pub window: RgbaColor,
    /// Text entry and list surface
    pub base: RgbaColor,
    /// Push button face
    pub button: RgbaColor,
    /// Push button text
    pub button_text: RgbaColor,
    /// Selection and checked-state accent
    pub highlight: RgbaColor,
    /// Regular text on the window background
    pub window_text: RgbaColor,
}

impl BasePalette {
    /// Detects the OS appearance and returns the matching built-in palette.
    ///
    /// This uses the `dark-light` crate to detect whether the OS is in
    /// dark or light mode.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves a configured theme preference to a palette.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Built-in dark appearance.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            window: RgbaColor::rgb(0x1e, 0x1e, 0x1e),
            base: RgbaColor::rgb(0x25, 0x25, 0x25),
            button: RgbaColor::rgb(0x2d, 0x2d, 0x2d),
            button_text: RgbaColor::rgb(0xff, 0xff, 0xff),
            highlight: RgbaColor::rgb(0x3a, 0x7b, 0xd5),
            window_text: RgbaColor::rgb(0xe0, 0xe0, 0xe0),
        }
    }

    /// Built-in light appearance.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            window: RgbaColor::rgb(0xf5, 0xf5, 0xf5),
            base: RgbaColor::rgb(0xff, 0xff, 0xff),
            button: RgbaColor::rgb(0xff, 0xff, 0xff),
            button_text: RgbaColor::rgb(0x1d, 0x1d, 0x1f),
            highlight: RgbaColor::rgb(0x0a, 0x84, 0xff),
            window_text: RgbaColor::rgb(0x1d, 0x1d, 0x1f),
        }
    }
}

/// Surface colors computed from a [`BasePalette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DerivedPalette {
    /// Window lightness is below 128
    pub is_dark_mode: bool,
    /// Background of framed panels
    pub panel_background: RgbaColor,
    /// Background of grouped panels and their title notch
    pub group_panel_background: RgbaColor,
    /// Regular border
    pub border_color: RgbaColor,
    /// Border of grouped panels
    pub border_color_light: RgbaColor,
}

impl DerivedPalette {
    /// Constant set used for dark appearances.
    pub const DARK: Self = Self {
        is_dark_mode: true,
        panel_background: RgbaColor::rgba(30, 30, 30, 230),
        group_panel_background: RgbaColor::rgba(40, 40, 40, 200),
        border_color: RgbaColor::rgb(60, 60, 60),
        border_color_light: RgbaColor::rgb(70, 70, 70),
    };

    /// Constant set used for light appearances.
    pub const LIGHT: Self = Self {
        is_dark_mode: false,
        panel_background: RgbaColor::rgba(255, 255, 255, 240),
        group_panel_background: RgbaColor::rgba(250, 250, 250, 220),
        border_color: RgbaColor::rgb(220, 220, 220),
        border_color_light: RgbaColor::rgb(210, 210, 210),
    };
}

/// Derives the shared surface colors from a base palette.
///
/// Dark mode is chosen when the window color's HSL lightness (0-255) is
/// strictly below 128.
#[must_use]
pub fn derive_palette(base: &BasePalette) -> DerivedPalette {
    if base.window.is_dark() {
        DerivedPalette::DARK
    } else {
        DerivedPalette::LIGHT
    }
}
