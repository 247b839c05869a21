//! Input image metadata and its human-readable rendering.

use serde::{Deserialize, Serialize};

use super::SizeF;

/// Color model of the loaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorType {
    /// One bit per pixel
    Monochrome,
    /// Gray levels only
    Grayscale,
    /// Indexed colors
    Palette,
    /// Red, green, blue
    Rgb,
    /// Red, green, blue with alpha
    Rgba,
    /// Cyan, magenta, yellow, key
    Cmyk,
}

impl ColorType {
    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Monochrome => "Monochrome",
            Self::Grayscale => "Gray scale",
            Self::Palette => "Palette",
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
            Self::Cmyk => "CMYK",
        }
    }
}

/// Metadata reported by the image loader.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Width in pixels
    pub width_px: u32,
    /// Height in pixels
    pub height_px: u32,
    /// Physical size in the current unit of length
    pub physical_size: SizeF,
    /// Vertical resolution in dots per inch
    pub vertical_dpi: f64,
    /// Horizontal resolution in dots per inch (not displayed)
    pub horizontal_dpi: f64,
    /// Color model
    pub color_type: ColorType,
    /// Bits per pixel
    pub bits_per_pixel: u32,
}

/// Display strings for the image information panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageInfoText {
    /// e.g. "1200 x 1800"
    pub size_in_pixels: String,
    /// e.g. "20.00 x 30.00"
    pub physical_size: String,
    /// e.g. "152.4 dpi"
    pub resolution: String,
    /// e.g. "RGBA 32bpp"
    pub color_type: String,
}

impl From<&ImageInfo> for ImageInfoText {
    fn from(info: &ImageInfo) -> Self {
        Self {
            size_in_pixels: format!("{} x {}", info.width_px, info.height_px),
            physical_size: format!(
                "{:.2} x {:.2}",
                info.physical_size.width, info.physical_size.height
            ),
            resolution: format!("{:.1} dpi", info.vertical_dpi),
            color_type: format!("{} {}bpp", info.color_type.label(), info.bits_per_pixel),
        }
    }
}
