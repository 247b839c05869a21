//! Data models for colors, paper formats, image metadata and poster layout.
//!
//! Models are independent of UI and business logic.

pub mod image_info;
pub mod paper_format;
pub mod poster;
pub mod rgb;

// Re-export all model types
pub use image_info::{ColorType, ImageInfo, ImageInfoText};
pub use paper_format::PaperFormats;
pub use poster::{
    BorderSide, Borders, Orientation, OverlapPosition, PosterAlignment, PosterConfiguration,
    PosterSizeMode, SizeF,
};
pub use rgb::RgbaColor;
