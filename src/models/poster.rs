//! Poster layout configuration as shown by the wizard.
//!
//! These types carry no behavior beyond simple accessors: every value is
//! decided by the external layout engine and pushed in through the wizard
//! controller's `apply_*` setters.

use serde::{Deserialize, Serialize};

/// Paper orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Orientation {
    /// Taller than wide
    #[default]
    Portrait,
    /// Wider than tall
    Landscape,
}

/// Strategy for specifying the final poster dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum PosterSizeMode {
    /// Width and height in the current unit of length
    #[default]
    Absolute,
    /// Width and height counted in output pages
    Pages,
    /// Scale relative to the original image size
    Percentual,
}

impl PosterSizeMode {
    /// All modes in display order.
    pub const ALL: [Self; 3] = [Self::Absolute, Self::Pages, Self::Percentual];
}

/// Corner where the overlapping margin of each tile is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OverlapPosition {
    /// Top left corner
    TopLeft,
    /// Top right corner
    TopRight,
    /// Bottom left corner
    BottomLeft,
    /// Bottom right corner
    #[default]
    BottomRight,
}

impl OverlapPosition {
    /// All corners in button order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];
}

/// Placement of the image on the poster, as a cell of a 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PosterAlignment {
    /// Top row, left column
    TopLeft,
    /// Top row, center column
    Top,
    /// Top row, right column
    TopRight,
    /// Middle row, left column
    Left,
    /// Middle of the poster
    #[default]
    Center,
    /// Middle row, right column
    Right,
    /// Bottom row, left column
    BottomLeft,
    /// Bottom row, center column
    Bottom,
    /// Bottom row, right column
    BottomRight,
}

impl PosterAlignment {
    /// All cells in row-major order.
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::Top,
        Self::TopRight,
        Self::Left,
        Self::Center,
        Self::Right,
        Self::BottomLeft,
        Self::Bottom,
        Self::BottomRight,
    ];
}

/// One edge of the printable paper area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BorderSide {
    /// Top edge
    Top,
    /// Right edge
    Right,
    /// Bottom edge
    Bottom,
    /// Left edge
    Left,
}

impl BorderSide {
    /// All sides, clockwise from the top.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];
}

/// Non-printable paper borders in the current unit of length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Borders {
    /// Top border
    pub top: f64,
    /// Right border
    pub right: f64,
    /// Bottom border
    pub bottom: f64,
    /// Left border
    pub left: f64,
}

impl Borders {
    /// Same distance on every side.
    #[must_use]
    pub const fn uniform(distance: f64) -> Self {
        Self {
            top: distance,
            right: distance,
            bottom: distance,
            left: distance,
        }
    }

    /// Border distance for a side.
    #[must_use]
    pub const fn get(&self, side: BorderSide) -> f64 {
        match side {
            BorderSide::Top => self.top,
            BorderSide::Right => self.right,
            BorderSide::Bottom => self.bottom,
            BorderSide::Left => self.left,
        }
    }

    /// Sets the border distance for a side.
    pub fn set(&mut self, side: BorderSide, distance: f64) {
        match side {
            BorderSide::Top => self.top = distance,
            BorderSide::Right => self.right = distance,
            BorderSide::Bottom => self.bottom = distance,
            BorderSide::Left => self.left = distance,
        }
    }
}

impl Default for Borders {
    fn default() -> Self {
        Self::uniform(1.5)
    }
}

/// A width x height pair of real numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SizeF {
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl SizeF {
    /// Creates a size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Complete poster layout state displayed by the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosterConfiguration {
    /// Key into the paper format table
    pub paper_format: String,
    /// Whether the custom paper size is used instead of `paper_format`
    pub use_custom_paper_size: bool,
    /// Paper orientation
    pub orientation: Orientation,
    /// Paper borders
    pub borders: Borders,
    /// Custom paper size, only meaningful with `use_custom_paper_size`
    pub custom_paper_size: SizeF,
    /// Active poster size mode
    pub poster_size_mode: PosterSizeMode,
    /// Poster size in the current unit of length
    pub poster_size_absolute: SizeF,
    /// Poster size in pages
    pub poster_size_pages: SizeF,
    /// Poster size in percent of the image size
    pub poster_size_percentual: f64,
    /// Overlapping margin between tiles
    pub overlapping_size: SizeF,
    /// Corner the overlapping margin is placed at
    pub overlapping_position: OverlapPosition,
    /// Image placement on the poster
    pub poster_alignment: PosterAlignment,
    /// Unit of length label, e.g. "cm"
    pub unit_of_length: String,
    /// Open the saved PDF afterwards
    pub launch_pdf_application: bool,
    /// Index of the visible wizard step
    pub wizard_step: usize,
}

impl Default for PosterConfiguration {
    fn default() -> Self {
        Self {
            paper_format: "DIN A4".to_string(),
            use_custom_paper_size: false,
            orientation: Orientation::Portrait,
            borders: Borders::default(),
            custom_paper_size: SizeF::new(21.0, 29.7),
            poster_size_mode: PosterSizeMode::Absolute,
            poster_size_absolute: SizeF::default(),
            poster_size_pages: SizeF::new(1.0, 1.0),
            poster_size_percentual: 100.0,
            overlapping_size: SizeF::new(1.0, 1.0),
            overlapping_position: OverlapPosition::BottomRight,
            poster_alignment: PosterAlignment::Center,
            unit_of_length: "cm".to_string(),
            launch_pdf_application: true,
            wizard_step: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = PosterConfiguration::default();
        assert_eq!(config.paper_format, "DIN A4");
        assert_eq!(config.orientation, Orientation::Portrait);
        assert_eq!(config.poster_size_mode, PosterSizeMode::Absolute);
        assert_eq!(config.overlapping_position, OverlapPosition::BottomRight);
        assert_eq!(config.poster_alignment, PosterAlignment::Center);
        assert_eq!(config.unit_of_length, "cm");
        assert_eq!(config.wizard_step, 0);
        assert!(config.launch_pdf_application);
    }

    #[test]
    fn test_borders_by_side() {
        let mut borders = Borders::uniform(0.0);
        borders.set(BorderSide::Left, 2.5);
        borders.set(BorderSide::Top, 1.0);
        assert!((borders.get(BorderSide::Left) - 2.5).abs() < f64::EPSILON);
        assert!((borders.get(BorderSide::Top) - 1.0).abs() < f64::EPSILON);
        assert!(borders.get(BorderSide::Right).abs() < f64::EPSILON);
    }

    #[test]
    fn test_alignment_grid_is_complete() {
        assert_eq!(PosterAlignment::ALL.len(), 9);
        assert_eq!(PosterAlignment::ALL[4], PosterAlignment::Center);
        assert_eq!(OverlapPosition::ALL.len(), 4);
    }

    #[test]
    fn test_configuration_json_roundtrip() {
        let mut config = PosterConfiguration::default();
        config.poster_size_mode = PosterSizeMode::Pages;
        config.poster_alignment = PosterAlignment::BottomLeft;
        let json = serde_json::to_string(&config).unwrap();
        let parsed: PosterConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
