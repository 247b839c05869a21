//! Wizard step identifiers.

use serde::Serialize;

/// Poster wizard steps, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WizardStep {
    /// Load the input image
    InputImage,
    /// Choose paper format, orientation and borders
    PaperSize,
    /// Choose overlapping size and corner
    Overlapping,
    /// Choose poster size and image alignment
    PosterSize,
    /// Save the poster as PDF
    SavePoster,
}

impl WizardStep {
    /// All steps in order.
    pub const ALL: [Self; 5] = [
        Self::InputImage,
        Self::PaperSize,
        Self::Overlapping,
        Self::PosterSize,
        Self::SavePoster,
    ];

    /// Step at a display index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Display index of the step.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::InputImage => 0,
            Self::PaperSize => 1,
            Self::Overlapping => 2,
            Self::PosterSize => 3,
            Self::SavePoster => 4,
        }
    }

    /// Gets the next step in the wizard
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::InputImage => Some(Self::PaperSize),
            Self::PaperSize => Some(Self::Overlapping),
            Self::Overlapping => Some(Self::PosterSize),
            Self::PosterSize => Some(Self::SavePoster),
            Self::SavePoster => None,
        }
    }

    /// Gets the previous step in the wizard
    #[must_use]
    pub const fn previous(&self) -> Option<Self> {
        match self {
            Self::InputImage => None,
            Self::PaperSize => Some(Self::InputImage),
            Self::Overlapping => Some(Self::PaperSize),
            Self::PosterSize => Some(Self::Overlapping),
            Self::SavePoster => Some(Self::PosterSize),
        }
    }

    /// Gets the step title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::InputImage => "Input Image",
            Self::PaperSize => "Paper Size",
            Self::Overlapping => "Image Tile Overlapping",
            Self::PosterSize => "Final Poster Size",
            Self::SavePoster => "Save the Poster",
        }
    }
}
