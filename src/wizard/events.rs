//! Inbound user actions and outbound change requests.
//!
//! A [`UserAction`] names the control that was operated, together with its
//! stable identifier (corner, grid cell, size mode, border side). The
//! controller answers with at most one [`WizardEvent`] for the external
//! layout engine. Events are requests: nothing changes until the engine
//! calls back into the controller's `apply_*` setters.

use serde::Serialize;

use crate::models::{BorderSide, Orientation, OverlapPosition, PosterAlignment, PosterSizeMode};

/// Interactions the UI layer reports to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    /// "Next" button clicked
    NextClicked,
    /// "Back" button clicked
    PrevClicked,
    /// Step help button clicked
    HelpClicked,
    /// "Load image" button clicked
    LoadImageClicked,
    /// "Save poster" button clicked
    SaveClicked,
    /// Paper format tab switched (0 = standard, 1 = custom)
    PaperFormatTabChanged(usize),
    /// Format chosen in the format selector
    PaperFormatActivated(String),
    /// Orientation radio button clicked
    OrientationSelected(Orientation),
    /// Custom paper width edited
    PaperCustomWidthEdited(f64),
    /// Custom paper height edited
    PaperCustomHeightEdited(f64),
    /// One of the four border inputs edited
    PaperBorderEdited(BorderSide, f64),
    /// Overlapping width edited
    OverlappingWidthEdited(f64),
    /// Overlapping height edited
    OverlappingHeightEdited(f64),
    /// One of the four overlap corner buttons clicked
    OverlappingPositionClicked(OverlapPosition),
    /// One of the three size mode radio buttons clicked
    PosterSizeModeClicked(PosterSizeMode),
    /// Absolute width edited
    PosterWidthAbsoluteEdited(f64),
    /// Absolute height edited
    PosterHeightAbsoluteEdited(f64),
    /// Width in pages edited
    PosterWidthPagesEdited(f64),
    /// Height in pages edited
    PosterHeightPagesEdited(f64),
    /// Percentual size edited
    PosterSizePercentualEdited(f64),
    /// One of the nine alignment buttons clicked
    PosterAlignmentClicked(PosterAlignment),
    /// "Open PDF after saving" toggled
    LaunchPdfToggled(bool),
}

/// Requests and notifications sent to the external engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum WizardEvent {
    /// Go to the next step
    NextRequested,
    /// Go to the previous step
    PrevRequested,
    /// Show help for the current step
    HelpRequested,
    /// Open an input image
    LoadImageRequested,
    /// Save the poster
    SaveRequested,
    /// Image metadata was displayed
    ImageLoaded,
    /// New paper format key
    PaperFormatChanged(String),
    /// Switch between standard and custom paper size
    UseCustomPaperSizeChanged(bool),
    /// New paper orientation
    PaperOrientationChanged(Orientation),
    /// New custom paper width
    PaperCustomWidthChanged(f64),
    /// New custom paper height
    PaperCustomHeightChanged(f64),
    /// New border distance for one side
    PaperBorderChanged(BorderSide, f64),
    /// New overlapping width
    OverlappingWidthChanged(f64),
    /// New overlapping height
    OverlappingHeightChanged(f64),
    /// New overlap corner
    OverlappingPositionChanged(OverlapPosition),
    /// New absolute poster width
    PosterWidthAbsoluteChanged(f64),
    /// New absolute poster height
    PosterHeightAbsoluteChanged(f64),
    /// New poster width in pages
    PosterWidthPagesChanged(f64),
    /// New poster height in pages
    PosterHeightPagesChanged(f64),
    /// New poster size in percent
    PosterSizePercentualChanged(f64),
    /// New size mode
    PosterSizeModeChanged(PosterSizeMode),
    /// New image alignment
    PosterAlignmentChanged(PosterAlignment),
    /// New "open PDF after saving" flag
    LaunchPdfApplicationChanged(bool),
}
