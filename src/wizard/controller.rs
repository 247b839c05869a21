//! Poster configuration controller.
//!
//! The controller owns the displayed [`PosterConfiguration`] and keeps the
//! request and apply directions apart:
//!
//! - [`PosterConfigController::handle_action`] takes `&self` and only turns a
//!   user action into a [`WizardEvent`] for the external engine.
//! - The `apply_*` setters take `&mut self`, are called by the engine once it
//!   has validated and recomputed dependent values, and never raise an event.
//!
//! The configuration therefore only ever holds engine-approved values.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, trace};

use crate::models::{
    BorderSide, ImageInfo, ImageInfoText, Orientation, OverlapPosition, PaperFormats,
    PosterAlignment, PosterConfiguration, PosterSizeMode, SizeF,
};

use super::events::{UserAction, WizardEvent};
use super::steps::WizardStep;

/// Tab index of the custom paper size page.
const CUSTOM_PAPER_TAB: usize = 1;

/// Enable and visibility flags of a group of controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlState {
    /// Controls accept input
    pub enabled: bool,
    /// Controls are shown
    pub visible: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            enabled: true,
            visible: true,
        }
    }
}

/// A modal help box waiting to be shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpDialog {
    /// Window title
    pub title: String,
    /// Rich text body
    pub text: String,
}

/// Display state of the poster wizard.
#[derive(Debug, Clone)]
pub struct PosterConfigController {
    config: PosterConfiguration,
    mode_available: BTreeMap<PosterSizeMode, bool>,
    size_mode_controls: BTreeMap<PosterSizeMode, ControlState>,
    paper_formats: Vec<String>,
    prev_enabled: bool,
    next_enabled: bool,
    saving_enabled: bool,
    step_number: String,
    step_description: String,
    preview_state: String,
    image_file_name: Option<String>,
    image_info: Option<ImageInfoText>,
    help_dialog: Option<HelpDialog>,
}

impl PosterConfigController {
    /// Creates the controller at wizard start.
    #[must_use]
    pub fn new(config: PosterConfiguration, formats: &PaperFormats) -> Self {
        let mut controller = Self {
            config,
            mode_available: PosterSizeMode::ALL.iter().map(|m| (*m, true)).collect(),
            size_mode_controls: PosterSizeMode::ALL
                .iter()
                .map(|m| (*m, ControlState::default()))
                .collect(),
            paper_formats: formats
                .names_sorted()
                .into_iter()
                .map(str::to_string)
                .collect(),
            prev_enabled: true,
            next_enabled: true,
            saving_enabled: true,
            step_number: String::new(),
            step_description: String::new(),
            preview_state: String::new(),
            image_file_name: None,
            image_info: None,
            help_dialog: None,
        };
        controller.update_poster_size_groups_state();
        controller
    }

    // ------------------------------------------------------------------
    // Request side
    // ------------------------------------------------------------------

    /// Translates a user action into a change request.
    ///
    /// Returns `None` when the operated control is not actionable: a
    /// disabled navigation or save button, an unavailable size mode, or a
    /// size input of an inactive mode.
    #[must_use]
    pub fn handle_action(&self, action: UserAction) -> Option<WizardEvent> {
        let event = match action {
            UserAction::NextClicked => self.next_enabled.then_some(WizardEvent::NextRequested),
            UserAction::PrevClicked => self.prev_enabled.then_some(WizardEvent::PrevRequested),
            UserAction::HelpClicked => Some(WizardEvent::HelpRequested),
            UserAction::LoadImageClicked => Some(WizardEvent::LoadImageRequested),
            UserAction::SaveClicked => self.saving_enabled.then_some(WizardEvent::SaveRequested),
            UserAction::PaperFormatTabChanged(index) => Some(
                WizardEvent::UseCustomPaperSizeChanged(index == CUSTOM_PAPER_TAB),
            ),
            UserAction::PaperFormatActivated(format) => {
                Some(WizardEvent::PaperFormatChanged(format))
            }
            UserAction::OrientationSelected(orientation) => {
                Some(WizardEvent::PaperOrientationChanged(orientation))
            }
            UserAction::PaperCustomWidthEdited(width) => {
                Some(WizardEvent::PaperCustomWidthChanged(width))
            }
            UserAction::PaperCustomHeightEdited(height) => {
                Some(WizardEvent::PaperCustomHeightChanged(height))
            }
            UserAction::PaperBorderEdited(side, value) => {
                Some(WizardEvent::PaperBorderChanged(side, value))
            }
            UserAction::OverlappingWidthEdited(width) => {
                Some(WizardEvent::OverlappingWidthChanged(width))
            }
            UserAction::OverlappingHeightEdited(height) => {
                Some(WizardEvent::OverlappingHeightChanged(height))
            }
            UserAction::OverlappingPositionClicked(position) => {
                Some(WizardEvent::OverlappingPositionChanged(position))
            }
            UserAction::PosterSizeModeClicked(mode) => self
                .is_poster_size_mode_available(mode)
                .then_some(WizardEvent::PosterSizeModeChanged(mode)),
            UserAction::PosterWidthAbsoluteEdited(width) => self
                .size_input_editable(PosterSizeMode::Absolute)
                .then_some(WizardEvent::PosterWidthAbsoluteChanged(width)),
            UserAction::PosterHeightAbsoluteEdited(height) => self
                .size_input_editable(PosterSizeMode::Absolute)
                .then_some(WizardEvent::PosterHeightAbsoluteChanged(height)),
            UserAction::PosterWidthPagesEdited(width) => self
                .size_input_editable(PosterSizeMode::Pages)
                .then_some(WizardEvent::PosterWidthPagesChanged(width)),
            UserAction::PosterHeightPagesEdited(height) => self
                .size_input_editable(PosterSizeMode::Pages)
                .then_some(WizardEvent::PosterHeightPagesChanged(height)),
            UserAction::PosterSizePercentualEdited(percent) => self
                .size_input_editable(PosterSizeMode::Percentual)
                .then_some(WizardEvent::PosterSizePercentualChanged(percent)),
            UserAction::PosterAlignmentClicked(alignment) => {
                Some(WizardEvent::PosterAlignmentChanged(alignment))
            }
            UserAction::LaunchPdfToggled(launch) => {
                Some(WizardEvent::LaunchPdfApplicationChanged(launch))
            }
        };

        match &event {
            Some(event) => trace!(?event, "Raising change request"),
            None => debug!("Ignoring action on inactive control"),
        }
        event
    }

    fn size_input_editable(&self, mode: PosterSizeMode) -> bool {
        self.size_mode_controls
            .get(&mode)
            .is_some_and(|state| state.enabled && state.visible)
    }

    // ------------------------------------------------------------------
    // Apply side
    // ------------------------------------------------------------------

    /// Shows a paper format. Unknown keys are stored as-is.
    pub fn apply_paper_format(&mut self, format: &str) {
        self.config.paper_format = format.to_string();
    }

    /// Switches between the standard and custom paper size tabs.
    pub fn apply_use_custom_paper_size(&mut self, use_it: bool) {
        self.config.use_custom_paper_size = use_it;
    }

    /// Shows the paper orientation.
    pub fn apply_paper_orientation(&mut self, orientation: Orientation) {
        self.config.orientation = orientation;
    }

    /// Shows one border distance.
    pub fn apply_paper_border(&mut self, side: BorderSide, distance: f64) {
        self.config.borders.set(side, distance);
    }

    /// Shows the top border distance.
    pub fn apply_paper_border_top(&mut self, distance: f64) {
        self.apply_paper_border(BorderSide::Top, distance);
    }

    /// Shows the right border distance.
    pub fn apply_paper_border_right(&mut self, distance: f64) {
        self.apply_paper_border(BorderSide::Right, distance);
    }

    /// Shows the bottom border distance.
    pub fn apply_paper_border_bottom(&mut self, distance: f64) {
        self.apply_paper_border(BorderSide::Bottom, distance);
    }

    /// Shows the left border distance.
    pub fn apply_paper_border_left(&mut self, distance: f64) {
        self.apply_paper_border(BorderSide::Left, distance);
    }

    /// Shows the custom paper size.
    pub fn apply_custom_paper_size(&mut self, size: SizeF) {
        self.config.custom_paper_size = size;
    }

    /// Shows the overlapping width.
    pub fn apply_overlapping_width(&mut self, width: f64) {
        self.config.overlapping_size.width = width;
    }

    /// Shows the overlapping height.
    pub fn apply_overlapping_height(&mut self, height: f64) {
        self.config.overlapping_size.height = height;
    }

    /// Checks the overlap corner button.
    pub fn apply_overlapping_position(&mut self, position: OverlapPosition) {
        self.config.overlapping_position = position;
    }

    /// Shows the absolute poster width.
    pub fn apply_poster_width_absolute(&mut self, width: f64) {
        self.config.poster_size_absolute.width = width;
    }

    /// Shows the absolute poster height.
    pub fn apply_poster_height_absolute(&mut self, height: f64) {
        self.config.poster_size_absolute.height = height;
    }

    /// Shows the poster width in pages.
    pub fn apply_poster_width_pages(&mut self, width: f64) {
        self.config.poster_size_pages.width = width;
    }

    /// Shows the poster height in pages.
    pub fn apply_poster_height_pages(&mut self, height: f64) {
        self.config.poster_size_pages.height = height;
    }

    /// Shows the poster size in percent.
    pub fn apply_poster_size_percentual(&mut self, percent: f64) {
        self.config.poster_size_percentual = percent;
    }

    /// Activates a size mode, deactivating the other two.
    pub fn apply_poster_size_mode(&mut self, mode: PosterSizeMode) {
        self.config.poster_size_mode = mode;
        self.update_poster_size_groups_state();
    }

    /// Shows or hides every control of a size mode.
    ///
    /// The active mode is left untouched even when it becomes unavailable.
    pub fn apply_poster_size_mode_available(&mut self, mode: PosterSizeMode, available: bool) {
        self.mode_available.insert(mode, available);
        self.size_mode_controls.entry(mode).or_default().visible = available;
        if !available && mode == self.config.poster_size_mode {
            debug!(?mode, "Active poster size mode marked unavailable");
        }
    }

    /// Enables the inputs of the active size mode and disables the others.
    ///
    /// Only the enabled flags change, so repeated calls are harmless.
    pub fn update_poster_size_groups_state(&mut self) {
        let active = self.config.poster_size_mode;
        for (mode, state) in &mut self.size_mode_controls {
            state.enabled = *mode == active;
        }
    }

    /// Checks the alignment button.
    pub fn apply_poster_alignment(&mut self, alignment: PosterAlignment) {
        self.config.poster_alignment = alignment;
    }

    /// Checks or clears "Open PDF after saving".
    pub fn apply_launch_pdf_application(&mut self, launch: bool) {
        self.config.launch_pdf_application = launch;
    }

    /// Updates the unit of length and every label that shows it.
    pub fn apply_unit_of_length(&mut self, unit: &str) {
        self.config.unit_of_length = unit.to_string();
    }

    /// Selects the visible step. Any index is accepted.
    pub fn apply_wizard_step(&mut self, step: usize) {
        self.config.wizard_step = step;
    }

    /// Shows the step number and description.
    pub fn apply_wizard_step_description(&mut self, number: &str, description: &str) {
        self.step_number = number.to_string();
        self.step_description = description.to_string();
    }

    /// Enables or disables the "Back" button.
    pub fn apply_prev_button_enabled(&mut self, enabled: bool) {
        self.prev_enabled = enabled;
    }

    /// Enables or disables the "Next" button.
    pub fn apply_next_button_enabled(&mut self, enabled: bool) {
        self.next_enabled = enabled;
    }

    /// Enables or disables the "Save poster" button.
    pub fn apply_poster_saving_enabled(&mut self, enabled: bool) {
        self.saving_enabled = enabled;
    }

    /// Sets the preview canvas state. The poster preview always shows overlaps.
    pub fn apply_preview_state(&mut self, state: &str) {
        self.preview_state = if state == "poster" {
            "poster overlapped".to_string()
        } else {
            state.to_string()
        };
    }

    /// Shows the file name component of the loaded image path.
    pub fn apply_image_file_name(&mut self, path: &str) {
        let name = Path::new(path)
            .file_name()
            .map_or_else(|| path.to_string(), |n| n.to_string_lossy().into_owned());
        self.image_file_name = Some(name);
    }

    /// Shows the image information panel.
    ///
    /// The panel becomes visible and the engine is told an image is loaded.
    #[must_use = "the ImageLoaded notification must be forwarded to the engine"]
    pub fn apply_image_info(&mut self, info: &ImageInfo) -> WizardEvent {
        self.image_info = Some(ImageInfoText::from(info));
        WizardEvent::ImageLoaded
    }

    /// Queues a modal help box. Showing it cannot fail.
    pub fn show_wizard_step_help(&mut self, title: &str, text: &str) {
        self.help_dialog = Some(HelpDialog {
            title: title.to_string(),
            text: text.to_string(),
        });
    }

    /// Takes the pending help box for display.
    pub fn take_help_dialog(&mut self) -> Option<HelpDialog> {
        self.help_dialog.take()
    }

    // ------------------------------------------------------------------
    // Display accessors
    // ------------------------------------------------------------------

    /// The displayed configuration.
    #[must_use]
    pub const fn configuration(&self) -> &PosterConfiguration {
        &self.config
    }

    /// The active size mode.
    #[must_use]
    pub const fn poster_size_mode(&self) -> PosterSizeMode {
        self.config.poster_size_mode
    }

    /// Whether a size mode can be selected.
    #[must_use]
    pub fn is_poster_size_mode_available(&self, mode: PosterSizeMode) -> bool {
        self.mode_available.get(&mode).copied().unwrap_or(true)
    }

    /// Enable and visibility flags of a size mode's controls.
    #[must_use]
    pub fn size_mode_controls(&self, mode: PosterSizeMode) -> ControlState {
        self.size_mode_controls
            .get(&mode)
            .copied()
            .unwrap_or_default()
    }

    /// Format names in alphabetical order, as listed in the format selector.
    #[must_use]
    pub fn paper_format_choices(&self) -> &[String] {
        &self.paper_formats
    }

    /// Position of the displayed format in the selector, `None` if unknown.
    #[must_use]
    pub fn paper_format_index(&self) -> Option<usize> {
        self.paper_formats
            .iter()
            .position(|f| *f == self.config.paper_format)
    }

    /// The step currently shown, `None` for an index past the last step.
    #[must_use]
    pub fn current_step(&self) -> Option<WizardStep> {
        WizardStep::from_index(self.config.wizard_step)
    }

    /// Title of the paper borders group, e.g. "Borders (cm)".
    #[must_use]
    pub fn borders_title(&self) -> String {
        format!("Borders ({})", self.config.unit_of_length)
    }

    /// Label of the physical image size row, e.g. "Size (in cm):".
    #[must_use]
    pub fn image_size_label(&self) -> String {
        format!("Size (in {}):", self.config.unit_of_length)
    }

    /// Unit label shown next to absolute, overlapping and custom size inputs.
    #[must_use]
    pub fn dimension_unit_label(&self) -> &str {
        &self.config.unit_of_length
    }

    /// Whether the "Back" button is enabled.
    #[must_use]
    pub const fn prev_button_enabled(&self) -> bool {
        self.prev_enabled
    }

    /// Whether the "Next" button is enabled.
    #[must_use]
    pub const fn next_button_enabled(&self) -> bool {
        self.next_enabled
    }

    /// Whether the "Save poster" button is enabled.
    #[must_use]
    pub const fn poster_saving_enabled(&self) -> bool {
        self.saving_enabled
    }

    /// Step number and description.
    #[must_use]
    pub fn step_description(&self) -> (&str, &str) {
        (&self.step_number, &self.step_description)
    }

    /// Preview canvas state.
    #[must_use]
    pub fn preview_state(&self) -> &str {
        &self.preview_state
    }

    /// Displayed image file name.
    #[must_use]
    pub fn image_file_name(&self) -> Option<&str> {
        self.image_file_name.as_deref()
    }

    /// Image information text, `None` while the panel is hidden.
    #[must_use]
    pub const fn image_info(&self) -> Option<&ImageInfoText> {
        self.image_info.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorType;

    fn controller() -> PosterConfigController {
        PosterConfigController::new(PosterConfiguration::default(), &PaperFormats::default())
    }

    fn enabled_modes(controller: &PosterConfigController) -> Vec<PosterSizeMode> {
        PosterSizeMode::ALL
            .into_iter()
            .filter(|m| controller.size_mode_controls(*m).enabled)
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let controller = controller();
        assert_eq!(controller.poster_size_mode(), PosterSizeMode::Absolute);
        assert_eq!(enabled_modes(&controller), vec![PosterSizeMode::Absolute]);
        assert_eq!(controller.current_step(), Some(WizardStep::InputImage));
        assert!(controller.image_info().is_none());
        assert_eq!(controller.paper_format_index(), Some(4)); // DIN A4
    }

    #[test]
    fn test_exactly_one_mode_enabled() {
        let mut controller = controller();
        let sequence = [
            PosterSizeMode::Pages,
            PosterSizeMode::Pages,
            PosterSizeMode::Percentual,
            PosterSizeMode::Absolute,
            PosterSizeMode::Percentual,
        ];
        for mode in sequence {
            controller.apply_poster_size_mode(mode);
            assert_eq!(controller.poster_size_mode(), mode);
            assert_eq!(enabled_modes(&controller), vec![mode]);
        }
    }

    #[test]
    fn test_pages_then_percent() {
        let mut controller = controller();
        controller.apply_poster_size_mode(PosterSizeMode::Pages);
        controller.apply_poster_size_mode(PosterSizeMode::Percentual);
        assert!(!controller.size_mode_controls(PosterSizeMode::Pages).enabled);
        assert!(controller.size_mode_controls(PosterSizeMode::Percentual).enabled);
        assert!(!controller.size_mode_controls(PosterSizeMode::Absolute).enabled);
    }

    #[test]
    fn test_update_groups_state_is_idempotent() {
        let mut controller = controller();
        controller.apply_poster_size_mode(PosterSizeMode::Pages);
        let before: Vec<_> = PosterSizeMode::ALL
            .into_iter()
            .map(|m| controller.size_mode_controls(m))
            .collect();
        controller.update_poster_size_groups_state();
        controller.update_poster_size_groups_state();
        let after: Vec<_> = PosterSizeMode::ALL
            .into_iter()
            .map(|m| controller.size_mode_controls(m))
            .collect();
        assert_eq!(before, after);
        assert_eq!(controller.poster_size_mode(), PosterSizeMode::Pages);
    }

    #[test]
    fn test_unavailable_active_mode_stays_active() {
        let mut controller = controller();
        controller.apply_poster_size_mode(PosterSizeMode::Percentual);
        controller.apply_poster_size_mode_available(PosterSizeMode::Percentual, false);

        assert_eq!(controller.poster_size_mode(), PosterSizeMode::Percentual);
        assert!(!controller.is_poster_size_mode_available(PosterSizeMode::Percentual));
        assert!(!controller.size_mode_controls(PosterSizeMode::Percentual).visible);
        // Hidden inputs cannot be edited even though the mode is active
        assert_eq!(
            controller.handle_action(UserAction::PosterSizePercentualEdited(50.0)),
            None
        );
    }

    #[test]
    fn test_unavailable_mode_is_not_selectable() {
        let mut controller = controller();
        controller.apply_poster_size_mode_available(PosterSizeMode::Pages, false);
        assert_eq!(
            controller.handle_action(UserAction::PosterSizeModeClicked(PosterSizeMode::Pages)),
            None
        );
        controller.apply_poster_size_mode_available(PosterSizeMode::Pages, true);
        assert_eq!(
            controller.handle_action(UserAction::PosterSizeModeClicked(PosterSizeMode::Pages)),
            Some(WizardEvent::PosterSizeModeChanged(PosterSizeMode::Pages))
        );
    }

    #[test]
    fn test_requests_do_not_mutate() {
        let controller = controller();
        let before = controller.configuration().clone();

        let event = controller.handle_action(UserAction::PaperBorderEdited(BorderSide::Top, 3.0));
        assert_eq!(
            event,
            Some(WizardEvent::PaperBorderChanged(BorderSide::Top, 3.0))
        );
        let event = controller.handle_action(UserAction::PosterAlignmentClicked(
            PosterAlignment::BottomRight,
        ));
        assert_eq!(
            event,
            Some(WizardEvent::PosterAlignmentChanged(PosterAlignment::BottomRight))
        );

        assert_eq!(controller.configuration(), &before);
    }

    #[test]
    fn test_inactive_size_inputs_are_ignored() {
        let controller = controller();
        assert_eq!(
            controller.handle_action(UserAction::PosterWidthPagesEdited(3.0)),
            None
        );
        assert_eq!(
            controller.handle_action(UserAction::PosterWidthAbsoluteEdited(42.0)),
            Some(WizardEvent::PosterWidthAbsoluteChanged(42.0))
        );
    }

    #[test]
    fn test_paper_format_tab() {
        let controller = controller();
        assert_eq!(
            controller.handle_action(UserAction::PaperFormatTabChanged(1)),
            Some(WizardEvent::UseCustomPaperSizeChanged(true))
        );
        assert_eq!(
            controller.handle_action(UserAction::PaperFormatTabChanged(0)),
            Some(WizardEvent::UseCustomPaperSizeChanged(false))
        );
    }

    #[test]
    fn test_navigation_gating() {
        let mut controller = controller();
        controller.apply_prev_button_enabled(false);
        controller.apply_poster_saving_enabled(false);
        assert_eq!(controller.handle_action(UserAction::PrevClicked), None);
        assert_eq!(controller.handle_action(UserAction::SaveClicked), None);
        assert_eq!(
            controller.handle_action(UserAction::NextClicked),
            Some(WizardEvent::NextRequested)
        );
        assert_eq!(
            controller.handle_action(UserAction::HelpClicked),
            Some(WizardEvent::HelpRequested)
        );
    }

    #[test]
    fn test_setters_assign() {
        let mut controller = controller();
        controller.apply_paper_format("Letter");
        controller.apply_paper_orientation(Orientation::Landscape);
        controller.apply_paper_border_left(-2.0);
        controller.apply_custom_paper_size(SizeF::new(50.0, 70.0));
        controller.apply_overlapping_position(OverlapPosition::TopLeft);
        controller.apply_overlapping_width(0.5);
        controller.apply_poster_size_percentual(250.0);
        controller.apply_launch_pdf_application(false);

        let config = controller.configuration();
        assert_eq!(config.paper_format, "Letter");
        assert_eq!(config.orientation, Orientation::Landscape);
        // No range checks at this layer
        assert!((config.borders.left + 2.0).abs() < f64::EPSILON);
        assert_eq!(config.custom_paper_size, SizeF::new(50.0, 70.0));
        assert_eq!(config.overlapping_position, OverlapPosition::TopLeft);
        assert!((config.overlapping_size.width - 0.5).abs() < f64::EPSILON);
        assert!((config.poster_size_percentual - 250.0).abs() < f64::EPSILON);
        assert!(!config.launch_pdf_application);
    }

    #[test]
    fn test_unknown_paper_format_is_shown_unselected() {
        let mut controller = controller();
        controller.apply_paper_format("Napkin");
        assert_eq!(controller.configuration().paper_format, "Napkin");
        assert_eq!(controller.paper_format_index(), None);
    }

    #[test]
    fn test_unit_of_length_labels() {
        let mut controller = controller();
        controller.apply_unit_of_length("in");
        assert_eq!(controller.borders_title(), "Borders (in)");
        assert_eq!(controller.image_size_label(), "Size (in in):");
        assert_eq!(controller.dimension_unit_label(), "in");
    }

    #[test]
    fn test_wizard_step_out_of_range() {
        let mut controller = controller();
        controller.apply_wizard_step(3);
        assert_eq!(controller.current_step(), Some(WizardStep::PosterSize));
        controller.apply_wizard_step(17);
        assert_eq!(controller.configuration().wizard_step, 17);
        assert_eq!(controller.current_step(), None);
    }

    #[test]
    fn test_preview_state() {
        let mut controller = controller();
        controller.apply_preview_state("poster");
        assert_eq!(controller.preview_state(), "poster overlapped");
        controller.apply_preview_state("paper");
        assert_eq!(controller.preview_state(), "paper");
    }

    #[test]
    fn test_image_file_name_and_info() {
        let mut controller = controller();
        controller.apply_image_file_name("/home/user/pictures/holiday.png");
        assert_eq!(controller.image_file_name(), Some("holiday.png"));

        let info = ImageInfo {
            width_px: 1200,
            height_px: 1800,
            physical_size: SizeF::new(20.0, 30.0),
            vertical_dpi: 152.4,
            horizontal_dpi: 152.4,
            color_type: ColorType::Rgba,
            bits_per_pixel: 32,
        };
        assert_eq!(controller.apply_image_info(&info), WizardEvent::ImageLoaded);
        let text = controller.image_info().unwrap();
        assert_eq!(text.size_in_pixels, "1200 x 1800");
        assert_eq!(text.color_type, "RGBA 32bpp");
    }

    #[test]
    fn test_help_dialog() {
        let mut controller = controller();
        assert!(controller.take_help_dialog().is_none());
        controller.show_wizard_step_help("Paper Size", "Choose a <b>format</b>.");
        let dialog = controller.take_help_dialog().unwrap();
        assert_eq!(dialog.title, "Paper Size");
        assert!(controller.take_help_dialog().is_none());
    }
}
