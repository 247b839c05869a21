//! Per-category style derivation.
//!
//! Every color in a descriptor comes from the [`BasePalette`], the
//! [`DerivedPalette`], or one of the fixed light/dark constant pairs below.

use crate::models::RgbaColor;

use super::descriptor::{GroupMetrics, Paint, RuleSet, StyleDescriptor, WidgetCategory};
use super::palette::{BasePalette, DerivedPalette};

/// A color that differs between dark and light appearances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModePair {
    /// Used when the window is dark
    pub dark: RgbaColor,
    /// Used when the window is light
    pub light: RgbaColor,
}

impl ModePair {
    const fn new(dark: RgbaColor, light: RgbaColor) -> Self {
        Self { dark, light }
    }

    /// Picks the color for a mode.
    #[must_use]
    pub const fn pick(&self, is_dark_mode: bool) -> RgbaColor {
        if is_dark_mode {
            self.dark
        } else {
            self.light
        }
    }
}

/// Light-mode button border. Dark mode uses the derived border color.
pub const BUTTON_BORDER_LIGHT: RgbaColor = RgbaColor::rgb(180, 180, 180);
/// Button border under the pointer.
pub const BUTTON_HOVER_BORDER: ModePair =
    ModePair::new(RgbaColor::rgb(80, 80, 80), RgbaColor::rgb(150, 150, 150));
/// Disabled button face.
pub const BUTTON_DISABLED_BACKGROUND: ModePair =
    ModePair::new(RgbaColor::rgb(40, 40, 40), RgbaColor::rgb(240, 240, 240));
/// Disabled button text.
pub const BUTTON_DISABLED_TEXT: ModePair =
    ModePair::new(RgbaColor::rgb(100, 100, 100), RgbaColor::rgb(180, 180, 180));
/// Disabled button border.
pub const BUTTON_DISABLED_BORDER: ModePair =
    ModePair::new(RgbaColor::rgb(50, 50, 50), RgbaColor::rgb(200, 200, 200));
/// Translucent tool button fill under the pointer.
pub const TOGGLE_HOVER_BACKGROUND: ModePair = ModePair::new(
    RgbaColor::rgba(60, 60, 60, 150),
    RgbaColor::rgba(220, 220, 220, 150),
);
/// Translucent tool button fill while pressed.
pub const TOGGLE_PRESSED_BACKGROUND: ModePair = ModePair::new(
    RgbaColor::rgba(80, 80, 80, 200),
    RgbaColor::rgba(200, 200, 200, 200),
);

/// Every fixed color a descriptor may contain besides the palettes.
pub const FIXED_COLORS: [RgbaColor; 13] = [
    BUTTON_BORDER_LIGHT,
    BUTTON_HOVER_BORDER.dark,
    BUTTON_HOVER_BORDER.light,
    BUTTON_DISABLED_BACKGROUND.dark,
    BUTTON_DISABLED_BACKGROUND.light,
    BUTTON_DISABLED_TEXT.dark,
    BUTTON_DISABLED_TEXT.light,
    BUTTON_DISABLED_BORDER.dark,
    BUTTON_DISABLED_BORDER.light,
    TOGGLE_HOVER_BACKGROUND.dark,
    TOGGLE_HOVER_BACKGROUND.light,
    TOGGLE_PRESSED_BACKGROUND.dark,
    TOGGLE_PRESSED_BACKGROUND.light,
];

const GROUP_TITLE_INSET: u16 = 12;

/// Derives the descriptor for a category.
///
/// `border_radius` is honoured by panels and labels; other categories use
/// their fixed radius. `None` selects the category default.
#[must_use]
pub fn style_for(
    category: WidgetCategory,
    base: &BasePalette,
    derived: &DerivedPalette,
    border_radius: Option<i32>,
) -> StyleDescriptor {
    match category {
        WidgetCategory::Button => button_style(base, derived),
        WidgetCategory::ToggleButton => toggle_button_style(base, derived),
        WidgetCategory::GroupedPanel => grouped_panel_style(base, derived),
        WidgetCategory::Panel => panel_style(
            derived,
            border_radius.unwrap_or_else(|| category.default_border_radius()),
        ),
        WidgetCategory::Label => label_style(
            base,
            derived,
            border_radius.unwrap_or_else(|| category.default_border_radius()),
        ),
        WidgetCategory::StepDescription => step_description_style(base, derived),
        WidgetCategory::StepStack => step_stack_style(),
    }
}

/// Push button style.
#[must_use]
pub fn button_style(base: &BasePalette, derived: &DerivedPalette) -> StyleDescriptor {
    let dark = derived.is_dark_mode;
    let (hover, pressed) = if dark {
        (base.button.lighter(10), base.button.darker(20))
    } else {
        (base.button.darker(5), base.button.lighter(10))
    };
    let border = if dark {
        derived.border_color
    } else {
        BUTTON_BORDER_LIGHT
    };

    StyleDescriptor {
        normal: RuleSet {
            background: Some(base.button.into()),
            text: Some(base.button_text.into()),
            border_color: Some(border.into()),
        },
        hover: RuleSet {
            background: Some(hover.into()),
            border_color: Some(BUTTON_HOVER_BORDER.pick(dark).into()),
            ..RuleSet::default()
        },
        pressed: RuleSet {
            background: Some(pressed.into()),
            ..RuleSet::default()
        },
        disabled: RuleSet {
            background: Some(BUTTON_DISABLED_BACKGROUND.pick(dark).into()),
            text: Some(BUTTON_DISABLED_TEXT.pick(dark).into()),
            border_color: Some(BUTTON_DISABLED_BORDER.pick(dark).into()),
        },
        padding: Some((6, 16)),
        font_size: Some(13),
        min_height: Some(30),
        ..StyleDescriptor::new(WidgetCategory::Button)
    }
}

/// Checkable tool button style.
#[must_use]
pub fn toggle_button_style(base: &BasePalette, derived: &DerivedPalette) -> StyleDescriptor {
    let dark = derived.is_dark_mode;

    StyleDescriptor {
        normal: RuleSet {
            background: Some(Paint::Transparent),
            border_color: Some(Paint::Transparent),
            ..RuleSet::default()
        },
        hover: RuleSet {
            background: Some(TOGGLE_HOVER_BACKGROUND.pick(dark).into()),
            ..RuleSet::default()
        },
        pressed: RuleSet {
            background: Some(TOGGLE_PRESSED_BACKGROUND.pick(dark).into()),
            ..RuleSet::default()
        },
        checked: RuleSet {
            background: Some(base.highlight.into()),
            border_color: Some(base.highlight.darker(20).into()),
            ..RuleSet::default()
        },
        padding: Some((4, 8)),
        min_height: Some(24),
        ..StyleDescriptor::new(WidgetCategory::ToggleButton)
    }
}

/// Group box style. The title shares the panel background, cutting a notch
/// into the frame.
#[must_use]
pub fn grouped_panel_style(base: &BasePalette, derived: &DerivedPalette) -> StyleDescriptor {
    StyleDescriptor {
        normal: RuleSet {
            background: Some(derived.group_panel_background.into()),
            text: Some(base.window_text.into()),
            border_color: Some(derived.border_color_light.into()),
        },
        title: Some(RuleSet {
            background: Some(derived.group_panel_background.into()),
            ..RuleSet::default()
        }),
        font_weight: Some(600),
        group: Some(GroupMetrics {
            margin_top: GROUP_TITLE_INSET,
            padding_top: 16,
            title_inset: GROUP_TITLE_INSET,
            title_padding: 8,
            title_radius: 4,
        }),
        ..StyleDescriptor::new(WidgetCategory::GroupedPanel)
    }
}

/// Frame style.
#[must_use]
pub fn panel_style(derived: &DerivedPalette, border_radius: i32) -> StyleDescriptor {
    StyleDescriptor {
        normal: RuleSet {
            background: Some(derived.panel_background.into()),
            border_color: Some(derived.border_color.into()),
            ..RuleSet::default()
        },
        border_radius,
        ..StyleDescriptor::new(WidgetCategory::Panel)
    }
}

/// Framed label style.
#[must_use]
pub fn label_style(
    base: &BasePalette,
    derived: &DerivedPalette,
    border_radius: i32,
) -> StyleDescriptor {
    StyleDescriptor {
        normal: RuleSet {
            background: Some(base.base.into()),
            text: Some(base.window_text.into()),
            border_color: Some(derived.border_color.into()),
        },
        border_radius,
        padding: Some((8, 12)),
        ..StyleDescriptor::new(WidgetCategory::Label)
    }
}

/// Step description banner. Sits on the group background so it reads as
/// part of the step content.
#[must_use]
pub fn step_description_style(base: &BasePalette, derived: &DerivedPalette) -> StyleDescriptor {
    StyleDescriptor {
        normal: RuleSet {
            background: Some(derived.group_panel_background.into()),
            text: Some(base.window_text.into()),
            border_color: Some(derived.border_color.into()),
        },
        padding: Some((10, 14)),
        font_weight: Some(500),
        ..StyleDescriptor::new(WidgetCategory::StepDescription)
    }
}

/// Step page container. Transparent and borderless so the window
/// background shows through.
#[must_use]
pub fn step_stack_style() -> StyleDescriptor {
    StyleDescriptor {
        normal: RuleSet {
            background: Some(Paint::Transparent),
            ..RuleSet::default()
        },
        border_width: 0,
        ..StyleDescriptor::new(WidgetCategory::StepStack)
    }
}
