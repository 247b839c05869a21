//! Structured style descriptors and their stylesheet rendering.
//!
//! A [`StyleDescriptor`] is the toolkit-neutral result of style derivation:
//! named color rules per interaction state plus a few box metrics. The UI
//! layer either consumes it directly or renders it with
//! [`StyleDescriptor::to_stylesheet`].

use serde::Serialize;
use std::fmt::{self, Write as _};

use crate::models::RgbaColor;

/// Themeable widget categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum WidgetCategory {
    /// Push button
    Button,
    /// Checkable tool button
    ToggleButton,
    /// Titled group box
    GroupedPanel,
    /// Plain frame
    Panel,
    /// Framed text label
    Label,
    /// Step number and description banner above the step pages
    StepDescription,
    /// Container stacking the wizard step pages
    StepStack,
}

impl WidgetCategory {
    /// All categories.
    pub const ALL: [Self; 7] = [
        Self::Button,
        Self::ToggleButton,
        Self::GroupedPanel,
        Self::Panel,
        Self::Label,
        Self::StepDescription,
        Self::StepStack,
    ];

    /// Stylesheet selector of the widget class.
    #[must_use]
    pub const fn selector(&self) -> &'static str {
        match self {
            Self::Button => "QPushButton",
            Self::ToggleButton => "QToolButton",
            Self::GroupedPanel => "QGroupBox",
            Self::Panel => "QFrame",
            Self::Label => "QLabel",
            Self::StepDescription => "QLabel#stepDescription",
            Self::StepStack => "QStackedWidget#steps",
        }
    }

    /// Corner radius used when the caller does not pass one.
    #[must_use]
    pub const fn default_border_radius(&self) -> i32 {
        match self {
            Self::Button | Self::ToggleButton => 6,
            Self::GroupedPanel => 10,
            Self::Panel => 12,
            Self::Label | Self::StepDescription => 8,
            Self::StepStack => 0,
        }
    }
}

impl fmt::Display for WidgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Button => "button",
            Self::ToggleButton => "toggle-button",
            Self::GroupedPanel => "grouped-panel",
            Self::Panel => "panel",
            Self::Label => "label",
            Self::StepDescription => "step-description",
            Self::StepStack => "step-stack",
        };
        f.write_str(name)
    }
}

/// A fill or stroke value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paint {
    /// Nothing is painted
    Transparent,
    /// A palette color
    Color(RgbaColor),
}

impl Paint {
    /// The color, if any.
    #[must_use]
    pub const fn color(&self) -> Option<RgbaColor> {
        match self {
            Self::Transparent => None,
            Self::Color(color) => Some(*color),
        }
    }
}

impl From<RgbaColor> for Paint {
    fn from(color: RgbaColor) -> Self {
        Self::Color(color)
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transparent => f.write_str("transparent"),
            Self::Color(color) => write!(f, "{color}"),
        }
    }
}

/// Color rules for one interaction state. `None` inherits the normal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct RuleSet {
    /// Background fill
    pub background: Option<Paint>,
    /// Text color
    pub text: Option<Paint>,
    /// Border stroke color
    pub border_color: Option<Paint>,
}

impl RuleSet {
    fn paints(&self) -> impl Iterator<Item = Paint> {
        [self.background, self.text, self.border_color]
            .into_iter()
            .flatten()
    }

    fn is_empty(&self) -> bool {
        self.background.is_none() && self.text.is_none() && self.border_color.is_none()
    }
}

/// Box metrics for a grouped panel and its title notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GroupMetrics {
    /// Space reserved above the frame for the title
    pub margin_top: u16,
    /// Space between frame top and content
    pub padding_top: u16,
    /// Horizontal inset of the title from the left edge
    pub title_inset: u16,
    /// Horizontal padding around the title text
    pub title_padding: u16,
    /// Corner radius of the title background
    pub title_radius: u16,
}

/// Named visual rules for one widget category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StyleDescriptor {
    /// Category the rules apply to
    pub category: WidgetCategory,
    /// Resting state
    pub normal: RuleSet,
    /// Pointer over the widget
    pub hover: RuleSet,
    /// Widget held down
    pub pressed: RuleSet,
    /// Widget disabled
    pub disabled: RuleSet,
    /// Checkable widget in its checked state
    pub checked: RuleSet,
    /// Group title rules (grouped panels only)
    pub title: Option<RuleSet>,
    /// Border stroke width in pixels. Zero renders `border: none`.
    pub border_width: u16,
    /// Corner radius in pixels
    pub border_radius: i32,
    /// Vertical and horizontal padding
    pub padding: Option<(u16, u16)>,
    /// Minimum height in pixels
    pub min_height: Option<u16>,
    /// Font size in pixels
    pub font_size: Option<u16>,
    /// Font weight
    pub font_weight: Option<u16>,
    /// Grouped panel metrics
    pub group: Option<GroupMetrics>,
}

impl StyleDescriptor {
    /// An empty descriptor with a 1px border and the category's default radius.
    #[must_use]
    pub fn new(category: WidgetCategory) -> Self {
        Self {
            category,
            normal: RuleSet::default(),
            hover: RuleSet::default(),
            pressed: RuleSet::default(),
            disabled: RuleSet::default(),
            checked: RuleSet::default(),
            title: None,
            border_width: 1,
            border_radius: category.default_border_radius(),
            padding: None,
            min_height: None,
            font_size: None,
            font_weight: None,
            group: None,
        }
    }

    /// Every color referenced by any rule.
    pub fn colors(&self) -> impl Iterator<Item = RgbaColor> + '_ {
        [
            &self.normal,
            &self.hover,
            &self.pressed,
            &self.disabled,
            &self.checked,
        ]
        .into_iter()
        .chain(self.title.iter())
        .flat_map(RuleSet::paints)
        .filter_map(|paint| paint.color())
    }

    /// Renders the descriptor as toolkit stylesheet text.
    ///
    /// Output depends only on the descriptor, so identical descriptors render
    /// byte-identical text.
    #[must_use]
    pub fn to_stylesheet(&self) -> String {
        let selector = self.category.selector();
        let mut out = String::new();

        let mut normal = Vec::new();
        if let Some(background) = self.normal.background {
            normal.push(("background-color", background.to_string()));
        }
        if let Some(text) = self.normal.text {
            normal.push(("color", text.to_string()));
        }
        if self.border_width == 0 {
            normal.push(("border", "none".to_string()));
        } else if let Some(border) = self.normal.border_color {
            normal.push(("border", format!("{}px solid {border}", self.border_width)));
        }
        normal.push(("border-radius", format!("{}px", self.border_radius)));
        if let Some(group) = &self.group {
            normal.push(("margin-top", format!("{}px", group.margin_top)));
            normal.push(("padding-top", format!("{}px", group.padding_top)));
        }
        if let Some((vertical, horizontal)) = self.padding {
            normal.push(("padding", format!("{vertical}px {horizontal}px")));
        }
        if let Some(size) = self.font_size {
            normal.push(("font-size", format!("{size}px")));
        }
        if let Some(weight) = self.font_weight {
            normal.push(("font-weight", weight.to_string()));
        }
        if let Some(height) = self.min_height {
            normal.push(("min-height", format!("{height}px")));
        }
        write_block(&mut out, selector, &normal);

        for (state, rules) in [
            ("hover", &self.hover),
            ("pressed", &self.pressed),
            ("disabled", &self.disabled),
            ("checked", &self.checked),
        ] {
            if !rules.is_empty() {
                write_block(&mut out, &format!("{selector}:{state}"), &state_rules(rules));
            }
        }

        if let (Some(title), Some(group)) = (&self.title, &self.group) {
            let mut rules = vec![
                ("subcontrol-origin", "margin".to_string()),
                ("subcontrol-position", "top left".to_string()),
                ("left", format!("{}px", group.title_inset)),
                (
                    "padding",
                    format!("0px {0}px 0px {0}px", group.title_padding),
                ),
            ];
            rules.extend(state_rules(title));
            rules.push(("border-radius", format!("{}px", group.title_radius)));
            write_block(&mut out, &format!("{selector}::title"), &rules);
        }

        out
    }
}

fn state_rules(rules: &RuleSet) -> Vec<(&'static str, String)> {
    let mut out = Vec::new();
    if let Some(background) = rules.background {
        out.push(("background-color", background.to_string()));
    }
    if let Some(text) = rules.text {
        out.push(("color", text.to_string()));
    }
    if let Some(border) = rules.border_color {
        out.push(("border-color", border.to_string()));
    }
    out
}

fn write_block(out: &mut String, selector: &str, rules: &[(&str, String)]) {
    // Writing into a String cannot fail
    let _ = writeln!(out, "{selector} {{");
    for (property, value) in rules {
        let _ = writeln!(out, "    {property}: {value};");
    }
    out.push_str("}\n");
}
