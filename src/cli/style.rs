//! Stylesheet preview command.
//!
//! Registers one widget per category, runs the adaptive styler against the
//! detected or requested appearance, and prints the result. Styling follows
//! the configured platform gate unless `--force` is given.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::style::{
    AdaptiveStyler, BasePalette, DerivedPalette, StyleDescriptor, StyleRegistry, WidgetCategory,
};
use clap::Args;
use serde::Serialize;

/// Print the derived palette and widget stylesheets
#[derive(Args, Debug)]
pub struct StyleArgs {
    /// Appearance (auto, light, or dark). Defaults to the configured theme mode.
    #[arg(long, value_name = "MODE")]
    mode: Option<String>,

    /// Only print one widget category (button, toggle-button, grouped-panel, panel, label,
    /// step-description, step-stack)
    #[arg(long, value_name = "CATEGORY")]
    category: Option<String>,

    /// Style even where adaptive styling is disabled for this platform
    #[arg(long)]
    force: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct WidgetOutput<'a> {
    category: String,
    descriptor: &'a StyleDescriptor,
    stylesheet: String,
}

#[derive(Serialize, Debug)]
struct StyleOutput<'a> {
    enabled: bool,
    base: &'a BasePalette,
    derived: Option<&'a DerivedPalette>,
    widgets: Vec<WidgetOutput<'a>>,
}

impl StyleArgs {
    /// Execute style command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {:#}", e)))?;

        if let Some(mode) = &self.mode {
            config.ui.theme_mode = parse_theme_mode(mode)?;
        }
        if self.force {
            config.ui.adaptive_styling = Some(true);
        }
        let categories = match &self.category {
            Some(name) => vec![parse_category(name)?],
            None => WidgetCategory::ALL.to_vec(),
        };

        let mut registry = StyleRegistry::new();
        for category in categories {
            match category {
                WidgetCategory::Panel => {
                    registry.register_with_radius(category, config.ui.panel_radius)
                }
                WidgetCategory::Label => {
                    registry.register_with_radius(category, config.ui.label_radius)
                }
                _ => registry.register(category),
            };
        }

        let styler = AdaptiveStyler::from_config(registry, &config);

        let widgets = styler
            .registry()
            .iter()
            .filter_map(|(id, widget)| {
                styler.applied(id).map(|descriptor| WidgetOutput {
                    category: widget.category.to_string(),
                    descriptor,
                    stylesheet: descriptor.to_stylesheet(),
                })
            })
            .collect::<Vec<_>>();

        if self.json {
            return print_json(&StyleOutput {
                enabled: styler.is_enabled(),
                base: styler.base(),
                derived: styler.derived(),
                widgets,
            });
        }

        let Some(derived) = styler.derived() else {
            println!("Adaptive styling is disabled on this platform.");
            println!("Set ui.adaptive_styling = true in the configuration or pass --force.");
            return Ok(());
        };

        println!(
            "Appearance: {}",
            if derived.is_dark_mode { "dark" } else { "light" }
        );
        println!("  Panel background:       {}", derived.panel_background);
        println!("  Group panel background: {}", derived.group_panel_background);
        println!("  Border:                 {}", derived.border_color);
        println!("  Border (light):         {}", derived.border_color_light);
        for widget in widgets {
            println!();
            println!("/* {} */", widget.category);
            print!("{}", widget.stylesheet);
        }
        Ok(())
    }
}

/// Parses a theme mode argument.
pub fn parse_theme_mode(value: &str) -> CliResult<ThemeMode> {
    match value.to_lowercase().as_str() {
        "auto" => Ok(ThemeMode::Auto),
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        _ => Err(CliError::validation(
            "Invalid theme mode. Must be 'auto', 'light', or 'dark'",
        )),
    }
}

/// Parses a widget category by its display name.
pub fn parse_category(value: &str) -> CliResult<WidgetCategory> {
    let wanted = value.to_lowercase();
    WidgetCategory::ALL
        .into_iter()
        .find(|category| category.to_string() == wanted)
        .ok_or_else(|| {
            let known = WidgetCategory::ALL
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            CliError::validation(format!(
                "Unknown widget category '{}'. Known categories: {}",
                value, known
            ))
        })
}
