//! Explicit registry of themeable widgets and the adaptive style applier.
//!
//! Widgets register themselves with their category when created and
//! deregister when destroyed. On every appearance change the applier walks
//! the registry, not a widget tree, and recomputes each widget's descriptor.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::config::Config;

use super::descriptor::{StyleDescriptor, WidgetCategory};
use super::deriver::style_for;
use super::palette::{derive_palette, BasePalette, DerivedPalette};

/// Stable handle for a registered widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Raw numeric value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

/// Registration record of one widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisteredWidget {
    /// Category the widget is themed as
    pub category: WidgetCategory,
    /// Radius override for panels and labels
    pub border_radius: Option<i32>,
}

/// Widgets currently alive, in registration order.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    widgets: BTreeMap<WidgetId, RegisteredWidget>,
    next_id: u64,
}

impl StyleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a widget with the category's default radius.
    pub fn register(&mut self, category: WidgetCategory) -> WidgetId {
        self.insert(RegisteredWidget {
            category,
            border_radius: None,
        })
    }

    /// Registers a widget with an explicit corner radius.
    pub fn register_with_radius(&mut self, category: WidgetCategory, radius: i32) -> WidgetId {
        self.insert(RegisteredWidget {
            category,
            border_radius: Some(radius),
        })
    }

    fn insert(&mut self, widget: RegisteredWidget) -> WidgetId {
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        self.widgets.insert(id, widget);
        id
    }

    /// Removes a widget. Returns `false` if it was not registered.
    pub fn deregister(&mut self, id: WidgetId) -> bool {
        self.widgets.remove(&id).is_some()
    }

    /// Looks up a registration.
    #[must_use]
    pub fn get(&self, id: WidgetId) -> Option<&RegisteredWidget> {
        self.widgets.get(&id)
    }

    /// Iterates registrations in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (WidgetId, &RegisteredWidget)> {
        self.widgets.iter().map(|(id, widget)| (*id, widget))
    }

    /// Number of registered widgets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether no widget is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

/// Applies derived styles to every registered widget.
#[derive(Debug, Clone)]
pub struct AdaptiveStyler {
    registry: StyleRegistry,
    enabled: bool,
    base: BasePalette,
    derived: Option<DerivedPalette>,
    applied: BTreeMap<WidgetId, StyleDescriptor>,
}

impl AdaptiveStyler {
    /// Creates the styler and performs the initial application.
    ///
    /// When `enabled` is false every application is a no-op.
    #[must_use]
    pub fn new(registry: StyleRegistry, enabled: bool, base: &BasePalette) -> Self {
        let mut styler = Self {
            registry,
            enabled,
            base: *base,
            derived: None,
            applied: BTreeMap::new(),
        };
        styler.apply_adaptive_styling(base);
        styler
    }

    /// Creates the styler from the UI configuration.
    ///
    /// The palette follows `ui.theme_mode` and styling only runs where
    /// [`UiConfig::adaptive_styling_enabled`](crate::config::UiConfig::adaptive_styling_enabled)
    /// allows it.
    #[must_use]
    pub fn from_config(registry: StyleRegistry, config: &Config) -> Self {
        let enabled = config.ui.adaptive_styling_enabled();
        debug!(enabled, mode = ?config.ui.theme_mode, "Creating adaptive styler");
        Self::new(registry, enabled, &BasePalette::for_mode(config.ui.theme_mode))
    }

    /// Whether styling is active on this platform.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The registry, for inspection.
    #[must_use]
    pub const fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Registers a widget and styles it with the palette of the last
    /// application.
    pub fn register(&mut self, category: WidgetCategory, border_radius: Option<i32>) -> WidgetId {
        let id = match border_radius {
            Some(radius) => self.registry.register_with_radius(category, radius),
            None => self.registry.register(category),
        };
        if let Some(derived) = &self.derived {
            self.applied
                .insert(id, style_for(category, &self.base, derived, border_radius));
        }
        id
    }

    /// Deregisters a widget and drops its applied style.
    pub fn deregister(&mut self, id: WidgetId) -> bool {
        self.applied.remove(&id);
        self.registry.deregister(id)
    }

    /// Re-derives the palette and recomputes every registered widget's style.
    ///
    /// The applied-style table is rebuilt from scratch, so repeated calls with
    /// the same palette produce identical descriptors and never grow state.
    /// Returns the number of widgets styled.
    pub fn apply_adaptive_styling(&mut self, base: &BasePalette) -> usize {
        if !self.enabled {
            debug!("Adaptive styling disabled on this platform");
            return 0;
        }

        self.base = *base;
        let derived = derive_palette(base);
        self.applied = self
            .registry
            .iter()
            .map(|(id, widget)| {
                (
                    id,
                    style_for(widget.category, base, &derived, widget.border_radius),
                )
            })
            .collect();
        self.derived = Some(derived);

        debug!(
            widgets = self.applied.len(),
            dark = derived.is_dark_mode,
            "Applied adaptive styling"
        );
        self.applied.len()
    }

    /// Host hook for system appearance changes.
    pub fn on_appearance_changed(&mut self, base: &BasePalette) -> usize {
        info!(window = %base.window, "System appearance changed");
        self.apply_adaptive_styling(base)
    }

    /// Descriptor currently applied to a widget.
    #[must_use]
    pub fn applied(&self, id: WidgetId) -> Option<&StyleDescriptor> {
        self.applied.get(&id)
    }

    /// Base palette of the last application.
    #[must_use]
    pub const fn base(&self) -> &BasePalette {
        &self.base
    }

    /// Palette derived by the last application.
    #[must_use]
    pub const fn derived(&self) -> Option<&DerivedPalette> {
        self.derived.as_ref()
    }

    /// Rendered stylesheets of every styled widget, in registration order.
    #[must_use]
    pub fn stylesheets(&self) -> Vec<(WidgetId, String)> {
        self.applied
            .iter()
            .map(|(id, descriptor)| (*id, descriptor.to_stylesheet()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> (StyleRegistry, Vec<WidgetId>) {
        let mut registry = StyleRegistry::new();
        let ids = vec![
            registry.register(WidgetCategory::Button),
            registry.register(WidgetCategory::ToggleButton),
            registry.register(WidgetCategory::GroupedPanel),
            registry.register_with_radius(WidgetCategory::Panel, 12),
            registry.register_with_radius(WidgetCategory::Label, 8),
        ];
        (registry, ids)
    }

    #[test]
    fn test_register_and_deregister() {
        let (mut registry, ids) = registry();
        assert_eq!(registry.len(), 5);
        assert!(registry.deregister(ids[0]));
        assert!(!registry.deregister(ids[0]));
        assert_eq!(registry.len(), 4);

        // Ids are never reused
        let fresh = registry.register(WidgetCategory::Button);
        assert!(ids.iter().all(|id| *id != fresh));
    }

    #[test]
    fn test_initial_application() {
        let (registry, ids) = registry();
        let styler = AdaptiveStyler::new(registry, true, &BasePalette::dark());
        assert!(styler.derived().is_some_and(|d| d.is_dark_mode));
        for id in ids {
            assert!(styler.applied(id).is_some());
        }
    }

    #[test]
    fn test_apply_is_idempotent() {
        let (registry, _) = registry();
        let base = BasePalette::light();
        let mut styler = AdaptiveStyler::new(registry, true, &base);
        let first = styler.stylesheets();

        for _ in 0..3 {
            assert_eq!(styler.apply_adaptive_styling(&base), 5);
        }
        assert_eq!(styler.stylesheets(), first);
        assert_eq!(styler.registry().len(), 5);
    }

    #[test]
    fn test_appearance_change_restyles() {
        let (registry, ids) = registry();
        let mut styler = AdaptiveStyler::new(registry, true, &BasePalette::dark());
        let dark_button = styler.applied(ids[0]).cloned();

        styler.on_appearance_changed(&BasePalette::light());
        assert!(styler.derived().is_some_and(|d| !d.is_dark_mode));
        assert_ne!(styler.applied(ids[0]).cloned(), dark_button);
    }

    #[test]
    fn test_deregistered_widgets_are_not_styled() {
        let (registry, ids) = registry();
        let base = BasePalette::dark();
        let mut styler = AdaptiveStyler::new(registry, true, &base);
        assert!(styler.deregister(ids[2]));
        assert!(styler.applied(ids[2]).is_none());

        assert_eq!(styler.apply_adaptive_styling(&base), 4);
        assert!(styler.applied(ids[2]).is_none());
    }

    #[test]
    fn test_late_registration_is_styled() {
        let base = BasePalette::dark();
        let mut styler = AdaptiveStyler::new(StyleRegistry::new(), true, &base);
        let id = styler.register(WidgetCategory::Panel, Some(20));
        assert_eq!(styler.applied(id).map(|d| d.border_radius), Some(20));
    }

    #[test]
    fn test_late_registration_follows_last_appearance() {
        let (registry, ids) = registry();
        let mut styler = AdaptiveStyler::new(registry, true, &BasePalette::dark());
        styler.on_appearance_changed(&BasePalette::light());

        let late = styler.register(WidgetCategory::Button, None);
        // Same styling as the button registered before the change
        assert_eq!(
            styler.applied(late).map(|d| &d.normal),
            styler.applied(ids[0]).map(|d| &d.normal)
        );
        assert_eq!(styler.base(), &BasePalette::light());
        assert!(styler.derived().is_some_and(|d| !d.is_dark_mode));
    }

    #[test]
    fn test_late_registration_when_disabled() {
        let mut styler = AdaptiveStyler::new(StyleRegistry::new(), false, &BasePalette::dark());
        let id = styler.register(WidgetCategory::Label, None);
        assert!(styler.applied(id).is_none());
        assert_eq!(styler.registry().len(), 1);
    }

    #[test]
    fn test_from_config_honours_gate() {
        let mut config = Config::default();
        config.ui.theme_mode = crate::config::ThemeMode::Light;

        config.ui.adaptive_styling = Some(false);
        let (registry, ids) = registry();
        let styler = AdaptiveStyler::from_config(registry, &config);
        assert!(!styler.is_enabled());
        assert!(styler.applied(ids[0]).is_none());

        config.ui.adaptive_styling = Some(true);
        let (registry, ids) = self::registry();
        let styler = AdaptiveStyler::from_config(registry, &config);
        assert!(styler.is_enabled());
        assert!(styler.derived().is_some_and(|d| !d.is_dark_mode));
        assert!(styler.applied(ids[0]).is_some());
    }

    #[test]
    fn test_disabled_styler_is_noop() {
        let (registry, ids) = registry();
        let mut styler = AdaptiveStyler::new(registry, false, &BasePalette::dark());
        assert_eq!(styler.apply_adaptive_styling(&BasePalette::dark()), 0);
        assert!(styler.derived().is_none());
        assert!(styler.applied(ids[0]).is_none());
        assert!(styler.stylesheets().is_empty());
    }
}
