//! Adaptive light/dark styling.
//!
//! Control flow: the host supplies a [`BasePalette`], [`derive_palette`]
//! computes the shared surface colors, [`style_for`] produces one
//! [`StyleDescriptor`] per widget category, and [`AdaptiveStyler`] applies
//! them to every widget in its [`StyleRegistry`].

pub mod descriptor;
pub mod deriver;
pub mod palette;
pub mod registry;

pub use descriptor::{Paint, RuleSet, StyleDescriptor, WidgetCategory};
pub use deriver::style_for;
pub use palette::{derive_palette, BasePalette, DerivedPalette};
pub use registry::{AdaptiveStyler, StyleRegistry, WidgetId};
