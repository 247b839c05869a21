//! Poster wizard display state.
//!
//! The UI layer reports [`UserAction`]s, the controller turns them into
//! [`WizardEvent`] requests for the layout engine, and the engine pushes
//! approved values back through the controller's `apply_*` setters.

pub mod controller;
pub mod events;
pub mod steps;

pub use controller::{ControlState, HelpDialog, PosterConfigController};
pub use events::{UserAction, WizardEvent};
pub use steps::WizardStep;
