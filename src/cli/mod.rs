//! CLI command handlers for Poster Wizard.
//!
//! This module provides headless, scriptable access to the styling and
//! configuration layers for automation and testing.

pub mod common;
pub mod config;
pub mod formats;
pub mod style;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use formats::FormatsArgs;
pub use style::StyleArgs;
