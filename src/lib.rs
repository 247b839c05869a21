//! Poster Wizard Library
//!
//! This library provides the display side of a poster-splitting wizard:
//! adaptive light/dark styling for the wizard's widgets and a controller
//! that keeps the displayed poster configuration in sync with an external
//! layout engine.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod style;
pub mod wizard;
