//! Input/output operations, configuration and error handling

/// Command-line interface for the placement demo
pub mod cli;
/// Crate constants and CLI defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// PNG export of palette grids
pub mod image;
/// Progress display for placement runs
pub mod progress;
