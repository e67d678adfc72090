//! Spatial data structures and coordinate mapping
//!
//! This module contains spatial-related functionality including:
//! - The generic cell grid container
//! - Validated grid dimensions
//! - World-to-cell coordinate transforms
//! - Change notification for cell writes

/// Observer registry for cell value changes
pub mod events;
/// Generic cell container with world-space lookup
pub mod grid;
/// Validated grid dimensions and cell size
pub mod size;
/// Conversions between world positions and cell indices
pub mod transform;

pub use events::{ChangeNotifier, SubscriptionId};
pub use grid::Grid;
pub use size::GridSize;
pub use transform::{Coordinate, GridTransform};
