//! Generic 2D spatial grid mapping world-space positions to typed cells
//!
//! A [`Grid`] covers a fixed rectangle of cells anchored at a world-space
//! origin. Positions are converted to cell indices by floor division with the
//! cell size, and every effective write is broadcast to registered observers.
//! Out-of-range reads return the default value and out-of-range writes are
//! ignored, so callers never handle bounds errors on the hot path.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Grid container, coordinate transforms and change notification
pub mod spatial;

pub use io::error::{GridError, Result};
pub use spatial::{ChangeNotifier, Coordinate, Grid, GridSize, GridTransform, SubscriptionId};
