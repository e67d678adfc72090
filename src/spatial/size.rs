//! Validated grid dimensions

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::transform::Coordinate;

/// Width and height in cells plus the world-space edge length of each cell
///
/// Construction validates every field, so a `GridSize` held by a grid is
/// always usable for allocation and coordinate math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSize<F: Coordinate = f32> {
    width: usize,
    height: usize,
    cell_size: F,
}

impl<F: Coordinate> GridSize<F> {
    /// Create a validated grid size
    ///
    /// Zero width or height is accepted and yields a grid with no valid cells.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidParameter` if either dimension exceeds
    /// `MAX_GRID_DIMENSION` or if `cell_size` is not a finite positive number.
    pub fn new(width: usize, height: usize, cell_size: F) -> Result<Self> {
        if width > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "width",
                &width,
                &format!("must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
        if height > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "height",
                &height,
                &format!("must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
        if !cell_size.is_finite() || cell_size <= F::zero() {
            return Err(invalid_parameter(
                "cell_size",
                &format!("{cell_size:?}"),
                &"must be a finite positive number",
            ));
        }

        Ok(Self {
            width,
            height,
            cell_size,
        })
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// World-space edge length of one cell
    pub const fn cell_size(&self) -> F {
        self.cell_size
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }
}
