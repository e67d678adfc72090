//! Conversions between world-space positions and cell indices
//!
//! Cell `(x, y)` occupies the half-open world rectangle starting at
//! `origin + [x, y] * cell_size` and extending one cell size along each axis.
//! World positions map back to cells by flooring the offset from the origin
//! divided by the cell size, so positions left of or below the origin produce
//! negative indices rather than rounding toward zero. The floored index is
//! then checked against the corners `cell_to_world` produces, so a corner
//! always maps back to its own cell despite rounding in the division.

use std::fmt::Debug;

use num_traits::{AsPrimitive, Float};

/// Floating point scalar usable for world-space coordinates
pub trait Coordinate: Float + Debug + 'static {
    /// Convert a cell index into this scalar type
    fn from_index(index: i32) -> Self;

    /// Floor this value and convert it to a cell index
    ///
    /// Values that do not fit in `i32` (including NaN) saturate to
    /// `i32::MIN` or `i32::MAX`, both of which lie outside any grid.
    fn floor_to_index(self) -> i32;
}

fn saturating_floor<F: Float>(value: F) -> i32 {
    value.floor().to_i32().unwrap_or_else(|| {
        if value.is_sign_negative() {
            i32::MIN
        } else {
            i32::MAX
        }
    })
}

impl Coordinate for f32 {
    fn from_index(index: i32) -> Self {
        index.as_()
    }

    fn floor_to_index(self) -> i32 {
        saturating_floor(self)
    }
}

impl Coordinate for f64 {
    fn from_index(index: i32) -> Self {
        index.as_()
    }

    fn floor_to_index(self) -> i32 {
        saturating_floor(self)
    }
}

/// Affine mapping between a grid's cell lattice and world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTransform<F: Coordinate = f32> {
    origin: [F; 3],
    cell_size: F,
}

impl<F: Coordinate> GridTransform<F> {
    /// Create a transform anchored at `origin` with square cells of `cell_size`
    pub const fn new(origin: [F; 3], cell_size: F) -> Self {
        Self { origin, cell_size }
    }

    /// World-space position of cell (0, 0)'s corner
    pub const fn origin(&self) -> [F; 3] {
        self.origin
    }

    /// Edge length of a cell in world units
    pub const fn cell_size(&self) -> F {
        self.cell_size
    }

    /// World position of the minimum corner of cell `(x, y)`
    ///
    /// The Z component is the origin's Z.
    pub fn cell_to_world(&self, x: i32, y: i32) -> [F; 3] {
        [
            self.corner(x, self.origin[0]),
            self.corner(y, self.origin[1]),
            self.origin[2],
        ]
    }

    /// World position of the center of cell `(x, y)`
    ///
    /// Every component, Z included, is offset by half a cell from the corner.
    pub fn cell_center(&self, x: i32, y: i32) -> [F; 3] {
        let half = self.cell_size / (F::one() + F::one());
        self.cell_to_world(x, y).map(|component| component + half)
    }

    /// Cell index containing `position`, ignoring its Z component
    ///
    /// The result may lie outside any particular grid; bounds are the
    /// caller's concern.
    pub fn world_to_cell(&self, position: [F; 3]) -> (i32, i32) {
        (
            self.axis_index(position[0], self.origin[0]),
            self.axis_index(position[1], self.origin[1]),
        )
    }

    fn corner(&self, index: i32, origin: F) -> F {
        F::from_index(index) * self.cell_size + origin
    }

    // Division can land one cell off near a boundary; settle against the corners
    fn axis_index(&self, position: F, origin: F) -> i32 {
        let index = ((position - origin) / self.cell_size).floor_to_index();
        if index == i32::MIN || index == i32::MAX {
            return index;
        }

        if position >= self.corner(index + 1, origin) {
            index + 1
        } else if position < self.corner(index, origin) {
            index - 1
        } else {
            index
        }
    }
}
