//! Generic cell container with world-space lookup and change notification
//!
//! A grid owns a fixed `width × height` block of cells anchored at a world
//! origin. Reads and writes accept either cell indices or world positions.
//! Invalid indices never fail: reads fall back to `T::default()` and writes
//! are dropped. Every accepted write is reported to the grid's observers with
//! the value that was stored.

use ndarray::Array2;
use tracing::{debug, trace};

use crate::spatial::events::{ChangeNotifier, SubscriptionId};
use crate::spatial::size::GridSize;
use crate::spatial::transform::{Coordinate, GridTransform};

/// Fixed-size 2D grid of `T` values addressed by cell index or world position
///
/// Cells are stored in an `Array2` of shape `(width, height)` indexed as
/// `[x, y]`, so row-major iteration visits every `y` of column 0 before
/// moving to column 1.
#[derive(Debug)]
pub struct Grid<T, F: Coordinate = f32> {
    size: GridSize<F>,
    transform: GridTransform<F>,
    cells: Array2<T>,
    on_any_value_changed: ChangeNotifier<T>,
}

impl<T: Default, F: Coordinate> Grid<T, F> {
    /// Create a grid with every cell set to `T::default()`
    pub fn new(origin: [F; 3], size: GridSize<F>) -> Self {
        debug!(
            width = size.width(),
            height = size.height(),
            cell_size = ?size.cell_size(),
            origin = ?origin,
            "creating grid"
        );

        Self {
            size,
            transform: GridTransform::new(origin, size.cell_size()),
            cells: Array2::default((size.width(), size.height())),
            on_any_value_changed: ChangeNotifier::new(),
        }
    }
}

impl<T, F: Coordinate> Grid<T, F> {
    /// Number of columns
    pub const fn width(&self) -> usize {
        self.size.width()
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.size.height()
    }

    /// World-space edge length of one cell
    pub const fn cell_size(&self) -> F {
        self.size.cell_size()
    }

    /// World position of cell (0, 0)'s corner
    pub const fn origin(&self) -> [F; 3] {
        self.transform.origin()
    }

    /// Dimensions the grid was built with
    pub const fn size(&self) -> GridSize<F> {
        self.size
    }

    /// Coordinate mapping used by this grid
    pub const fn transform(&self) -> &GridTransform<F> {
        &self.transform
    }

    /// Check whether `(x, y)` addresses a cell of this grid
    pub const fn is_valid(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }

    /// World position of the corner of cell `(x, y)`
    ///
    /// Defined for any index, including ones outside the grid.
    pub fn world_position(&self, x: i32, y: i32) -> [F; 3] {
        self.transform.cell_to_world(x, y)
    }

    /// World position of the center of cell `(x, y)`
    pub fn world_position_center(&self, x: i32, y: i32) -> [F; 3] {
        self.transform.cell_center(x, y)
    }

    /// Cell index containing a world position
    ///
    /// The returned index is not bounds-checked.
    pub fn cell_from_world_position(&self, position: [F; 3]) -> (i32, i32) {
        self.transform.world_to_cell(position)
    }

    /// Borrow the value at `(x, y)`, or `None` outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        if !self.is_valid(x, y) {
            return None;
        }
        self.cells.get([x as usize, y as usize])
    }

    /// Store `value` at `(x, y)` and notify observers
    ///
    /// Writes outside the grid are ignored and notify nobody.
    pub fn set_value(&mut self, x: i32, y: i32, value: T) {
        if !self.is_valid(x, y) {
            trace!(x, y, "ignoring write outside grid");
            return;
        }

        if let Some(slot) = self.cells.get_mut([x as usize, y as usize]) {
            *slot = value;
            self.on_any_value_changed.notify(slot);
        }
    }

    /// Store `value` in the cell containing a world position
    pub fn set_value_at_world(&mut self, position: [F; 3], value: T) {
        let (x, y) = self.cell_from_world_position(position);
        self.set_value(x, y, value);
    }

    /// Backing store of all cells, indexed `[x, y]`
    pub const fn cells(&self) -> &Array2<T> {
        &self.cells
    }

    /// Iterate over `((x, y), value)` pairs in column-major cell order
    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32), &T)> {
        self.cells
            .indexed_iter()
            .map(|((x, y), value)| ((x as i32, y as i32), value))
    }

    /// Register an observer called with every newly stored value
    pub fn on_any_value_changed<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: FnMut(&T) + 'static,
    {
        self.on_any_value_changed.subscribe(observer)
    }

    /// Remove a previously registered observer
    pub fn remove_observer(&mut self, id: SubscriptionId) -> bool {
        self.on_any_value_changed.unsubscribe(id)
    }

    /// Number of registered observers
    pub const fn observer_count(&self) -> usize {
        self.on_any_value_changed.len()
    }
}

impl<T: Clone + Default, F: Coordinate> Grid<T, F> {
    /// Value at `(x, y)`, or `T::default()` outside the grid
    pub fn value_at(&self, x: i32, y: i32) -> T {
        self.get(x, y).cloned().unwrap_or_default()
    }

    /// Value of the cell containing a world position
    pub fn value_at_world(&self, position: [F; 3]) -> T {
        let (x, y) = self.cell_from_world_position(position);
        self.value_at(x, y)
    }

    /// Copy every cell into a list, all of column 0 first
    pub fn cells_as_list(&self) -> Vec<T> {
        self.cells.iter().cloned().collect()
    }
}
