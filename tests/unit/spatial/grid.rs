//! Tests for the grid container including bounds handling and notification

#[cfg(test)]
mod tests {
    use cellgrid::spatial::{Grid, GridSize};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn grid(width: usize, height: usize, cell_size: f32) -> Grid<u32> {
        let Ok(size) = GridSize::new(width, height, cell_size) else {
            unreachable!("test sizes are valid");
        };
        Grid::new([0.0, 0.0, 0.0], size)
    }

    // Tests every cell starts at the default value
    // Verified by filling with a non-default sentinel
    #[test]
    fn test_new_grid_is_default_filled() {
        let grid = grid(4, 3, 1.0);

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.cells().dim(), (4, 3));
        assert!(grid.cells().iter().all(|&v| v == 0));
    }

    // Tests writes inside the grid are readable by index
    // Verified by swapping x and y in storage
    #[test]
    fn test_set_then_get_by_index() {
        let mut grid = grid(5, 3, 2.0);

        grid.set_value(4, 2, 7);
        grid.set_value(0, 1, 3);

        assert_eq!(grid.value_at(4, 2), 7);
        assert_eq!(grid.value_at(0, 1), 3);
        assert_eq!(grid.value_at(2, 4), 0, "Transposed index is out of bounds");
        assert_eq!(grid.get(4, 2), Some(&7));
    }

    // Tests out-of-range writes are ignored and reads fall back to default
    // Verified by clamping indices instead of rejecting them
    #[test]
    fn test_out_of_bounds_degrades_silently() {
        let mut grid = grid(3, 3, 1.0);

        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (i32::MIN, i32::MAX)] {
            grid.set_value(x, y, 9);
            assert_eq!(grid.value_at(x, y), 0);
            assert_eq!(grid.get(x, y), None);
            assert!(!grid.is_valid(x, y));
        }

        assert!(grid.cells().iter().all(|&v| v == 0));
    }

    // Tests bounds validity at each edge
    // Verified by using inclusive upper bounds
    #[test]
    fn test_is_valid_edges() {
        let grid = grid(2, 5, 1.0);

        assert!(grid.is_valid(0, 0));
        assert!(grid.is_valid(1, 4));
        assert!(!grid.is_valid(2, 4));
        assert!(!grid.is_valid(1, 5));
        assert!(!grid.is_valid(-1, 4));
    }

    // Tests world positions resolve through floor division
    // Verified by truncating instead of flooring
    #[test]
    fn test_world_position_lookup_uses_floor() {
        let Ok(size) = GridSize::new(4, 4, 10.0) else {
            unreachable!("test size is valid");
        };
        let mut grid: Grid<u32> = Grid::new([-20.0, -20.0, 0.0], size);

        grid.set_value_at_world([-15.0, -0.5, 0.0], 11);

        assert_eq!(grid.cell_from_world_position([-15.0, -0.5, 0.0]), (0, 1));
        assert_eq!(grid.value_at(0, 1), 11);
        assert_eq!(grid.value_at_world([-11.0, -10.0, 5.0]), 11);
        assert_eq!(grid.value_at_world([-21.0, -10.0, 0.0]), 0);
    }

    // Tests corner and center world positions
    // Verified by omitting the origin offset
    #[test]
    fn test_world_position_corner_and_center() {
        let Ok(size) = GridSize::new(3, 3, 2.0) else {
            unreachable!("test size is valid");
        };
        let grid: Grid<u8> = Grid::new([1.0, 2.0, 3.0], size);

        assert_eq!(grid.world_position(2, 1), [5.0, 4.0, 3.0]);
        assert_eq!(grid.world_position_center(2, 1), [6.0, 5.0, 4.0]);
        assert_eq!(grid.cell_from_world_position(grid.world_position(2, 1)), (2, 1));
        assert_eq!(
            grid.cell_from_world_position(grid.world_position_center(2, 1)),
            (2, 1)
        );
    }

    // Tests observers receive the stored value once per accepted write
    // Verified by notifying before the bounds check
    #[test]
    fn test_observers_receive_new_values() {
        let mut grid = grid(2, 2, 1.0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        grid.on_any_value_changed(move |value| sink.borrow_mut().push(*value));

        grid.set_value(0, 0, 5);
        grid.set_value(9, 9, 6);
        grid.set_value_at_world([1.5, 1.5, 0.0], 7);
        grid.set_value(0, 0, 5);

        assert_eq!(*seen.borrow(), vec![5, 7, 5]);
    }

    // Tests observers run in subscription order and can be removed
    // Verified by ignoring the subscription id on removal
    #[test]
    fn test_observer_order_and_removal() {
        let mut grid = grid(1, 1, 1.0);
        let log = Rc::new(RefCell::new(Vec::new()));

        let first_log = Rc::clone(&log);
        let first = grid.on_any_value_changed(move |v| first_log.borrow_mut().push(("first", *v)));
        let second_log = Rc::clone(&log);
        grid.on_any_value_changed(move |v| second_log.borrow_mut().push(("second", *v)));

        grid.set_value(0, 0, 1);
        assert!(grid.remove_observer(first));
        assert!(!grid.remove_observer(first));
        grid.set_value(0, 0, 2);

        assert_eq!(grid.observer_count(), 1);
        assert_eq!(
            *log.borrow(),
            vec![("first", 1), ("second", 1), ("second", 2)]
        );
    }

    // Tests list enumeration walks all y of a column before the next column
    // Verified by iterating rows first
    #[test]
    fn test_cells_as_list_is_column_major() {
        let mut grid = grid(2, 3, 1.0);
        for x in 0..2 {
            for y in 0..3 {
                grid.set_value(x, y, (x * 10 + y) as u32);
            }
        }

        assert_eq!(grid.cells_as_list(), vec![0, 1, 2, 10, 11, 12]);

        let indices: Vec<(i32, i32)> = grid.iter().map(|(index, _)| index).collect();
        assert_eq!(indices, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        assert!(grid.iter().all(|((x, y), &v)| v == (x * 10 + y) as u32));
    }

    // Tests a zero-sized grid rejects every index
    // Verified by allowing index zero unconditionally
    #[test]
    fn test_empty_grid_has_no_valid_cells() {
        let mut grid = grid(0, 0, 1.0);

        grid.set_value(0, 0, 1);

        assert!(!grid.is_valid(0, 0));
        assert_eq!(grid.value_at(0, 0), 0);
        assert!(grid.cells_as_list().is_empty());
    }

    // Tests reference-like cell types default-construct per cell
    // Verified by sharing one allocation across cells
    #[test]
    fn test_owned_cell_types() {
        let Ok(size) = GridSize::new(2, 2, 1.0) else {
            unreachable!("test size is valid");
        };
        let mut grid: Grid<String> = Grid::new([0.0, 0.0, 0.0], size);

        grid.set_value(1, 0, "wall".to_string());

        assert_eq!(grid.value_at(1, 0), "wall");
        assert_eq!(grid.value_at(0, 0), "");
        assert_eq!(grid.value_at(5, 5), "");
    }

    // Tests f64 coordinates share the same mapping
    // Verified by forcing f32 conversion in the transform
    #[test]
    fn test_f64_grid() {
        let Ok(size) = GridSize::new(3, 3, 0.25_f64) else {
            unreachable!("test size is valid");
        };
        let mut grid: Grid<i64, f64> = Grid::new([1.0, 1.0, 0.0], size);

        grid.set_value_at_world([1.6, 1.25, 0.0], -4);

        assert_eq!(grid.value_at(2, 1), -4);
        assert!((grid.cell_size() - 0.25).abs() < f64::EPSILON);
        assert_eq!(grid.origin(), [1.0, 1.0, 0.0]);
    }
}
