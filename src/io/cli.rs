//! Command-line interface for scattering random placements onto a grid

use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_HEIGHT, DEFAULT_PIXELS_PER_CELL, DEFAULT_PLACEMENTS, DEFAULT_SEED,
    DEFAULT_WIDTH, MAX_PIXELS_PER_CELL, PALETTE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_grid_as_png, output_dimensions};
use crate::io::progress::ProgressManager;
use crate::spatial::{Grid, GridSize};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "cellgrid")]
#[command(
    author,
    version,
    about = "Scatter random world-space placements onto a cell grid and export it as PNG"
)]
/// Command-line arguments for the placement demo
pub struct Cli {
    /// Output PNG path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Grid width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// World-space edge length of one cell
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: f32,

    /// World-space X of the grid origin
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub origin_x: f32,

    /// World-space Y of the grid origin
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub origin_y: f32,

    /// Number of random world positions to write
    #[arg(short, long, default_value_t = DEFAULT_PLACEMENTS)]
    pub placements: usize,

    /// Random seed for reproducible placement
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Edge length of one exported cell in pixels
    #[arg(long, default_value_t = DEFAULT_PIXELS_PER_CELL)]
    pub pixels_per_cell: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// World-space origin assembled from the origin flags
    pub const fn origin(&self) -> [f32; 3] {
        [self.origin_x, self.origin_y, 0.0]
    }
}

/// Outcome of a placement run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementReport {
    /// Placements that landed inside the grid
    pub accepted: usize,
    /// Placements outside the grid that were dropped
    pub ignored: usize,
    /// Change notifications observed during the run
    pub notifications: usize,
}

/// Builds a grid from CLI arguments, fills it and exports the result
pub struct PlacementRunner {
    cli: Cli,
    progress: ProgressManager,
}

impl PlacementRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self { cli, progress }
    }

    /// Build the grid, apply placements and export the PNG
    ///
    /// # Errors
    ///
    /// Returns an error if the grid parameters are invalid or the export fails
    pub fn run(&mut self) -> Result<PlacementReport> {
        let start_time = Instant::now();
        let mut grid = self.build_grid()?;

        let notifications = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&notifications);
        grid.on_any_value_changed(move |_| counter.set(counter.get() + 1));

        self.scatter(&mut grid);

        export_grid_as_png(&grid, &PALETTE, self.cli.pixels_per_cell, &self.cli.output)?;

        let report = PlacementReport {
            accepted: self.progress.accepted(),
            ignored: self.progress.ignored(),
            notifications: notifications.get(),
        };

        info!(
            accepted = report.accepted,
            ignored = report.ignored,
            notifications = report.notifications,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            output = %self.cli.output.display(),
            "placement run complete"
        );

        Ok(report)
    }

    fn build_grid(&self) -> Result<Grid<u8>> {
        if self.cli.pixels_per_cell > MAX_PIXELS_PER_CELL {
            return Err(invalid_parameter(
                "pixels_per_cell",
                &self.cli.pixels_per_cell,
                &format!("must not exceed {MAX_PIXELS_PER_CELL}"),
            ));
        }

        let size = GridSize::new(self.cli.width, self.cli.height, self.cli.cell_size)?;

        // Reject oversized exports before allocating the grid
        output_dimensions(size.width(), size.height(), self.cli.pixels_per_cell)?;

        // The sampling window spans three grid extents per axis around the origin
        let span = self.cli.width.max(self.cli.height) as f32 * size.cell_size() * 3.0;
        let origin = self.cli.origin();
        if !(span + origin[0].abs().max(origin[1].abs())).is_finite() {
            return Err(invalid_parameter(
                "cell_size",
                &self.cli.cell_size,
                &"grid extent overflows world coordinates",
            ));
        }

        Ok(Grid::new(origin, size))
    }

    // Samples a window one grid extent wider on every side so some writes miss
    fn scatter(&mut self, grid: &mut Grid<u8>) {
        let mut rng = StdRng::seed_from_u64(self.cli.seed);
        let origin = grid.origin();
        let extent_x = grid.width() as f32 * grid.cell_size();
        let extent_y = grid.height() as f32 * grid.cell_size();
        let max_value = (PALETTE.len() - 1) as u8;

        self.progress.initialize(self.cli.placements);

        for _ in 0..self.cli.placements {
            let position = [
                rng.random_range((origin[0] - extent_x)..=(origin[0] + 2.0 * extent_x)),
                rng.random_range((origin[1] - extent_y)..=(origin[1] + 2.0 * extent_y)),
                origin[2],
            ];
            let value = rng.random_range(1..=max_value);

            let (x, y) = grid.cell_from_world_position(position);
            let accepted = grid.is_valid(x, y);
            grid.set_value_at_world(position, value);
            self.progress.record(accepted);
        }

        self.progress.finish();
    }
}
