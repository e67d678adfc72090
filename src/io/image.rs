//! PNG export of palette grids
//!
//! Each cell becomes a square block of pixels colored by looking its value up
//! in a palette. World Y grows upward while image rows grow downward, so the
//! grid is flipped vertically on export.

use crate::io::configuration::MAX_IMAGE_DIMENSION;
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::spatial::{Coordinate, Grid};
use image::{ImageBuffer, Rgba};
use std::path::Path;

/// Pixel dimensions of an exported grid
///
/// # Errors
///
/// Returns `GridError::InvalidParameter` if the grid has no cells,
/// `pixels_per_cell` is zero, or either side would exceed
/// `MAX_IMAGE_DIMENSION` pixels
pub fn output_dimensions(
    width: usize,
    height: usize,
    pixels_per_cell: u32,
) -> Result<(u32, u32)> {
    if width == 0 || height == 0 {
        return Err(invalid_parameter(
            "grid",
            &format!("{width}x{height}"),
            &"cannot export a grid without cells",
        ));
    }
    if pixels_per_cell == 0 {
        return Err(invalid_parameter(
            "pixels_per_cell",
            &pixels_per_cell,
            &"must be positive",
        ));
    }

    let side = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(pixels_per_cell))
            .filter(|&pixels| pixels <= MAX_IMAGE_DIMENSION)
    };

    match (side(width), side(height)) {
        (Some(pixel_width), Some(pixel_height)) => Ok((pixel_width, pixel_height)),
        _ => Err(invalid_parameter(
            "pixels_per_cell",
            &pixels_per_cell,
            &format!("{width}x{height} cells would exceed {MAX_IMAGE_DIMENSION} pixels per side"),
        )),
    }
}

/// Export a grid of palette indices as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The output dimensions are rejected by [`output_dimensions`]
/// - A cell value has no palette entry
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png<F: Coordinate>(
    grid: &Grid<u8, F>,
    palette: &[[u8; 4]],
    pixels_per_cell: u32,
    output_path: &Path,
) -> Result<()> {
    let (width, height) = output_dimensions(grid.width(), grid.height(), pixels_per_cell)?;
    let mut img = ImageBuffer::new(width, height);

    for ((x, y), &value) in grid.iter() {
        let rgba = palette
            .get(value as usize)
            .copied()
            .ok_or(GridError::InvalidPaletteIndex {
                index: value as usize,
                palette_len: palette.len(),
            })?;

        let block_x = x as u32 * pixels_per_cell;
        let block_y = (grid.height() as u32 - 1 - y as u32) * pixels_per_cell;
        for dy in 0..pixels_per_cell {
            for dx in 0..pixels_per_cell {
                img.put_pixel(block_x + dx, block_y + dy, Rgba(rgba));
            }
        }
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GridError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GridError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
