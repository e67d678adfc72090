//! Grid limits and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Default grid width in cells
pub const DEFAULT_WIDTH: usize = 16;
/// Default grid height in cells
pub const DEFAULT_HEIGHT: usize = 9;
/// Default world-space size of one cell
pub const DEFAULT_CELL_SIZE: f32 = 10.0;
/// Default number of random placements
pub const DEFAULT_PLACEMENTS: usize = 200;
/// Fixed seed for reproducible placement runs
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Edge length of one exported cell in pixels
pub const DEFAULT_PIXELS_PER_CELL: u32 = 16;
/// Upper bound on exported pixels per cell
pub const MAX_PIXELS_PER_CELL: u32 = 256;
/// Upper bound on either side of an exported image in pixels
pub const MAX_IMAGE_DIMENSION: u32 = 8_192;

/// Colors for exported cell values; value 0 is the empty cell
pub const PALETTE: [[u8; 4]; 8] = [
    [0, 0, 0, 0],
    [230, 57, 70, 255],
    [241, 143, 1, 255],
    [255, 214, 10, 255],
    [42, 157, 143, 255],
    [38, 70, 83, 255],
    [131, 56, 236, 255],
    [240, 240, 240, 255],
];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
