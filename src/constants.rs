//! Constants for board geometry, search defaults and positional weights.
//!
//! The board is stored as a flat 64-cell array indexed by `x + N * y`,
//! where `x` is the column and `y` the row.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 8;

/// Total number of cells.
pub const BOARDSIZE: usize = N * N;

/// Offsets to the eight neighbouring cells as `(dx, dy)`.
/// Order: N, NE, E, SE, S, SW, W, NW
pub const DIRECTIONS: [(isize, isize); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

// =============================================================================
// Search Parameters
// =============================================================================

/// Default number of plies searched after the root move.
pub const DEFAULT_DEPTH: u32 = 3;

/// Default wall-clock budget per side for a whole game, in milliseconds.
pub const DEFAULT_TIME_MS: u64 = 60_000;

// =============================================================================
// Positional Weights
// =============================================================================

/// Weight of a corner cell.
pub const CORNER: i32 = 10;

/// Weight of a cell diagonally adjacent to a corner (an "X-square").
pub const CORNER_DIAGONAL: i32 = -10;

/// Weight of an edge cell orthogonally adjacent to a corner (a "C-square").
pub const CORNER_EDGE: i32 = -5;

/// Weight of any other edge cell.
pub const EDGE: i32 = 5;

/// Weight of an interior cell.
pub const INTERIOR: i32 = 1;

/// Static positional weight table, row-major (`WEIGHTS[y][x]`).
pub const WEIGHTS: [[i32; N]; N] = [
    [10, -5, 5, 5, 5, 5, -5, 10],
    [-5, -10, 1, 1, 1, 1, -10, -5],
    [5, 1, 1, 1, 1, 1, 1, 5],
    [5, 1, 1, 1, 1, 1, 1, 5],
    [5, 1, 1, 1, 1, 1, 1, 5],
    [5, 1, 1, 1, 1, 1, 1, 5],
    [-5, -10, 1, 1, 1, 1, -10, -5],
    [10, -5, 5, 5, 5, 5, -5, 10],
];

// =============================================================================
// Cell Glyphs
// =============================================================================

/// Black disc.
pub const DISC_BLACK: char = 'X';

/// White disc.
pub const DISC_WHITE: char = 'O';

/// Empty cell.
pub const EMPTY: char = '.';
