//! Constant sector tables.
//!
//! Rays are listed in ring order: the 8 neighbors at Chebyshev distance 1,
//! then the 16 at distance 2, then the 24 at distance 3. Each ring runs
//! clockwise on screen starting from north. Offsets are `(dx, dy)` with
//! `+x` east and `+y` south.
//!
//! ```text
//!   NW  N  NE        (0,0) (0,1) (0,2)
//!   W   *  E    ->   (1,0)   *   (1,2)
//!   SW  S  SE        (2,0) (2,1) (2,2)
//! ```

use super::GridCell;

/// Number of rays in each concentric ring.
pub const RING_SIZES: [usize; 3] = [8, 16, 24];

/// Total number of rays (7x7 grid minus its center).
pub const MAX_SECTORS: usize = 48;

/// Ray offsets from the focal cell, in ring order.
pub const RAY_OFFSETS: [(i8, i8); MAX_SECTORS] = [
    // Ring 1: N, NE, E, SE, S, SW, W, NW
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    // Ring 2
    (0, -2),
    (1, -2),
    (2, -2),
    (2, -1),
    (2, 0),
    (2, 1),
    (2, 2),
    (1, 2),
    (0, 2),
    (-1, 2),
    (-2, 2),
    (-2, 1),
    (-2, 0),
    (-2, -1),
    (-2, -2),
    (-1, -2),
    // Ring 3
    (0, -3),
    (1, -3),
    (2, -3),
    (3, -3),
    (3, -2),
    (3, -1),
    (3, 0),
    (3, 1),
    (3, 2),
    (3, 3),
    (2, 3),
    (1, 3),
    (0, 3),
    (-1, 3),
    (-2, 3),
    (-3, 3),
    (-3, 2),
    (-3, 1),
    (-3, 0),
    (-3, -1),
    (-3, -2),
    (-3, -3),
    (-2, -3),
    (-1, -3),
];

const fn cell(row: u8, col: u8) -> GridCell {
    GridCell { row, col }
}

/// Sector index to cell for the 3x3 grid.
pub static SECTOR_CELLS_3: [GridCell; 8] = [
    cell(0, 1),
    cell(0, 2),
    cell(1, 2),
    cell(2, 2),
    cell(2, 1),
    cell(2, 0),
    cell(1, 0),
    cell(0, 0),
];

/// Sector index to cell for the 5x5 grid.
pub static SECTOR_CELLS_5: [GridCell; 24] = [
    // Ring 1
    cell(1, 2),
    cell(1, 3),
    cell(2, 3),
    cell(3, 3),
    cell(3, 2),
    cell(3, 1),
    cell(2, 1),
    cell(1, 1),
    // Ring 2
    cell(0, 2),
    cell(0, 3),
    cell(0, 4),
    cell(1, 4),
    cell(2, 4),
    cell(3, 4),
    cell(4, 4),
    cell(4, 3),
    cell(4, 2),
    cell(4, 1),
    cell(4, 0),
    cell(3, 0),
    cell(2, 0),
    cell(1, 0),
    cell(0, 0),
    cell(0, 1),
];

/// Sector index to cell for the 7x7 grid.
pub static SECTOR_CELLS_7: [GridCell; 48] = [
    // Ring 1
    cell(2, 3),
    cell(2, 4),
    cell(3, 4),
    cell(4, 4),
    cell(4, 3),
    cell(4, 2),
    cell(3, 2),
    cell(2, 2),
    // Ring 2
    cell(1, 3),
    cell(1, 4),
    cell(1, 5),
    cell(2, 5),
    cell(3, 5),
    cell(4, 5),
    cell(5, 5),
    cell(5, 4),
    cell(5, 3),
    cell(5, 2),
    cell(5, 1),
    cell(4, 1),
    cell(3, 1),
    cell(2, 1),
    cell(1, 1),
    cell(1, 2),
    // Ring 3
    cell(0, 3),
    cell(0, 4),
    cell(0, 5),
    cell(0, 6),
    cell(1, 6),
    cell(2, 6),
    cell(3, 6),
    cell(4, 6),
    cell(5, 6),
    cell(6, 6),
    cell(6, 5),
    cell(6, 4),
    cell(6, 3),
    cell(6, 2),
    cell(6, 1),
    cell(6, 0),
    cell(5, 0),
    cell(4, 0),
    cell(3, 0),
    cell(2, 0),
    cell(1, 0),
    cell(0, 0),
    cell(0, 1),
    cell(0, 2),
];

/// Sector indices of the inner ring, usable with every grid size.
pub mod compass {
    /// North
    pub const N: usize = 0;
    /// North-east
    pub const NE: usize = 1;
    /// East
    pub const E: usize = 2;
    /// South-east
    pub const SE: usize = 3;
    /// South
    pub const S: usize = 4;
    /// South-west
    pub const SW: usize = 5;
    /// West
    pub const W: usize = 6;
    /// North-west
    pub const NW: usize = 7;
}
