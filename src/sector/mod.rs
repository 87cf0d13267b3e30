//! Sector geometry: grid sizes, ray directions and sector-to-cell tables.
//!
//! A grid of size D has D²−1 sectors arranged around its center cell. Sector
//! `i` has a unit ray direction (from [`tables::RAY_OFFSETS`]) and a target
//! cell in the D×D grid. All sizes share the same ray list; size D uses the
//! first D²−1 rays, so the 3×3 grid is the inner ring, the 5×5 grid adds the
//! second ring and the 7×7 grid adds the third.
//!
//! The per-size tables are validated once, when [`SectorConfig::for_size`]
//! first builds them.

pub mod tables;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use crate::core::Vector3;
use crate::error::{Error, Result};

pub use tables::{MAX_SECTORS, RAY_OFFSETS, RING_SIZES, compass};

/// Supported neighbor grid sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GridSize {
    /// 3×3 grid, 8 sectors
    #[default]
    Three,
    /// 5×5 grid, 24 sectors
    Five,
    /// 7×7 grid, 48 sectors
    Seven,
}

impl GridSize {
    /// All supported sizes, smallest first.
    pub const ALL: [GridSize; 3] = [GridSize::Three, GridSize::Five, GridSize::Seven];

    /// Width and height of the grid (D)
    #[inline]
    pub fn dimension(&self) -> usize {
        match self {
            GridSize::Three => 3,
            GridSize::Five => 5,
            GridSize::Seven => 7,
        }
    }

    /// Number of sectors around the center (D²−1)
    #[inline]
    pub fn sector_count(&self) -> usize {
        let d = self.dimension();
        d * d - 1
    }

    /// Row and column index of the center cell (D/2)
    #[inline]
    pub fn center(&self) -> usize {
        self.dimension() / 2
    }

    /// How many sectors one candidate may try before it is dropped (D/2)
    #[inline]
    pub fn num_passes(&self) -> usize {
        self.dimension() / 2
    }
}

impl TryFrom<u8> for GridSize {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            3 => Ok(GridSize::Three),
            5 => Ok(GridSize::Five),
            7 => Ok(GridSize::Seven),
            other => Err(Error::InvalidGridSize(other)),
        }
    }
}

impl From<GridSize> for u8 {
    fn from(size: GridSize) -> u8 {
        size.dimension() as u8
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.dimension();
        write!(f, "{}x{}", d, d)
    }
}

/// Row/column position in a neighbor grid (row 0 is the top, north).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// Row index
    pub row: u8,
    /// Column index
    pub col: u8,
}

impl GridCell {
    /// Create a new cell
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index in a grid of the given dimension
    #[inline]
    pub fn index(&self, dimension: usize) -> usize {
        self.row as usize * dimension + self.col as usize
    }
}

/// Sector directions and cell mapping for one grid size.
#[derive(Clone, Debug)]
pub struct SectorConfig {
    size: GridSize,
    directions: Vec<Vector3>,
    cells: &'static [GridCell],
    /// Row-major grid index to sector index (None at the center)
    inverse: Vec<Option<usize>>,
}

impl SectorConfig {
    /// Build and validate the configuration for a grid size.
    ///
    /// Prefer [`SectorConfig::for_size`], which builds each size once.
    pub fn new(size: GridSize) -> Result<Self> {
        let count = size.sector_count();
        let cells = sector_cells(size);

        validate_tables(size, &RAY_OFFSETS[..count], cells)?;

        let directions = RAY_OFFSETS[..count]
            .iter()
            .map(|&offset| ray_direction(offset))
            .collect::<Result<Vec<_>>>()?;

        let d = size.dimension();
        let mut inverse = vec![None; d * d];
        for (sector, cell) in cells.iter().enumerate() {
            inverse[cell.index(d)] = Some(sector);
        }

        Ok(Self {
            size,
            directions,
            cells,
            inverse,
        })
    }

    /// Shared, validated configuration for a grid size.
    ///
    /// Built on first use and reused for the rest of the process.
    pub fn for_size(size: GridSize) -> Result<&'static SectorConfig> {
        static CONFIGS: [OnceLock<Result<SectorConfig>>; 3] =
            [OnceLock::new(), OnceLock::new(), OnceLock::new()];

        let slot = match size {
            GridSize::Three => &CONFIGS[0],
            GridSize::Five => &CONFIGS[1],
            GridSize::Seven => &CONFIGS[2],
        };
        slot.get_or_init(|| {
            let config = SectorConfig::new(size);
            if let Err(e) = &config {
                log::error!("Sector table for {} failed validation: {}", size, e);
            }
            config
        })
        .as_ref()
        .map_err(Clone::clone)
    }

    /// Grid size this configuration describes
    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Number of sectors (D²−1)
    #[inline]
    pub fn sector_count(&self) -> usize {
        self.directions.len()
    }

    /// Unit ray directions, indexed by sector
    #[inline]
    pub fn directions(&self) -> &[Vector3] {
        &self.directions
    }

    /// Target cell of a sector
    #[inline]
    pub fn cell(&self, sector: usize) -> Option<GridCell> {
        self.cells.get(sector).copied()
    }

    /// Sector that maps onto `(row, col)`; None for the center or out of range
    pub fn sector_at(&self, row: usize, col: usize) -> Option<usize> {
        let d = self.size.dimension();
        if row >= d || col >= d {
            return None;
        }
        self.inverse[row * d + col]
    }
}

/// Cell table for a grid size.
pub fn sector_cells(size: GridSize) -> &'static [GridCell] {
    match size {
        GridSize::Three => &tables::SECTOR_CELLS_3,
        GridSize::Five => &tables::SECTOR_CELLS_5,
        GridSize::Seven => &tables::SECTOR_CELLS_7,
    }
}

/// Unit direction of a ray offset.
///
/// The offset is reduced by the gcd of its components first, so rays that
/// point the same way from different rings get bit-identical directions and
/// tie exactly in the slot search.
pub fn ray_direction(offset: (i8, i8)) -> Result<Vector3> {
    let (dx, dy) = offset;
    let g = gcd(dx.unsigned_abs(), dy.unsigned_abs()).max(1) as f64;
    Vector3::planar(dx as f64 / g, dy as f64 / g).normalize()
}

fn gcd(mut a: u8, mut b: u8) -> u8 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Check that `offsets` and `cells` describe a valid sector layout for `size`.
///
/// - both tables have exactly D²−1 entries
/// - every cell lies inside the grid and is not the center
/// - no two sectors share a cell (with the count check this makes the
///   mapping a bijection onto the non-center cells)
/// - every cell sits at `center + offset`, so a sector's ray points at its cell
pub fn validate_tables(size: GridSize, offsets: &[(i8, i8)], cells: &[GridCell]) -> Result<()> {
    let d = size.dimension();
    let center = size.center();
    let expected = size.sector_count();
    let malformed = |reason: String| Error::MalformedSectorTable {
        size: d as u8,
        reason,
    };

    if offsets.len() != expected {
        return Err(malformed(format!(
            "expected {} ray offsets, found {}",
            expected,
            offsets.len()
        )));
    }
    if cells.len() != expected {
        return Err(malformed(format!(
            "expected {} cells, found {}",
            expected,
            cells.len()
        )));
    }

    let mut owner: Vec<Option<usize>> = vec![None; d * d];
    for (sector, (cell, &(dx, dy))) in cells.iter().zip(offsets).enumerate() {
        let (row, col) = (cell.row as usize, cell.col as usize);
        if row >= d || col >= d {
            return Err(malformed(format!(
                "sector {} maps outside the grid to ({}, {})",
                sector, row, col
            )));
        }
        if row == center && col == center {
            return Err(malformed(format!("sector {} maps onto the center", sector)));
        }
        if let Some(previous) = owner[cell.index(d)] {
            return Err(malformed(format!(
                "sectors {} and {} both map to ({}, {})",
                previous, sector, row, col
            )));
        }
        owner[cell.index(d)] = Some(sector);

        let expected_row = center as i32 + dy as i32;
        let expected_col = center as i32 + dx as i32;
        if row as i32 != expected_row || col as i32 != expected_col {
            return Err(malformed(format!(
                "sector {} ray ({}, {}) points at ({}, {}) but maps to ({}, {})",
                sector, dx, dy, expected_row, expected_col, row, col
            )));
        }
    }

    Ok(())
}

/// Validate the tables of every supported grid size.
pub fn validate_all() -> Result<()> {
    for size in GridSize::ALL {
        validate_tables(
            size,
            &RAY_OFFSETS[..size.sector_count()],
            sector_cells(size),
        )?;
    }
    Ok(())
}
