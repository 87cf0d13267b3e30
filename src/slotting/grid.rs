//! Sector slots to row/column grid.

use std::fmt;

use crate::core::PointId;
use crate::error::Result;
use crate::sector::{GridSize, SectorConfig};

use super::assigner::NeighborSlots;

/// D×D neighbor grid, row-major, row 0 at the top (north).
///
/// The center cell always holds the focal identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborGrid {
    size: GridSize,
    focal: PointId,
    cells: Vec<Option<PointId>>,
}

impl NeighborGrid {
    /// Grid size
    #[inline]
    pub fn grid_size(&self) -> GridSize {
        self.size
    }

    /// Width and height (D)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.size.dimension()
    }

    /// Content of `(row, col)`; None when empty or out of range
    pub fn get(&self, row: usize, col: usize) -> Option<PointId> {
        let d = self.dimension();
        if row >= d || col >= d {
            return None;
        }
        self.cells[row * d + col]
    }

    /// Focal identity at the center cell
    #[inline]
    pub fn center(&self) -> PointId {
        self.focal
    }

    /// Cells in row-major order
    #[inline]
    pub fn as_slice(&self) -> &[Option<PointId>] {
        &self.cells
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Option<PointId>]> {
        self.cells.chunks(self.dimension())
    }

    /// Assigned neighbors as `(row, col, id)`, excluding the center
    pub fn assigned(&self) -> impl Iterator<Item = (usize, usize, PointId)> + '_ {
        let d = self.dimension();
        let c = self.size.center();
        self.cells
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != c * d + c)
            .filter_map(move |(i, cell)| cell.map(|id| (i / d, i % d, id)))
    }

    /// Position of `id` in the grid
    pub fn position_of(&self, id: PointId) -> Option<(usize, usize)> {
        let d = self.dimension();
        self.cells
            .iter()
            .position(|cell| *cell == Some(id))
            .map(|i| (i / d, i % d))
    }
}

impl fmt::Display for NeighborGrid {
    /// Fixed-width table; the focal point is bracketed, empty cells are `.`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.dimension();
        let c = self.size.center();

        let labels: Vec<String> = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, cell)| match cell {
                Some(id) if i == c * d + c => format!("[{}]", id),
                Some(id) => id.to_string(),
                None => ".".to_string(),
            })
            .collect();
        let width = labels.iter().map(String::len).max().unwrap_or(1);

        for row in labels.chunks(d) {
            let line: Vec<String> = row.iter().map(|l| format!("{:>width$}", l)).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Lay out sector slots as a D×D grid with `focal` at the center.
///
/// Pure: the same slots always produce the same grid.
pub fn map_to_grid(focal: PointId, slots: &NeighborSlots) -> Result<NeighborGrid> {
    let size = slots.grid_size();
    let config = SectorConfig::for_size(size)?;
    let d = size.dimension();
    let c = size.center();

    let mut cells = vec![None; d * d];
    cells[c * d + c] = Some(focal);

    for (sector, slot) in slots.as_slice().iter().enumerate() {
        if let Some(cell) = config.cell(sector) {
            cells[cell.index(d)] = *slot;
        }
    }

    Ok(NeighborGrid { size, focal, cells })
}
