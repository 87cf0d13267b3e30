//! Neighbor slotting: rank, assign, and lay out candidates around a focal
//! point.
//!
//! ```text
//! candidates ──▶ rank_by_distance ──▶ assign_slots ──▶ map_to_grid
//!                (nearest first)      (D²−1 sectors)   (D×D, focal at center)
//! ```
//!
//! [`NeighborSlotter`] bundles the three stages behind a grid size and ray
//! scale.

mod assigner;
mod grid;
mod ranker;

pub use assigner::{
    DEFAULT_RAY_SCALE, NeighborSlots, RAY_SCALE_RANGE, SlotAssignment, assign_slots,
    validate_ray_scale,
};
pub use grid::{NeighborGrid, map_to_grid};
pub use ranker::{RankedCandidate, find_nearest, rank_by_distance};

use crate::core::ProjectedPoint;
use crate::error::Result;
use crate::sector::{GridSize, SectorConfig};

/// Stateless slotting service for one grid size.
///
/// # Example
/// ```
/// use sector_grid::core::{PointId, ProjectedPoint};
/// use sector_grid::sector::GridSize;
/// use sector_grid::slotting::NeighborSlotter;
///
/// let slotter = NeighborSlotter::new(GridSize::Three);
/// let focal = ProjectedPoint::planar(0, 0.0, 0.0);
/// let candidates = [ProjectedPoint::planar(1, 0.0, -10.0)];
///
/// let grid = slotter.slot(&focal, &candidates).unwrap();
/// assert_eq!(grid.center(), PointId(0));
/// assert_eq!(grid.get(0, 1), Some(PointId(1)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeighborSlotter {
    grid_size: GridSize,
    ray_scale: f64,
}

impl Default for NeighborSlotter {
    fn default() -> Self {
        Self::new(GridSize::default())
    }
}

impl NeighborSlotter {
    /// Slotter with the default ray scale
    pub fn new(grid_size: GridSize) -> Self {
        Self {
            grid_size,
            ray_scale: DEFAULT_RAY_SCALE,
        }
    }

    /// Slotter from a raw grid dimension (3, 5 or 7)
    pub fn from_dimension(dimension: u8) -> Result<Self> {
        Ok(Self::new(GridSize::try_from(dimension)?))
    }

    /// Replace the ray scale; must lie in [`RAY_SCALE_RANGE`]
    pub fn with_ray_scale(mut self, ray_scale: f64) -> Result<Self> {
        validate_ray_scale(ray_scale)?;
        self.ray_scale = ray_scale;
        Ok(self)
    }

    /// Grid size every call slots into
    #[inline]
    pub fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    /// Sector ray length in screen units
    #[inline]
    pub fn ray_scale(&self) -> f64 {
        self.ray_scale
    }

    /// Rank and assign candidates, returning the full report.
    pub fn assign(
        &self,
        focal: &ProjectedPoint,
        candidates: &[ProjectedPoint],
    ) -> Result<SlotAssignment> {
        let config = SectorConfig::for_size(self.grid_size)?;
        let ranked = rank_by_distance(focal, candidates);
        assign_slots(focal, &ranked, config, self.ray_scale)
    }

    /// Rank, assign and lay out candidates as a neighbor grid.
    pub fn slot(
        &self,
        focal: &ProjectedPoint,
        candidates: &[ProjectedPoint],
    ) -> Result<NeighborGrid> {
        let assignment = self.assign(focal, candidates)?;
        map_to_grid(focal.id, &assignment.slots)
    }
}
