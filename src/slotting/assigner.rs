//! Greedy multi-pass sector assignment.
//!
//! Candidates are visited nearest first. Each one looks for the sector whose
//! ray passes closest to it; if that sector is taken it excludes it and
//! looks again, up to `D / 2` times, and is dropped if every attempt lands on
//! an occupied sector. Nearer candidates therefore always get first claim on
//! their best-fit sector.
//!
//! ```text
//!            ray (focal + dir * ray_scale)
//!   focal ●─────────────────────────────────▶
//!                  ┊ distance to segment
//!                  ○ candidate
//! ```

use log::{debug, trace};

use crate::core::{PointId, ProjectedPoint, Vector3, distance_to_segment};
use crate::error::{Error, Result};
use crate::sector::{GridSize, SectorConfig};

use super::ranker::RankedCandidate;

/// Default ray length in screen units.
///
/// Long enough that rays behave as infinite for any on-screen candidate.
pub const DEFAULT_RAY_SCALE: f64 = 1.0e6;

/// Accepted ray length range; squared lengths must stay normal f64 values.
pub const RAY_SCALE_RANGE: (f64, f64) = (1.0e-150, 1.0e150);

/// Sector-indexed assignment result (the focal point is not included).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborSlots {
    size: GridSize,
    slots: Vec<Option<PointId>>,
}

impl NeighborSlots {
    /// All-empty slots for a grid size
    pub fn empty(size: GridSize) -> Self {
        Self {
            size,
            slots: vec![None; size.sector_count()],
        }
    }

    /// Grid size the slots were assigned for
    #[inline]
    pub fn grid_size(&self) -> GridSize {
        self.size
    }

    /// Number of slots (D²−1), assigned or not
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false; every grid size has sectors
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Content of a sector; None when empty or out of range
    #[inline]
    pub fn get(&self, sector: usize) -> Option<PointId> {
        self.slots.get(sector).copied().flatten()
    }

    /// Slots in sector order
    #[inline]
    pub fn as_slice(&self) -> &[Option<PointId>] {
        &self.slots
    }

    /// Number of assigned slots
    pub fn assigned_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// True when every sector holds a candidate
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Sector holding `id`, if any
    pub fn sector_of(&self, id: PointId) -> Option<usize> {
        self.slots.iter().position(|s| *s == Some(id))
    }
}

/// Outcome of one assignment run.
#[derive(Clone, Debug, PartialEq)]
pub struct SlotAssignment {
    /// Sector-indexed result
    pub slots: NeighborSlots,
    /// Candidates whose every attempt hit an occupied sector
    pub dropped: Vec<PointId>,
    /// Candidates skipped because they coincide with the focal point or have
    /// non-finite coordinates
    pub degenerate: Vec<PointId>,
}

/// Assign ranked candidates to the sectors of `config`.
///
/// `ranked` must be ordered nearest first (see
/// [`rank_by_distance`](super::rank_by_distance)). Only the x/y components of
/// positions are used, measured relative to the focal point. Stops as soon as
/// every sector is filled; candidates after that point are neither assigned
/// nor reported. An identity that is already placed is not placed again.
///
/// Fails with [`Error::InvalidConfig`] for a non-positive or non-finite
/// `ray_scale`, and with [`Error::DegenerateGeometry`] when the focal point
/// itself is not finite.
pub fn assign_slots(
    focal: &ProjectedPoint,
    ranked: &[RankedCandidate],
    config: &SectorConfig,
    ray_scale: f64,
) -> Result<SlotAssignment> {
    validate_ray_scale(ray_scale)?;

    let origin = flatten(focal.position);
    if !origin.is_finite() {
        return Err(Error::DegenerateGeometry(
            "focal point has non-finite coordinates",
        ));
    }

    let size = config.size();
    let sector_count = config.sector_count();
    let num_passes = size.num_passes();

    // Rays start at the focal point, which is the local origin
    let ray_ends: Vec<Vector3> = config
        .directions()
        .iter()
        .map(|dir| *dir * ray_scale)
        .collect();

    let mut slots = NeighborSlots::empty(size);
    let mut filled = 0;
    let mut excluded = vec![false; sector_count];
    let mut dropped = Vec::new();
    let mut degenerate = Vec::new();

    for candidate in ranked {
        if filled == sector_count {
            break;
        }

        let id = candidate.point.id;
        if slots.sector_of(id).is_some() {
            trace!("Candidate {} already placed", id);
            continue;
        }

        let position = flatten(candidate.point.position) - origin;
        if position == Vector3::ZERO || !position.magnitude().is_finite() {
            trace!("Candidate {} skipped: coincident or non-finite", id);
            degenerate.push(id);
            continue;
        }

        excluded.fill(false);
        let mut placed = false;

        for pass in 0..num_passes {
            let Some(sector) = nearest_open_ray(&ray_ends, position, &excluded)? else {
                break;
            };

            if slots.slots[sector].is_none() {
                slots.slots[sector] = Some(id);
                filled += 1;
                placed = true;
                trace!("Candidate {} -> sector {} (pass {})", id, sector, pass + 1);
                break;
            }

            trace!(
                "Candidate {} found sector {} occupied by {:?}",
                id,
                sector,
                slots.slots[sector]
            );
            excluded[sector] = true;
        }

        if !placed {
            trace!("Candidate {} dropped after {} passes", id, num_passes);
            dropped.push(id);
        }
    }

    debug!(
        "Slotted {}/{} sectors around {} ({}): {} dropped, {} degenerate",
        filled,
        sector_count,
        focal.id,
        size,
        dropped.len(),
        degenerate.len()
    );

    Ok(SlotAssignment {
        slots,
        dropped,
        degenerate,
    })
}

/// Reject ray lengths outside [`RAY_SCALE_RANGE`] (including NaN).
pub fn validate_ray_scale(ray_scale: f64) -> Result<()> {
    let (min, max) = RAY_SCALE_RANGE;
    if (min..=max).contains(&ray_scale) {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!(
            "ray_scale must be between {:e} and {:e}, got {}",
            min, max, ray_scale
        )))
    }
}

/// Non-excluded sector whose ray segment passes closest to `point`.
///
/// Rays run from the local origin to `ray_ends`. Strict comparison: on exact
/// ties the lowest sector index wins.
fn nearest_open_ray(
    ray_ends: &[Vector3],
    point: Vector3,
    excluded: &[bool],
) -> Result<Option<usize>> {
    let mut best: Option<(usize, f64)> = None;

    for (sector, end) in ray_ends.iter().enumerate() {
        if excluded[sector] {
            continue;
        }
        let dist = distance_to_segment(Vector3::ZERO, *end, point)?;
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((sector, dist)),
        }
    }

    Ok(best.map(|(sector, _)| sector))
}

#[inline]
fn flatten(v: Vector3) -> Vector3 {
    Vector3::planar(v.x, v.y)
}
