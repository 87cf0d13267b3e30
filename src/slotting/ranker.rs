//! Distance ranking of candidates around the focal point.
//!
//! The assigner arbitrates contended sectors by processing order, so the
//! ranking must be deterministic: ascending distance, ties kept in input
//! order.

use std::collections::HashSet;

use crate::core::{PointId, ProjectedPoint, Vector3};

/// A candidate together with its distance from the focal point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankedCandidate {
    /// The candidate point
    pub point: ProjectedPoint,
    /// Euclidean distance from the focal point
    pub distance: f64,
}

/// Sort candidates by ascending distance from `focal`.
///
/// Any candidate carrying the focal identity is left out, and an identity
/// listed more than once keeps only its first occurrence. The sort is stable,
/// so equidistant candidates keep their input order. Non-finite distances
/// order after every finite one.
///
/// # Example
/// ```
/// use sector_grid::core::ProjectedPoint;
/// use sector_grid::slotting::rank_by_distance;
///
/// let focal = ProjectedPoint::planar(0, 0.0, 0.0);
/// let candidates = [
///     ProjectedPoint::planar(1, 0.0, 10.0),
///     ProjectedPoint::planar(2, 3.0, 4.0),
///     ProjectedPoint::planar(3, 10.0, 0.0),
/// ];
///
/// let ranked = rank_by_distance(&focal, &candidates);
/// let order: Vec<usize> = ranked.iter().map(|c| c.point.id.value()).collect();
/// assert_eq!(order, vec![2, 1, 3]);
/// ```
pub fn rank_by_distance(
    focal: &ProjectedPoint,
    candidates: &[ProjectedPoint],
) -> Vec<RankedCandidate> {
    let mut seen = HashSet::with_capacity(candidates.len());
    let mut ranked: Vec<RankedCandidate> = candidates
        .iter()
        .filter(|c| c.id != focal.id && seen.insert(c.id))
        .map(|c| RankedCandidate {
            point: *c,
            distance: c.distance(focal),
        })
        .collect();

    // NaN ranks alongside +inf so the order is total and sign-independent
    ranked.sort_by(|a, b| rank_key(a.distance).total_cmp(&rank_key(b.distance)));
    ranked
}

#[inline]
fn rank_key(distance: f64) -> f64 {
    if distance.is_nan() {
        f64::INFINITY
    } else {
        distance
    }
}

/// Identity of the candidate nearest to `position`, within `max_distance`.
///
/// Used to pick the focal point under the cursor. Ties go to the earlier
/// candidate. Only x/y are compared; candidates with non-finite positions are
/// ignored. A NaN `max_distance` matches nothing.
pub fn find_nearest(
    position: Vector3,
    candidates: &[ProjectedPoint],
    max_distance: f64,
) -> Option<PointId> {
    if max_distance.is_nan() {
        return None;
    }

    let target = Vector3::planar(position.x, position.y);
    let mut best: Option<(PointId, f64)> = None;
    for candidate in candidates {
        let dist = Vector3::planar(candidate.position.x, candidate.position.y).distance(&target);
        if !dist.is_finite() || dist > max_distance {
            continue;
        }
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((candidate.id, dist)),
        }
    }
    best.map(|(id, _)| id)
}
