//! Region selection over projected points.
//!
//! Independent of slotting: given a rectangle or polygon drawn in the shared
//! 2D space, report which candidates fall inside it.

mod region;

pub use region::{Polygon, RegionSpec, SelectionRegion};

use log::debug;

use crate::core::{PointId, ProjectedPoint};

/// Identities of the candidates inside `region`, in input order.
///
/// # Example
/// ```
/// use sector_grid::core::{PointId, ProjectedPoint, Vector3};
/// use sector_grid::selection::{SelectionRegion, select_in_region};
///
/// let region = SelectionRegion::rectangle(
///     Vector3::planar(0.0, 0.0),
///     Vector3::planar(10.0, 10.0),
/// );
/// let candidates = [
///     ProjectedPoint::planar(1, 5.0, 5.0),
///     ProjectedPoint::planar(2, 0.0, 0.0),
///     ProjectedPoint::planar(3, 11.0, 5.0),
/// ];
///
/// assert_eq!(
///     select_in_region(&region, &candidates),
///     vec![PointId(1), PointId(2)]
/// );
/// ```
pub fn select_in_region(region: &SelectionRegion, candidates: &[ProjectedPoint]) -> Vec<PointId> {
    let selected: Vec<PointId> = candidates
        .iter()
        .filter(|c| region.inside(c.position))
        .map(|c| c.id)
        .collect();

    debug!(
        "Selected {}/{} candidates",
        selected.len(),
        candidates.len()
    );
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vector3;

    #[test]
    fn test_select_preserves_input_order() {
        let region =
            SelectionRegion::rectangle(Vector3::planar(0.0, 0.0), Vector3::planar(10.0, 10.0));
        let candidates = [
            ProjectedPoint::planar(9, 1.0, 1.0),
            ProjectedPoint::planar(2, 50.0, 1.0),
            ProjectedPoint::planar(4, 9.0, 9.0),
            ProjectedPoint::planar(1, 5.0, 5.0),
        ];
        assert_eq!(
            select_in_region(&region, &candidates),
            vec![PointId(9), PointId(4), PointId(1)]
        );
    }

    #[test]
    fn test_select_polygon() {
        let region = SelectionRegion::polygon(vec![
            Vector3::planar(0.0, 0.0),
            Vector3::planar(10.0, 0.0),
            Vector3::planar(0.0, 10.0),
        ])
        .unwrap();
        let candidates = [
            ProjectedPoint::planar(1, 2.0, 2.0),
            ProjectedPoint::planar(2, 8.0, 8.0),
        ];
        assert_eq!(select_in_region(&region, &candidates), vec![PointId(1)]);
    }

    #[test]
    fn test_select_empty() {
        let region = SelectionRegion::rectangle(Vector3::ZERO, Vector3::planar(1.0, 1.0));
        assert!(select_in_region(&region, &[]).is_empty());
    }
}
