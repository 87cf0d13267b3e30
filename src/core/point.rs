//! Identified points in projected screen space.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::vector::Vector3;

/// Opaque key of a point in the caller's point store.
///
/// Never interpreted by the slotting engine beyond equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(pub usize);

impl PointId {
    /// Create a new point ID.
    #[inline]
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    #[inline]
    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point already projected into the shared 2D space, with its identity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    /// Identity in the caller's store
    pub id: PointId,
    /// Projected position (z unused)
    #[serde(flatten)]
    pub position: Vector3,
}

impl ProjectedPoint {
    /// Create a point from an identity and a position
    #[inline]
    pub fn new(id: PointId, position: Vector3) -> Self {
        Self { id, position }
    }

    /// Create a planar point from raw parts
    #[inline]
    pub fn planar(id: usize, x: f64, y: f64) -> Self {
        Self::new(PointId(id), Vector3::planar(x, y))
    }

    /// Distance between two points in the x/y plane (z ignored)
    #[inline]
    pub fn distance(&self, other: &ProjectedPoint) -> f64 {
        let dx = self.position.x - other.position.x;
        let dy = self.position.y - other.position.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_id() {
        let id = PointId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
        assert!(PointId(1) < PointId(2));
    }

    #[test]
    fn test_projected_point_distance() {
        let a = ProjectedPoint::planar(0, 0.0, 0.0);
        let b = ProjectedPoint::planar(1, 6.0, 8.0);
        assert_eq!(a.distance(&b), 10.0);

        let raised = ProjectedPoint::new(PointId(2), Vector3::new(6.0, 8.0, 100.0));
        assert_eq!(a.distance(&raised), 10.0);
    }

    #[test]
    fn test_projected_point_yaml() {
        let p: ProjectedPoint = serde_yaml::from_str("{ id: 7, x: 1.5, y: -2.0 }").unwrap();
        assert_eq!(p, ProjectedPoint::planar(7, 1.5, -2.0));
    }
}
