//! Axis-aligned bounding box for rectangle selection.
//!
//! [`Bounds`] is what a rubber-band drag produces: two corners in any order,
//! normalized so `min <= max` on both axes.
//!
//! # Usage
//!
//! ```rust
//! use sector_grid::core::{Bounds, Vector3};
//!
//! // Corners may come in any order
//! let bounds = Bounds::from_corners(
//!     Vector3::planar(10.0, 8.0),
//!     Vector3::planar(0.0, 0.0),
//! );
//!
//! assert_eq!(bounds.min, Vector3::planar(0.0, 0.0));
//! assert_eq!(bounds.max, Vector3::planar(10.0, 8.0));
//! assert!(bounds.contains(Vector3::planar(5.0, 4.0)));
//! assert!(bounds.contains(Vector3::planar(0.0, 8.0))); // edges are inclusive
//! ```

use serde::{Deserialize, Serialize};

use super::vector::Vector3;

/// Axis-aligned bounding box in the x/y plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum corner (smallest x and y values).
    pub min: Vector3,
    /// Maximum corner (largest x and y values).
    pub max: Vector3,
}

impl Bounds {
    /// Create a bounding box from two opposite corners in any order.
    #[inline]
    pub fn from_corners(a: Vector3, b: Vector3) -> Self {
        Self {
            min: Vector3::planar(a.x.min(b.x), a.y.min(b.y)),
            max: Vector3::planar(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Create an empty (invalid) bounding box.
    ///
    /// The empty bounds has min > max, so it will expand to fit any point.
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: Vector3::planar(f64::INFINITY, f64::INFINITY),
            max: Vector3::planar(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Smallest box containing every point; empty for an empty slice.
    pub fn from_points(points: &[Vector3]) -> Self {
        let mut bounds = Self::empty();
        for &p in points {
            bounds.expand_to_include(p);
        }
        bounds
    }

    /// Check if the bounds are empty (invalid).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Check if a point is inside the bounding box (edges inclusive, z ignored).
    #[inline]
    pub fn contains(&self, point: Vector3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Expand bounds to include a point.
    #[inline]
    pub fn expand_to_include(&mut self, point: Vector3) {
        self.min = Vector3::planar(self.min.x.min(point.x), self.min.y.min(point.y));
        self.max = Vector3::planar(self.max.x.max(point.x), self.max.y.max(point.y));
    }
}
