//! Rectangle and polygon selection regions.

use serde::{Deserialize, Serialize};

use crate::core::{Bounds, Vector3};
use crate::error::{Error, Result};

/// Closed polygon in the x/y plane with a cached bounding box.
///
/// The last vertex connects back to the first; repeating the first vertex at
/// the end is allowed but not needed.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vector3>,
    bounds: Bounds,
}

impl Polygon {
    /// Build a polygon, rejecting fewer than 3 or non-finite vertices.
    pub fn new(vertices: Vec<Vector3>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::InvalidRegion(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        if let Some(i) = vertices
            .iter()
            .position(|v| !v.x.is_finite() || !v.y.is_finite())
        {
            return Err(Error::InvalidRegion(format!("polygon vertex {} is not finite", i)));
        }

        let bounds = Bounds::from_points(&vertices);
        Ok(Self { vertices, bounds })
    }

    /// Vertices as given, without a closing repeat added
    #[inline]
    pub fn vertices(&self) -> &[Vector3] {
        &self.vertices
    }

    /// Bounding box of the vertices, used to reject far points early
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Even-odd crossing test.
    ///
    /// Half-open. A point on an edge with the interior toward +x counts as
    /// inside, one on an edge with the interior toward −x as outside.
    /// Horizontal edges count as inside when the interior lies toward +y.
    /// Polygons sharing an edge therefore never both claim a point.
    pub fn contains(&self, point: Vector3) -> bool {
        let (px, py) = (point.x, point.y);
        if !px.is_finite() || !py.is_finite() || !self.bounds.contains(point) {
            return false;
        }

        let n = self.vertices.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (vi, vj) = (self.vertices[i], self.vertices[j]);
            if (vi.y > py) != (vj.y > py) {
                let cross_x = (vj.x - vi.x) * (py - vi.y) / (vj.y - vi.y) + vi.x;
                if px < cross_x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

/// Area of the shared 2D space picked by the user.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectionRegion {
    /// Axis-aligned box, edges inclusive
    Rectangle(Bounds),
    /// Arbitrary closed polygon
    Polygon(Polygon),
}

impl SelectionRegion {
    /// Rectangle from two opposite corners in any order
    pub fn rectangle(a: Vector3, b: Vector3) -> Self {
        Self::Rectangle(Bounds::from_corners(a, b))
    }

    /// Polygon from its vertices
    pub fn polygon(vertices: Vec<Vector3>) -> Result<Self> {
        Ok(Self::Polygon(Polygon::new(vertices)?))
    }

    /// True when `point` lies in the region. Only x/y are tested.
    pub fn inside(&self, point: Vector3) -> bool {
        match self {
            Self::Rectangle(bounds) => bounds.contains(point),
            Self::Polygon(polygon) => polygon.contains(point),
        }
    }
}

/// Serialized form of a [`SelectionRegion`].
///
/// ```yaml
/// { kind: rectangle, corners: [{ x: 0, y: 0 }, { x: 10, y: 10 }] }
/// # or
/// { kind: polygon, vertices: [{ x: 0, y: 0 }, { x: 10, y: 0 }, { x: 5, y: 8 }] }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegionSpec {
    /// Two opposite corners, in any order
    Rectangle { corners: [Vector3; 2] },
    /// At least 3 vertices, implicitly closed
    Polygon { vertices: Vec<Vector3> },
}

impl TryFrom<RegionSpec> for SelectionRegion {
    type Error = Error;

    fn try_from(spec: RegionSpec) -> Result<Self> {
        match spec {
            RegionSpec::Rectangle { corners: [a, b] } => {
                if !(a.x.is_finite() && a.y.is_finite() && b.x.is_finite() && b.y.is_finite()) {
                    return Err(Error::InvalidRegion(
                        "rectangle corners must be finite".to_string(),
                    ));
                }
                Ok(Self::rectangle(a, b))
            }
            RegionSpec::Polygon { vertices } => Self::polygon(vertices),
        }
    }
}
