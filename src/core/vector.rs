//! Three-component vector used for projected point positions and ray directions.
//!
//! Positions arrive already projected into screen space, so `z` is carried
//! but ignored by the slotting engine.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{Error, Result};

/// Screen-space vector (x east, y south, z unused by slotting)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    #[serde(default)]
    pub z: f64,
}

impl Vector3 {
    /// Zero vector (origin)
    pub const ZERO: Vector3 = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new vector
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a planar vector with `z = 0`
    #[inline]
    pub const fn planar(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Component-wise difference (`self - other`)
    #[inline]
    pub fn subtract(&self, other: &Vector3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Multiply every component by `scalar`
    #[inline]
    pub fn scale(&self, scalar: f64) -> Vector3 {
        Vector3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Dot product
    #[inline]
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product
    #[inline]
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared length (avoids sqrt)
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Length
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// True when every component is finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Unit vector in the same direction.
    ///
    /// Fails with [`Error::DegenerateGeometry`] for zero-length or non-finite
    /// input instead of dividing by zero.
    #[inline]
    pub fn normalize(&self) -> Result<Vector3> {
        let len = self.magnitude();
        if len > 0.0 && len.is_finite() {
            Ok(Vector3::new(self.x / len, self.y / len, self.z / len))
        } else {
            Err(Error::DegenerateGeometry(
                "cannot normalize a zero-length vector",
            ))
        }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &Vector3) -> f64 {
        self.subtract(other).magnitude()
    }

    /// Squared distance to another point
    #[inline]
    pub fn distance_squared(&self, other: &Vector3) -> f64 {
        self.subtract(other).magnitude_squared()
    }
}

impl Add for Vector3 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        self.subtract(&other)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        self.scale(scalar)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

/// Closest point to `p` on the segment `[a, b]`.
///
/// The projection of `p` onto the line through `a` and `b` is clamped to the
/// segment:
///
/// ```text
/// dir = normalize(b - a)
/// t   = dot(dir, p - a)
/// t <= 0         -> a
/// t >= |b - a|   -> b
/// otherwise      -> a + dir * t
/// ```
///
/// Fails with [`Error::DegenerateGeometry`] when `a == b`.
///
/// # Example
/// ```
/// use sector_grid::core::{Vector3, closest_point_on_segment};
///
/// let a = Vector3::planar(0.0, 0.0);
/// let b = Vector3::planar(10.0, 0.0);
///
/// let mid = closest_point_on_segment(a, b, Vector3::planar(4.0, 3.0)).unwrap();
/// assert_eq!(mid, Vector3::planar(4.0, 0.0));
///
/// let before = closest_point_on_segment(a, b, Vector3::planar(-5.0, 1.0)).unwrap();
/// assert_eq!(before, a);
/// ```
pub fn closest_point_on_segment(a: Vector3, b: Vector3, p: Vector3) -> Result<Vector3> {
    let dir = (b - a).normalize()?;
    let t = dir.dot(&(p - a));

    if t <= 0.0 {
        Ok(a)
    } else if t >= a.distance(&b) {
        Ok(b)
    } else {
        Ok(a + dir * t)
    }
}

/// Distance from `p` to the segment `[a, b]`.
#[inline]
pub fn distance_to_segment(a: Vector3, b: Vector3, p: Vector3) -> Result<f64> {
    Ok(p.distance(&closest_point_on_segment(a, b, p)?))
}
