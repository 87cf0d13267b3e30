//! Core types for the sector-grid library.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`Vector3`]: Vector arithmetic and segment projection
//! - [`PointId`] and [`ProjectedPoint`]: Identified points in screen space
//! - [`Bounds`]: Axis-aligned rectangles

mod bounds;
mod point;
mod vector;

pub use bounds::Bounds;
pub use point::{PointId, ProjectedPoint};
pub use vector::{Vector3, closest_point_on_segment, distance_to_segment};
