//! Test utilities for sector-grid integration tests.
//!
//! Builders for focal points, candidate layouts and grid expectations.

#![allow(dead_code)]

use std::path::PathBuf;

use sector_grid::GridSize;
use sector_grid::core::{PointId, ProjectedPoint};

/// Focal point with identity 0 at the origin.
pub fn focal_at_origin() -> ProjectedPoint {
    ProjectedPoint::planar(0, 0.0, 0.0)
}

/// Every lattice offset of a D×D grid except the center, scaled by `spacing`
/// and placed around `focal`. Identities start at 1 in row-major order.
pub fn lattice(size: GridSize, focal: &ProjectedPoint, spacing: f64) -> Vec<ProjectedPoint> {
    let c = size.center() as i32;
    let mut points = Vec::new();
    let mut id = 1;
    for dy in -c..=c {
        for dx in -c..=c {
            if dx == 0 && dy == 0 {
                continue;
            }
            points.push(ProjectedPoint::planar(
                id,
                focal.position.x + dx as f64 * spacing,
                focal.position.y + dy as f64 * spacing,
            ));
            id += 1;
        }
    }
    points
}

/// Identity of the lattice point at `(row, col)`, matching [`lattice`].
pub fn lattice_id(size: GridSize, row: usize, col: usize) -> Option<PointId> {
    let d = size.dimension();
    let c = size.center();
    if row == c && col == c {
        return None;
    }
    let index = row * d + col;
    // Cells after the center are shifted down by one
    let id = if index > c * d + c { index } else { index + 1 };
    Some(PointId(id))
}

/// Points spread over a circle, evenly spaced in angle.
pub fn ring(n: usize, radius: f64, first_id: usize) -> Vec<ProjectedPoint> {
    (0..n)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / n as f64;
            ProjectedPoint::planar(first_id + i, radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Deterministic pseudo-random scatter in `[-extent, extent]²`.
pub fn scatter(n: usize, extent: f64, seed: u64) -> Vec<ProjectedPoint> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
    };
    (0..n)
        .map(|i| ProjectedPoint::planar(i + 1, next() * extent, next() * extent))
        .collect()
}

/// Path of a file shipped with the crate.
pub fn crate_file(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}
