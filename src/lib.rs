//! # Sector-Grid: Spatial Neighbor Slotting
//!
//! Lays out the points surrounding a focal point in a fixed D×D grid
//! (D = 3, 5 or 7), preserving rough compass direction and preferring nearer
//! points. Built for survey viewers that page through neighboring
//! soundings or images: the user hovers a point and sees its neighbors
//! arranged around it.
//!
//! A companion selector reports which points fall inside a rectangle or
//! polygon drawn in the same 2D space.
//!
//! ## Quick Start
//!
//! ```rust
//! use sector_grid::{NeighborSlotter, GridSize};
//! use sector_grid::core::{PointId, ProjectedPoint};
//!
//! let slotter = NeighborSlotter::new(GridSize::Three);
//!
//! let focal = ProjectedPoint::planar(0, 100.0, 100.0);
//! let candidates = [
//!     ProjectedPoint::planar(1, 100.0, 90.0),  // north
//!     ProjectedPoint::planar(2, 110.0, 100.0), // east
//! ];
//!
//! let grid = slotter.slot(&focal, &candidates)?;
//! assert_eq!(grid.get(0, 1), Some(PointId(1)));
//! assert_eq!(grid.get(1, 2), Some(PointId(2)));
//! println!("{}", grid);
//! # Ok::<(), sector_grid::Error>(())
//! ```
//!
//! ## Coordinate Frame
//!
//! Positions are already projected into a shared 2D screen space:
//! - **X-right**: positive X is east
//! - **Y-down**: positive Y is south, so north is −Y
//! - **Z**: carried but ignored by every operation
//!
//! ## Architecture
//!
//! - [`core`]: Vectors, point identities, bounds, segment distance
//! - [`sector`]: Grid sizes, ray directions, sector-to-cell tables
//! - [`slotting`]: Ranking, greedy sector assignment, grid layout
//! - [`selection`]: Rectangle and polygon region tests
//! - [`config`]: YAML configuration
//! - [`io`]: YAML scene files for the command-line tool
//!
//! ## Data Flow
//!
//! ```text
//!     ┌───────────────────────┐
//!     │ focal + candidates    │
//!     │ (ProjectedPoint)      │
//!     └───────────┬───────────┘
//!                 │ rank_by_distance()
//!                 ▼
//!     ┌───────────────────────┐
//!     │ RankedCandidate list  │
//!     │ (nearest first)       │
//!     └───────────┬───────────┘
//!                 │ assign_slots()  ◄── SectorConfig (rays, cells)
//!                 ▼
//!     ┌───────────────────────┐
//!     │ NeighborSlots         │──► dropped / degenerate ids
//!     │ (D²−1 sectors)        │
//!     └───────────┬───────────┘
//!                 │ map_to_grid()
//!                 ▼
//!     ┌───────────────────────┐
//!     │ NeighborGrid (D×D)    │
//!     │ focal at center       │
//!     └───────────────────────┘
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod sector;
pub mod selection;
pub mod slotting;

pub use config::SectorGridConfig;
pub use error::{Error, Result};
pub use sector::{GridSize, SectorConfig};
pub use selection::{SelectionRegion, select_in_region};
pub use slotting::{NeighborGrid, NeighborSlotter, SlotAssignment};
