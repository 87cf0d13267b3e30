//! YAML scene files.
//!
//! A scene is one slotting request written down: the projected candidates,
//! how to choose the focal point, and an optional selection region.
//!
//! ```yaml
//! grid_size: 5
//! focal: { id: 0, x: 400.0, y: 300.0 }
//! # or pick the candidate under a cursor instead:
//! # cursor: { x: 402.0, y: 298.0, radius: 8.0 }
//! candidates:
//!   - { id: 1, x: 400.0, y: 260.0 }
//!   - { id: 2, x: 450.0, y: 300.0 }
//! region: { kind: rectangle, corners: [{ x: 350.0, y: 250.0 }, { x: 460.0, y: 310.0 }] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ConfigLoadError;
use crate::core::{ProjectedPoint, Vector3};
use crate::error::{Error, Result};
use crate::sector::GridSize;
use crate::selection::{RegionSpec, SelectionRegion};
use crate::slotting::find_nearest;

fn default_pick_radius() -> f64 {
    8.0
}

/// Focal point chosen by hovering: the candidate nearest the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CursorPick {
    /// Cursor x in screen units
    pub x: f64,
    /// Cursor y in screen units
    pub y: f64,
    /// Largest cursor distance that still picks a point
    #[serde(default = "default_pick_radius")]
    pub radius: f64,
}

/// A slotting request loaded from YAML.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Overrides the configured grid size when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_size: Option<GridSize>,

    /// Explicit focal point; takes precedence over `cursor`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focal: Option<ProjectedPoint>,

    /// Hover position used when `focal` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<CursorPick>,

    /// Projected neighbors to slot, and the pool the cursor picks from
    #[serde(default)]
    pub candidates: Vec<ProjectedPoint>,

    /// Optional selection region tested against the candidates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<RegionSpec>,
}

impl Scene {
    /// Load a scene from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Ok(Self::from_yaml(&contents)?)
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// The focal point: `focal` if given, else the candidate under `cursor`.
    ///
    /// None when neither is set or the cursor is not over any candidate.
    pub fn resolve_focal(&self) -> Option<ProjectedPoint> {
        if let Some(focal) = self.focal {
            return Some(focal);
        }
        let cursor = self.cursor?;
        let id = find_nearest(
            Vector3::planar(cursor.x, cursor.y),
            &self.candidates,
            cursor.radius,
        )?;
        self.candidates.iter().find(|c| c.id == id).copied()
    }

    /// Like [`Scene::resolve_focal`], but a missing focal point is an
    /// [`Error::InvalidScene`].
    pub fn focal_point(&self) -> Result<ProjectedPoint> {
        if let Some(focal) = self.resolve_focal() {
            return Ok(focal);
        }
        let reason = match self.cursor {
            Some(cursor) => format!("no candidate under cursor ({}, {})", cursor.x, cursor.y),
            None => "no focal point or cursor given".to_string(),
        };
        Err(Error::InvalidScene(reason))
    }

    /// Build the selection region, if the scene has one
    pub fn selection_region(&self) -> Result<Option<SelectionRegion>> {
        self.region
            .clone()
            .map(SelectionRegion::try_from)
            .transpose()
    }
}
