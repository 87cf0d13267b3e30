//! Slotting configuration section.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sector::GridSize;
use crate::slotting::{NeighborSlotter, validate_ray_scale};

use super::defaults;

/// Slotting configuration section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlottingSection {
    /// Neighbor grid dimension (3, 5 or 7)
    #[serde(default = "defaults::grid_size")]
    pub grid_size: GridSize,

    /// Sector ray length in screen units
    #[serde(default = "defaults::ray_scale")]
    pub ray_scale: f64,
}

impl Default for SlottingSection {
    fn default() -> Self {
        Self {
            grid_size: defaults::grid_size(),
            ray_scale: defaults::ray_scale(),
        }
    }
}

impl SlottingSection {
    /// Check values serde cannot reject on its own
    pub fn validate(&self) -> Result<()> {
        validate_ray_scale(self.ray_scale)
    }

    /// Build the slotting service
    pub fn to_slotter(&self) -> Result<NeighborSlotter> {
        NeighborSlotter::new(self.grid_size).with_ray_scale(self.ray_scale)
    }
}
