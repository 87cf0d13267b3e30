//! Default value functions for serde deserialization.

use crate::sector::GridSize;
use crate::slotting::DEFAULT_RAY_SCALE;

pub fn grid_size() -> GridSize {
    GridSize::Three
}

pub fn ray_scale() -> f64 {
    DEFAULT_RAY_SCALE
}
