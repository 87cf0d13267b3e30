//! Configuration loading for sector-grid.
//!
//! Loads settings from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sector_grid::config::SectorGridConfig;
//!
//! // Load from default path (configs/config.yaml), or defaults if absent
//! let config = SectorGridConfig::load_default()?;
//!
//! let slotter = config.to_slotter()?;
//! # Ok::<(), sector_grid::Error>(())
//! ```
//!
//! ## Example YAML
//!
//! ```yaml
//! slotting:
//!   grid_size: 5        # 3, 5 or 7
//!   ray_scale: 1.0e6    # sector ray length, screen units
//! ```

mod defaults;
mod error;
mod sector_grid;
mod slotting;

pub use error::ConfigLoadError;
pub use sector_grid::{DEFAULT_CONFIG_PATH, SectorGridConfig};
pub use slotting::SlottingSection;
