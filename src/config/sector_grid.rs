//! Top-level SectorGridConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::slotting::NeighborSlotter;

use super::error::ConfigLoadError;
use super::slotting::SlottingSection;

/// Default config location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

/// Full sector-grid configuration loaded from YAML
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SectorGridConfig {
    /// Slotting settings
    #[serde(default)]
    pub slotting: SlottingSection,
}

impl SectorGridConfig {
    /// Load and validate configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        let config = Self::from_yaml(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the default config path, falling back to defaults when the
    /// file does not exist
    pub fn load_default() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string (not validated)
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> std::result::Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Check ranges serde cannot express
    pub fn validate(&self) -> Result<()> {
        self.slotting.validate()
    }

    /// Build the slotting service
    pub fn to_slotter(&self) -> Result<NeighborSlotter> {
        self.slotting.to_slotter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::sector::GridSize;
    use crate::slotting::DEFAULT_RAY_SCALE;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SectorGridConfig::default();
        assert_eq!(config.slotting.grid_size, GridSize::Three);
        assert_eq!(config.slotting.ray_scale, DEFAULT_RAY_SCALE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = SectorGridConfig::from_yaml("slotting:\n  grid_size: 5\n").unwrap();
        assert_eq!(config.slotting.grid_size, GridSize::Five);
        assert_eq!(config.slotting.ray_scale, DEFAULT_RAY_SCALE);

        let empty = SectorGridConfig::from_yaml("{}").unwrap();
        assert_eq!(empty, SectorGridConfig::default());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = SectorGridConfig::default();
        config.slotting.grid_size = GridSize::Seven;
        config.slotting.ray_scale = 2500.0;

        let yaml = config.to_yaml().unwrap();
        assert_eq!(SectorGridConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_invalid_grid_size_rejected() {
        let result = SectorGridConfig::from_yaml("slotting:\n  grid_size: 4\n");
        assert!(matches!(result, Err(ConfigLoadError::Parse(_))));
    }

    #[test]
    fn test_invalid_ray_scale_rejected() {
        let config = SectorGridConfig::from_yaml("slotting:\n  ray_scale: -1.0\n").unwrap();
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        assert!(config.to_slotter().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "slotting:\n  grid_size: 7\n  ray_scale: 1000.0").unwrap();

        let config = SectorGridConfig::load(file.path()).unwrap();
        let slotter = config.to_slotter().unwrap();
        assert_eq!(slotter.grid_size(), GridSize::Seven);
        assert_eq!(slotter.ray_scale(), 1000.0);
    }

    #[test]
    fn test_load_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "slotting:\n  ray_scale: 0.0").unwrap();
        assert!(matches!(
            SectorGridConfig::load(file.path()),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = SectorGridConfig::load(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(Error::Config(ConfigLoadError::Io(_)))));
    }
}
