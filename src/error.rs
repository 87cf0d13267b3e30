//! Error types for sector-grid

use crate::config::ConfigLoadError;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// sector-grid error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Grid size outside {3, 5, 7}
    #[error("Invalid grid size: {0} (expected 3, 5 or 7)")]
    InvalidGridSize(u8),

    /// Zero-length or non-finite vector where a direction was required
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),

    /// Sector direction or cell table failed validation
    #[error("Malformed sector table for {size}x{size} grid: {reason}")]
    MalformedSectorTable {
        /// Grid dimension of the offending table
        size: u8,
        /// What the check found
        reason: String,
    },

    /// Selection region that cannot be tested against
    #[error("Invalid selection region: {0}")]
    InvalidRegion(String),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Scene file parsed but cannot be slotted
    #[error("Invalid scene: {0}")]
    InvalidScene(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),
}
