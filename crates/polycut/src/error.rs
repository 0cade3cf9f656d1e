//! Error types for the split engine.

use thiserror::Error;

/// Errors that can occur while splitting a polygon.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplitError {
    /// Input polygon cannot be split.
    #[error("invalid polygon: {0}")]
    InvalidPolygon(String),

    /// Invalid split settings.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Line construction from coefficients with |A| and |B| both near zero.
    #[error("degenerate line: A and B coefficients are both below epsilon")]
    DegenerateLine,

    /// Requested area exceeds what the region can supply, or is negative.
    #[error("target area {target} unreachable (available {available})")]
    AreaUnreachable {
        /// The requested area.
        target: f64,
        /// The area actually available.
        available: f64,
    },

    /// No edge pair admits a cut realizing the target area.
    #[error("no valid cut found for the requested area")]
    NoValidCut,
}

/// Result type for split operations.
pub type Result<T> = std::result::Result<T, SplitError>;
