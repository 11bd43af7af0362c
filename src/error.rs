//! Error types for form analysis

use thiserror::Error;

/// Analysis errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Two of the three points in an angle computation coincide, so one ray
    /// has zero length and the angle is undefined.
    #[error("degenerate geometry: a ray endpoint coincides with the angle vertex")]
    DegenerateGeometry,

    /// The landmark provider handed over a flat buffer of the wrong length.
    #[error("invalid landmark buffer: expected {expected} values, got {actual}")]
    InvalidLandmarkBuffer { expected: usize, actual: usize },
}

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;
