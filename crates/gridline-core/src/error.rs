//! Error types for gridline-rs.

use glam::IVec3;
use thiserror::Error;

/// The main error type for gridline-rs operations.
///
/// Validation variants are raised before anything is mutated, so a caller
/// that receives one can assume the previously built grid is untouched.
#[derive(Error, Debug)]
pub enum GridError {
    /// A grid size component is negative.
    #[error("Grid size must be bigger than or equal to 0 (got {size}).")]
    InvalidSize { size: IVec3 },

    /// The line width is zero, negative, or NaN.
    #[error("Line width must be bigger than 0 (got {0}).")]
    InvalidLineWidth(f32),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GridError {
    /// Returns true for errors produced by parameter validation.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidSize { .. } | Self::InvalidLineWidth(_))
    }
}

/// A specialized Result type for gridline-rs operations.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        let err = GridError::InvalidSize {
            size: IVec3::new(-1, 0, 2),
        };
        assert!(err.to_string().starts_with("Grid size must be bigger than or equal to 0"));
        assert!(err.is_validation());

        let err = GridError::InvalidLineWidth(0.0);
        assert!(err.to_string().starts_with("Line width must be bigger than 0"));
        assert!(err.is_validation());
    }

    #[test]
    fn test_json_error_is_not_validation() {
        let err: GridError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(!err.is_validation());
    }
}
