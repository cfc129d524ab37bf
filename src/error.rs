//! Error type shared by the whole crate
//!
//! Only two conditions are real errors: a bad numeric parameter and an
//! unknown tag. Everything else (degenerate viewport, extreme size ratios,
//! log-scale fallback) is a policy branch handled where it occurs.

use thiserror::Error;

/// Errors surfaced to the caller, one human-readable message each
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A numeric input was missing, non-finite or not strictly positive
    #[error("{name} {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A shape or alignment tag that is not part of the closed set
    #[error("Unknown {kind}: {name:?}")]
    UnknownVariant { kind: &'static str, name: String },

    /// Settings could not be read or written
    #[error("Settings error: {0}")]
    Settings(String),
}

impl GeometryError {
    pub(crate) fn not_positive(name: &str) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: "must be positive".to_string(),
        }
    }

    pub(crate) fn missing(name: &str) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: "is required".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GeometryError>;

/// Check that a parameter is finite and strictly positive
pub(crate) fn require_positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::not_positive(name))
    }
}
