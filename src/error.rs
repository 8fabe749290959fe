// src/error.rs
use thiserror::Error;

/// Error types for the bs-greeks library
#[derive(Error, Debug)]
pub enum BsError {
    /// Argument outside the set of recognised values (e.g. an unknown option kind)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid parameter values
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for BsError {
    fn from(err: serde_json::Error) -> Self {
        BsError::Serialization(err.to_string())
    }
}

/// Result type alias for bs-greeks operations
pub type BsResult<T> = Result<T, BsError>;

/// Validation utilities
pub mod validation {
    use super::{BsError, BsResult};

    /// Validate that a value is finite and strictly positive
    pub fn validate_positive(name: &str, value: f64) -> BsResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(BsError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> BsResult<()> {
        if !value.is_finite() {
            Err(BsError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
