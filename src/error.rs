//! Engine error taxonomy
//!
//! The engine has exactly one failure mode: a caller-supplied input out of
//! bounds. Missing market data is a normal condition handled with neutral
//! defaults, not an error.

use thiserror::Error;

/// Errors produced by the analysis engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// A required field is non-positive or a bounded field is out of range
    #[error("invalid input: {field} {message}")]
    InvalidInput {
        /// Name of the offending field
        field: &'static str,
        message: String,
    },
}

impl AnalysisError {
    pub fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        AnalysisError::InvalidInput {
            field,
            message: message.into(),
        }
    }

    /// Get the offending field name
    pub fn field(&self) -> &'static str {
        match self {
            AnalysisError::InvalidInput { field, .. } => field,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Check that a required monetary field is strictly positive
pub fn require_positive(field: &'static str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(AnalysisError::invalid_input(
            field,
            format!("must be positive, got {}", value),
        ))
    }
}

/// Check that a bounded field lies within [lo, hi] inclusive
pub fn require_in_range(field: &'static str, value: f64, lo: f64, hi: f64) -> Result<()> {
    if value >= lo && value <= hi {
        Ok(())
    } else {
        Err(AnalysisError::invalid_input(
            field,
            format!("must be in [{}, {}], got {}", lo, hi, value),
        ))
    }
}
