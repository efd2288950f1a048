//! # Error Types
//!
//! Structured error types for purlin_core. Every failure names the offending
//! field or quantity so a front end can point the user at the exact input.
//!
//! There are three kinds of failure:
//!
//! - [`DesignError::Validation`] - an input is out of range (`span <= 0`, negative load, ...)
//! - [`DesignError::MissingData`] - a required record field is absent or non-numeric
//! - [`DesignError::Computation`] - a zero/non-finite denominator or capacity
//!
//! ## Example
//!
//! ```rust
//! use purlin_core::errors::{DesignError, EngineResult};
//!
//! fn validate_span(span_m: f64) -> EngineResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(DesignError::validation(
//!             "span",
//!             span_m.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_span(0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, DesignError>;

/// Structured error type for design operations.
///
/// Errors are raised immediately; the engine never returns a partial result.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DesignError {
    /// An input value is out of its allowed range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is absent or not a number
    #[error("Missing required field: {field}")]
    MissingData { field: String },

    /// A floating-point edge case would leak inf/NaN or a non-positive capacity
    #[error("Computation failed for '{quantity}': {reason}")]
    Computation { quantity: String, reason: String },
}

impl DesignError {
    /// Create a Validation error
    pub fn validation(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        DesignError::Validation {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingData error
    pub fn missing_data(field: impl Into<String>) -> Self {
        DesignError::MissingData { field: field.into() }
    }

    /// Create a Computation error
    pub fn computation(quantity: impl Into<String>, reason: impl Into<String>) -> Self {
        DesignError::Computation {
            quantity: quantity.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field or quantity
    pub fn field(&self) -> &str {
        match self {
            DesignError::Validation { field, .. } => field,
            DesignError::MissingData { field } => field,
            DesignError::Computation { quantity, .. } => quantity,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DesignError::Validation { .. } => "VALIDATION_ERROR",
            DesignError::MissingData { .. } => "MISSING_DATA",
            DesignError::Computation { .. } => "COMPUTATION_ERROR",
        }
    }
}

/// Reject NaN/inf before it reaches the result or the step trace.
pub(crate) fn ensure_finite(quantity: &str, value: f64) -> EngineResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DesignError::computation(quantity, format!("result is not finite ({})", value)))
    }
}

/// Divide, refusing zero or non-finite denominators.
pub(crate) fn checked_div(quantity: &str, numerator: f64, denominator: f64) -> EngineResult<f64> {
    if denominator == 0.0 || !denominator.is_finite() {
        return Err(DesignError::computation(
            quantity,
            format!("denominator is {}", denominator),
        ));
    }
    ensure_finite(quantity, numerator / denominator)
}

/// A capacity must be a finite, strictly positive number.
pub(crate) fn ensure_positive_capacity(quantity: &str, value: f64) -> EngineResult<f64> {
    let value = ensure_finite(quantity, value)?;
    if value <= 0.0 {
        return Err(DesignError::computation(
            quantity,
            format!("capacity must be positive, got {}", value),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = DesignError::validation("span", "0", "Span must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"Validation\""));
        let roundtrip: DesignError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(DesignError::missing_data("Ix").error_code(), "MISSING_DATA");
        assert_eq!(DesignError::computation("E*Ix", "zero").error_code(), "COMPUTATION_ERROR");
        assert_eq!(DesignError::validation("t", "0", "x").error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_field_name_exposed() {
        assert_eq!(DesignError::missing_data("Zx").field(), "Zx");
        assert_eq!(DesignError::computation("delta", "x").field(), "delta");
    }

    #[test]
    fn test_checked_div_rejects_zero() {
        assert!(checked_div("ratio", 1.0, 0.0).is_err());
        assert_eq!(checked_div("ratio", 1.0, 4.0).unwrap(), 0.25);
    }

    #[test]
    fn test_positive_capacity() {
        assert!(ensure_positive_capacity("phi_mn", -1.0).is_err());
        assert!(ensure_positive_capacity("phi_mn", f64::NAN).is_err());
        assert_eq!(ensure_positive_capacity("phi_mn", 2.0).unwrap(), 2.0);
    }
}
