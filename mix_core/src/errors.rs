//! # Error Types
//!
//! Structured error types for mix_core. Every variant describes a problem with
//! the caller's input: the calculation itself cannot fail once the input has
//! been validated, so there is no partial result and nothing to retry.
//!
//! ## Example
//!
//! ```rust
//! use mix_core::errors::{CalcError, CalcResult};
//!
//! fn validate_slump(slump_mm: f64) -> CalcResult<()> {
//!     if slump_mm <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "slump_mm",
//!             slump_mm.to_string(),
//!             "Slump must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_slump(-10.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for mix_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured input error.
///
/// Serializes with a `type` tag so a presentation layer can point at the
/// offending form field without parsing the message.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A numeric value is not a finite positive real
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required numeric field was not supplied
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A label is not a member of its enumerated set (grade, exposure, ...)
    #[error("Unknown {kind}: '{label}'")]
    UnknownLabel { kind: String, label: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownLabel error
    pub fn unknown_label(kind: impl Into<String>, label: impl Into<String>) -> Self {
        CalcError::UnknownLabel {
            kind: kind.into(),
            label: label.into(),
        }
    }

    /// Name of the input field (or label kind) the error refers to
    pub fn field(&self) -> &str {
        match self {
            CalcError::InvalidInput { field, .. } => field,
            CalcError::MissingField { field } => field,
            CalcError::UnknownLabel { kind, .. } => kind,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownLabel { .. } => "UNKNOWN_LABEL",
        }
    }
}

/// Check that a required number is finite and strictly positive.
pub fn require_positive(field: &str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(value)
}
