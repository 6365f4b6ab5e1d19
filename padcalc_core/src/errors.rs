//! # Error Types
//!
//! Structured error types for padcalc_core. Every failure carries enough
//! context to report the bad input without string-parsing the message.
//!
//! ## Example
//!
//! ```rust
//! use padcalc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_hole(hole_in: f64) -> CalcResult<()> {
//!     if !hole_in.is_finite() {
//!         return Err(CalcError::invalid_value(hole_in));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for padcalc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for measurement and sizing operations.
///
/// All variants are terminal for the operation attempted; nothing is
/// retried or recovered internally.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A unit code outside the supported set (in, mm, mil)
    #[error("Invalid unit '{code}': expected one of 'in', 'mm', 'mil'")]
    InvalidUnit { code: String },

    /// A measurement value that is not a usable number
    #[error("Invalid measurement value '{value}': must be a finite number")]
    InvalidValue { value: String },

    /// An arithmetic operand incompatible with the requested operation
    #[error("Invalid operand for '{op}': {operand}")]
    InvalidOperand { op: String, operand: String },

    /// Integer conversion of a value with a fractional part
    #[error("Cannot convert {value} to an integer: non-zero fractional part")]
    NotIntegral { value: f64 },

    /// Pin geometry constructed with no length, width, or hole size
    #[error("Missing input: at least one of length, width, or hole size is required")]
    MissingInput,

    /// A supplied hole size disagrees with the one derived from length/width
    #[error(
        "Inconsistent hole size: supplied {supplied_in} in, derived {derived_in} in \
         (tolerance {tolerance_in} in)"
    )]
    InconsistentHoleSize {
        supplied_in: f64,
        derived_in: f64,
        tolerance_in: f64,
    },
}

impl CalcError {
    /// Create an InvalidUnit error
    pub fn invalid_unit(code: impl Into<String>) -> Self {
        CalcError::InvalidUnit { code: code.into() }
    }

    /// Create an InvalidValue error
    pub fn invalid_value(value: impl ToString) -> Self {
        CalcError::InvalidValue {
            value: value.to_string(),
        }
    }

    /// Create an InvalidOperand error
    pub fn invalid_operand(op: impl Into<String>, operand: impl ToString) -> Self {
        CalcError::InvalidOperand {
            op: op.into(),
            operand: operand.to_string(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidUnit { .. } => "INVALID_UNIT",
            CalcError::InvalidValue { .. } => "INVALID_VALUE",
            CalcError::InvalidOperand { .. } => "INVALID_OPERAND",
            CalcError::NotIntegral { .. } => "NOT_INTEGRAL",
            CalcError::MissingInput => "MISSING_INPUT",
            CalcError::InconsistentHoleSize { .. } => "INCONSISTENT_HOLE_SIZE",
        }
    }
}
