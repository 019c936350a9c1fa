//! Custom error types for dayspend
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::fmt;

use thiserror::Error;

/// Machine-readable reason keys for input-validation failures
///
/// These keys are stable identifiers consumed by callers (and surfaced
/// verbatim in CLI output), so renaming a variant's key is a breaking change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationReason {
    /// Input could not be parsed as a decimal number
    NumberInvalid,
    /// More than two decimal places
    MaxTwoDecimals,
    /// Value must be zero or greater
    MinZero,
    /// Value must be strictly positive
    MustBePositive,
}

impl ValidationReason {
    /// The stable reason key for this failure
    pub const fn key(&self) -> &'static str {
        match self {
            Self::NumberInvalid => "number_invalid",
            Self::MaxTwoDecimals => "max_two_decimals",
            Self::MinZero => "min_zero",
            Self::MustBePositive => "must_be_positive",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The main error type for dayspend operations
#[derive(Error, Debug)]
pub enum DayspendError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Input rejected at the validation boundary
    #[error("Validation error: {0}")]
    Validation(ValidationReason),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Parse errors for user-supplied dates, months, and amounts
    #[error("Parse error: {0}")]
    Parse(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl DayspendError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for month overrides
    pub fn month_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Month",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The validation reason key, if this is a validation error
    pub fn validation_reason(&self) -> Option<ValidationReason> {
        match self {
            Self::Validation(reason) => Some(*reason),
            _ => None,
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for DayspendError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DayspendError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for dayspend operations
pub type DayspendResult<T> = Result<T, DayspendError>;
