//! Error types for CAD risk scoring
//!
//! Comprehensive error taxonomy using thiserror

use thiserror::Error;

/// Top-level scoring error
///
/// Invalid input is the only way a scoring call can fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),
}

/// Input-specific errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Input must be an object, got {found}")]
    NotAnObject { found: String },

    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Field {field} must be {expected}, got {found}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("Field {field} must be a finite number")]
    NotFinite { field: &'static str },
}

impl InputError {
    /// Name of the offending field, if the error concerns a single field
    pub fn field(&self) -> Option<&'static str> {
        match self {
            InputError::NotAnObject { .. } => None,
            InputError::MissingField { field }
            | InputError::WrongType { field, .. }
            | InputError::NotFinite { field } => Some(field),
        }
    }
}

/// Rule set configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Unknown blood pressure policy: {0}")]
    UnknownBloodPressurePolicy(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}
