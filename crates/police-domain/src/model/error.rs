//! Construction and transition errors
//!
//! Raised when a record is built from caller input or when a status change
//! is requested. Neither touches storage.

use rust_decimal::Decimal;

/// A draft record failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was missing or blank
    MissingField { field: &'static str },
    /// A label is not one of the allowed values
    InvalidEnum { field: &'static str, value: String },
    /// A money amount was below zero
    NegativeAmount { field: &'static str },
    /// A money amount was above the accepted ceiling
    AmountTooLarge { field: &'static str, max: Decimal },
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValidationError::MissingField { field } => {
                write!(f, "Missing required field: {}", field)
            }
            ValidationError::InvalidEnum { field, value } => {
                write!(f, "Invalid value '{}' for field {}", value, field)
            }
            ValidationError::NegativeAmount { field } => {
                write!(f, "Field {} must not be negative", field)
            }
            ValidationError::AmountTooLarge { field, max } => {
                write!(f, "Field {} must not exceed {}", field, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// A status change that the record's lifecycle does not allow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionError {
    pub record: &'static str,
    pub from: String,
    pub to: String,
}

impl TransitionError {
    pub fn new(record: &'static str, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            record,
            from: from.into(),
            to: to.into(),
        }
    }
}

impl core::fmt::Display for TransitionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Invalid {} transition: {} -> {}",
            self.record, self.from, self.to
        )
    }
}

impl std::error::Error for TransitionError {}

/// Trim a free-text field and reject it when blank
pub(crate) fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(trimmed.to_string())
}
