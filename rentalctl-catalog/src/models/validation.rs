//! Validation error types

use thiserror::Error;

/// Rejected caller input, raised before any query is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Text that should have been an integer
    #[error("{field} must be an integer, got '{value}'")]
    NotAnInteger { field: &'static str, value: String },

    /// Text that should have been a number
    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: &'static str, value: String },

    /// Integer outside the range the column can hold
    #[error("{field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },

    /// NaN or infinity
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// Lower bound above upper bound
    #[error("min_length ({min}) exceeds max_length ({max})")]
    InvertedRange { min: f64, max: f64 },

    /// Field is empty when it shouldn't be
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("invalid title pattern: {reason}")]
    InvalidPattern { reason: String },
}

impl ValidationError {
    /// Name of the offending parameter, when the error is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::NotAnInteger { field, .. }
            | Self::NotANumber { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::NotFinite { field }
            | Self::Negative { field, .. }
            | Self::Empty { field } => Some(field),
            Self::InvertedRange { .. } => Some("min_length"),
            Self::InvalidPattern { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvertedRange {
            min: 120.0,
            max: 60.0,
        };
        assert_eq!(err.to_string(), "min_length (120) exceeds max_length (60)");

        let err = ValidationError::NotAnInteger {
            field: "category id",
            value: "abc".into(),
        };
        assert_eq!(err.to_string(), "category id must be an integer, got 'abc'");
    }

    #[test]
    fn field_names() {
        assert_eq!(
            ValidationError::Negative {
                field: "sum_min",
                value: -1.0
            }
            .field(),
            Some("sum_min")
        );
        assert_eq!(
            ValidationError::InvalidPattern {
                reason: "too big".into()
            }
            .field(),
            None
        );
    }
}
