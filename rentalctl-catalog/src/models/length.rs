//! Numeric film-length parameters

use std::str::FromStr;


use super::ValidationError;

/// Lower bound used when no minimum length is given
pub const DEFAULT_MIN_LENGTH: f64 = 0.0;

/// Upper bound used when no maximum length is given
pub const DEFAULT_MAX_LENGTH: f64 = 1e6;

fn finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite { field })
    }
}

fn parse_number(field: &'static str, s: &str) -> Result<f64, ValidationError> {
    let value: f64 = s.trim().parse().map_err(|_| ValidationError::NotANumber {
        field,
        value: s.to_owned(),
    })?;
    finite(field, value)
}

/// A single film length in minutes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length(f64);

impl Length {
    pub fn new(length: f64) -> Result<Self, ValidationError> {
        finite("length", length).map(Self)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl FromStr for Length {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_number("length", s).map(Self)
    }
}

/// Inclusive length range with `min <= max`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthRange {
    min: f64,
    max: f64,
}

impl LengthRange {
    /// Create a range, rejecting non-finite bounds and `min > max`.
    ///
    /// # Example
    /// ```
    /// use rentalctl_catalog::models::LengthRange;
    ///
    /// assert!(LengthRange::new(46.0, 60.0).is_ok());
    /// assert!(LengthRange::new(60.0, 60.0).is_ok());
    /// assert!(LengthRange::new(61.0, 60.0).is_err());
    /// ```
    pub fn new(min: f64, max: f64) -> Result<Self, ValidationError> {
        let min = finite("min_length", min)?;
        let max = finite("max_length", max)?;

        if min > max {
            return Err(ValidationError::InvertedRange { min, max });
        }

        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

/// Minimum summed rental length a customer must exceed (never negative)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SumThreshold(f64);

impl SumThreshold {
    pub fn new(sum_min: f64) -> Result<Self, ValidationError> {
        let sum_min = finite("sum_min", sum_min)?;

        if sum_min < 0.0 {
            return Err(ValidationError::Negative {
                field: "sum_min",
                value: sum_min,
            });
        }

        Ok(Self(sum_min))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl FromStr for SumThreshold {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_number("sum_min", s).and_then(Self::new)
    }
}
