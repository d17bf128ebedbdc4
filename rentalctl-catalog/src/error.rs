//! Error types for rentalctl-catalog
//!
//! Callers get a three-way outcome from every operation:
//! - `Ok(table)`, possibly with zero rows
//! - `Err(CatalogError::Validation)` when input was rejected before querying
//! - `Err(CatalogError::Database)` when the backend failed

use thiserror::Error;

use crate::models::ValidationError;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CatalogError {
    /// True when the input was rejected and no query was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_convert() {
        let err: CatalogError = ValidationError::Empty { field: "words" }.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "invalid input: words cannot be empty");
        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::Empty { field: "words" })
        ));
    }

    #[test]
    fn database_errors_convert() {
        let err: CatalogError = sqlx::Error::RowNotFound.into();
        assert!(!err.is_validation());
        assert!(err.to_string().starts_with("database error:"));
    }
}
