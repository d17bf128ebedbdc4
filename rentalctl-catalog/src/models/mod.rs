//! Validated query parameters
//!
//! Raw caller input is turned into one of these types before any SQL is
//! built. Construction is the only place input is rejected.

pub mod category;
pub mod length;
pub mod validation;
pub mod words;

pub use category::{CategoryId, CategorySelector, MatchMode};
pub use length::{Length, LengthRange, SumThreshold, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
pub use validation::ValidationError;
pub use words::TitleWords;
