//! Command implementations for rentalctl CLI

pub mod query;

pub use query::{run_query, QueryCommand};
