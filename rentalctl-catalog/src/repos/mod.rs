//! Repository implementations for database access
//!
//! Each repository borrows the pool and takes already-validated
//! parameters. Every query is a single read-only `SELECT` with bound
//! parameters; nothing is cached.

pub mod categories;
pub mod customers;
pub mod films;

pub use categories::{CategoryCount, CategoryLengthStats, CategoryRepo};
pub use customers::{CityCustomer, CustomerLengthSum, CustomerRepo};
pub use films::{CastMember, FilmInCategory, FilmRepo, FilmTitle, LengthAverageAmount, LengthCount};
