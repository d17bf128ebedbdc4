//! rentalctl-catalog: read-only queries over the video-rental schema
//!
//! A catalog of parameterized `SELECT`s against the dvdrental PostgreSQL
//! schema (`film`, `category`, `language`, `customer`, `rental`, ...).
//! Each query validates its input, binds it into a fixed template, runs it
//! on an explicitly passed pool and returns a [`Table`] of typed rows.

pub mod catalog;
pub mod error;
pub mod models;
pub mod pool;
pub mod repos;
pub mod table;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use models::{
    CategoryId, CategorySelector, Length, LengthRange, MatchMode, SumThreshold, TitleWords,
    ValidationError,
};
pub use pool::{create_lazy_pool, create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use table::{Cell, Record, Table};
