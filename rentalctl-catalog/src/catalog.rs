//! Query Catalog
//!
//! The caller-facing surface: one method per query. Methods that take raw
//! values validate them first and return [`CatalogError::Validation`]
//! without touching the pool when the input is rejected.
//!
//! [`CatalogError::Validation`]: crate::CatalogError::Validation

use sqlx::PgPool;
use tracing::debug;

use crate::error::Result;
use crate::models::{
    CategoryId, CategorySelector, Length, LengthRange, MatchMode, SumThreshold, TitleWords,
    ValidationError,
};
use crate::repos::{
    CastMember, CategoryCount, CategoryLengthStats, CategoryRepo, CityCustomer,
    CustomerLengthSum, CustomerRepo, FilmInCategory, FilmRepo, FilmTitle, LengthAverageAmount,
    LengthCount,
};
use crate::table::Table;

/// Read-only queries over the rental schema, bound to one pool.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/dvdrental").await?;
/// let catalog = Catalog::new(&pool);
/// let films = catalog.film_in_category("Action").await?;
/// for film in &films {
///     println!("{} ({})", film.title, film.language);
/// }
/// ```
#[derive(Clone, Copy)]
pub struct Catalog<'a> {
    pool: &'a PgPool,
}

fn reject<T>(err: ValidationError) -> Result<T> {
    debug!(field = err.field(), error = %err, "rejected input");
    Err(err.into())
}

impl<'a> Catalog<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub fn films(&self) -> FilmRepo<'a> {
        FilmRepo::new(self.pool)
    }

    pub fn categories(&self) -> CategoryRepo<'a> {
        CategoryRepo::new(self.pool)
    }

    pub fn customers(&self) -> CustomerRepo<'a> {
        CustomerRepo::new(self.pool)
    }

    /// Films in a category by id, or by exact name.
    pub async fn film_in_category(
        &self,
        category: impl Into<CategorySelector>,
    ) -> Result<Table<FilmInCategory>> {
        self.films_in_category(category, MatchMode::Exact).await
    }

    /// Films in a category by id, or by name ignoring case.
    pub async fn film_in_category_case_insensitive(
        &self,
        category: impl Into<CategorySelector>,
    ) -> Result<Table<FilmInCategory>> {
        self.films_in_category(category, MatchMode::CaseInsensitive)
            .await
    }

    /// Films in a category, ordered by title then language.
    pub async fn films_in_category(
        &self,
        category: impl Into<CategorySelector>,
        mode: MatchMode,
    ) -> Result<Table<FilmInCategory>> {
        self.films().in_category(&category.into(), mode).await
    }

    /// Number of films in the category with this id.
    pub async fn number_films_in_category(&self, category_id: i64) -> Result<Table<CategoryCount>> {
        let category_id = match CategoryId::new(category_id) {
            Ok(id) => id,
            Err(err) => return reject(err),
        };
        self.categories().film_count(category_id).await
    }

    /// Film counts per length, for lengths in `min_length..=max_length`.
    pub async fn number_film_by_length(
        &self,
        min_length: f64,
        max_length: f64,
    ) -> Result<Table<LengthCount>> {
        let range = match LengthRange::new(min_length, max_length) {
            Ok(range) => range,
            Err(err) => return reject(err),
        };
        self.films().count_by_length(range).await
    }

    /// Customers living in exactly this city.
    pub async fn client_from_city(&self, city: &str) -> Result<Table<CityCustomer>> {
        self.customers().from_city(city).await
    }

    /// Average rental payment for films of exactly this length.
    pub async fn avg_amount_by_length(&self, length: f64) -> Result<Table<LengthAverageAmount>> {
        let length = match Length::new(length) {
            Ok(length) => length,
            Err(err) => return reject(err),
        };
        self.films().avg_amount_by_length(length).await
    }

    /// Customers whose summed rented film length exceeds `sum_min`.
    pub async fn client_by_sum_length(&self, sum_min: f64) -> Result<Table<CustomerLengthSum>> {
        let threshold = match SumThreshold::new(sum_min) {
            Ok(threshold) => threshold,
            Err(err) => return reject(err),
        };
        self.customers().by_length_sum(threshold).await
    }

    /// Length statistics for the category with exactly this name.
    pub async fn category_statistic_length(
        &self,
        name: &str,
    ) -> Result<Table<CategoryLengthStats>> {
        self.categories().length_stats(name).await
    }

    /// Cast of the film with exactly this title.
    pub async fn film_cast(&self, title: &str) -> Result<Table<CastMember>> {
        self.films().cast(title).await
    }

    /// Titles containing any of `words` as a standalone word, ignoring case.
    pub async fn film_title_case_insensitive<I, S>(&self, words: I) -> Result<Table<FilmTitle>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = match TitleWords::new(words) {
            Ok(words) => words,
            Err(err) => return reject(err),
        };
        self.films().titles_matching(&words).await
    }
}
