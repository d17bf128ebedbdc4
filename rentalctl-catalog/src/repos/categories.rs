//! Category repository - counts and length statistics per category

use serde::Serialize;
use sqlx::{FromRow, PgPool};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::models::CategoryId;
use crate::table::{Cell, Record, Table};

/// Number of film titles in a category
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

impl Record for CategoryCount {
    const COLUMNS: &'static [&'static str] = &["category", "count"];

    fn cells(&self) -> Vec<Cell> {
        vec![self.category.as_str().into(), self.count.into()]
    }
}

/// Length statistics over the films of one category.
///
/// Aggregates are NULL when no film in the category has a length.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct CategoryLengthStats {
    pub category: String,
    pub avg: Option<f64>,
    pub sum: Option<i64>,
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl Record for CategoryLengthStats {
    const COLUMNS: &'static [&'static str] = &["category", "avg", "sum", "min", "max"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.category.as_str().into(),
            self.avg.into(),
            self.sum.into(),
            self.min.into(),
            self.max.into(),
        ]
    }
}

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Count of titles in the category with this id.
    ///
    /// Goes through the `film_list` view, joined back to `category` by name.
    #[instrument(skip(self), level = "debug")]
    pub async fn film_count(&self, category_id: CategoryId) -> Result<Table<CategoryCount>> {
        let rows = sqlx::query_as::<_, CategoryCount>(
            r#"
            SELECT fl.category, count(fl.title) AS count
            FROM film_list fl
            JOIN category c ON c.name = fl.category
            WHERE c.category_id = $1
            GROUP BY fl.category
            "#,
        )
        .bind(category_id.get())
        .fetch_all(self.pool)
        .await?;

        debug!(rows = rows.len(), "film count in category");
        Ok(Table::new(rows))
    }

    /// Average, total, shortest and longest film length in the named category.
    #[instrument(skip(self), level = "debug")]
    pub async fn length_stats(&self, name: &str) -> Result<Table<CategoryLengthStats>> {
        let rows = sqlx::query_as::<_, CategoryLengthStats>(
            r#"
            SELECT
                c.name AS category,
                avg(f.length)::float8 AS avg,
                sum(f.length) AS sum,
                min(f.length)::int4 AS min,
                max(f.length)::int4 AS max
            FROM film f
            JOIN film_category fc ON fc.film_id = f.film_id
            JOIN category c ON c.category_id = fc.category_id
            WHERE c.name = $1
            GROUP BY c.name
            "#,
        )
        .bind(name)
        .fetch_all(self.pool)
        .await?;

        debug!(rows = rows.len(), "category length statistics");
        Ok(Table::new(rows))
    }
}
