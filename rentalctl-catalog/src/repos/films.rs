//! Film repository
//!
//! Film lookups by category, length, title and cast. Language names are
//! stored as blank-padded `character(20)` and are right-trimmed on the way out.

use serde::Serialize;
use sqlx::{FromRow, PgPool};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::models::{CategorySelector, Length, LengthRange, MatchMode, TitleWords};
use crate::table::{Cell, Record, Table};

const FILMS_IN_CATEGORY_SELECT: &str = r#"
    SELECT f.title, rtrim(l.name) AS language, c.name AS category
    FROM film f
    JOIN language l ON l.language_id = f.language_id
    JOIN film_category fc ON fc.film_id = f.film_id
    JOIN category c ON c.category_id = fc.category_id
"#;

const FILMS_IN_CATEGORY_ORDER: &str = "ORDER BY f.title, language";

/// Film title with its language and category
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct FilmInCategory {
    pub title: String,
    pub language: String,
    pub category: String,
}

impl Record for FilmInCategory {
    const COLUMNS: &'static [&'static str] = &["title", "language", "category"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.title.as_str().into(),
            self.language.as_str().into(),
            self.category.as_str().into(),
        ]
    }
}

/// Number of films with a given length
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct LengthCount {
    pub length: i32,
    pub count: i64,
}

impl Record for LengthCount {
    const COLUMNS: &'static [&'static str] = &["length", "count"];

    fn cells(&self) -> Vec<Cell> {
        vec![self.length.into(), self.count.into()]
    }
}

/// Average payment amount for rentals of films with a given length
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct LengthAverageAmount {
    pub length: i32,
    pub avg: Option<f64>,
}

impl Record for LengthAverageAmount {
    const COLUMNS: &'static [&'static str] = &["length", "avg"];

    fn cells(&self) -> Vec<Cell> {
        vec![self.length.into(), self.avg.into()]
    }
}

/// Actor appearing in a film
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct CastMember {
    pub first_name: String,
    pub last_name: String,
}

impl Record for CastMember {
    const COLUMNS: &'static [&'static str] = &["first_name", "last_name"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.first_name.as_str().into(),
            self.last_name.as_str().into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct FilmTitle {
    pub title: String,
}

impl Record for FilmTitle {
    const COLUMNS: &'static [&'static str] = &["title"];

    fn cells(&self) -> Vec<Cell> {
        vec![self.title.as_str().into()]
    }
}

/// Film repository
pub struct FilmRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> FilmRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Films in a category, ordered by title then language.
    ///
    /// Ids always match exactly; names match per `mode`.
    #[instrument(skip(self), level = "debug")]
    pub async fn in_category(
        &self,
        category: &CategorySelector,
        mode: MatchMode,
    ) -> Result<Table<FilmInCategory>> {
        let filter = match (category, mode) {
            (CategorySelector::Id(_), _) => "WHERE c.category_id = $1",
            (CategorySelector::Name(_), MatchMode::Exact) => "WHERE c.name = $1",
            (CategorySelector::Name(_), MatchMode::CaseInsensitive) => {
                "WHERE lower(c.name) = lower($1)"
            }
        };
        let sql = format!(
            "{} {} {}",
            FILMS_IN_CATEGORY_SELECT, filter, FILMS_IN_CATEGORY_ORDER
        );

        let query = sqlx::query_as::<_, FilmInCategory>(&sql);
        let query = match category {
            CategorySelector::Id(id) => query.bind(id.get()),
            CategorySelector::Name(name) => query.bind(name.as_str()),
        };

        let rows = query.fetch_all(self.pool).await?;
        debug!(rows = rows.len(), "films in category");
        Ok(Table::new(rows))
    }

    /// Film counts per length within an inclusive range.
    #[instrument(skip(self), level = "debug")]
    pub async fn count_by_length(&self, range: LengthRange) -> Result<Table<LengthCount>> {
        let rows = sqlx::query_as::<_, LengthCount>(
            r#"
            SELECT f.length::int4 AS length, count(f.title) AS count
            FROM film f
            WHERE f.length BETWEEN $1 AND $2
            GROUP BY f.length
            "#,
        )
        .bind(range.min())
        .bind(range.max())
        .fetch_all(self.pool)
        .await?;

        debug!(rows = rows.len(), "film counts by length");
        Ok(Table::new(rows))
    }

    /// Average payment amount across all rentals of films with exactly `length`.
    #[instrument(skip(self), level = "debug")]
    pub async fn avg_amount_by_length(&self, length: Length) -> Result<Table<LengthAverageAmount>> {
        let rows = sqlx::query_as::<_, LengthAverageAmount>(
            r#"
            SELECT f.length::int4 AS length, avg(p.amount)::float8 AS avg
            FROM film f
            JOIN inventory i ON i.film_id = f.film_id
            JOIN rental r ON r.inventory_id = i.inventory_id
            JOIN payment p ON p.rental_id = r.rental_id
            WHERE f.length = $1
            GROUP BY f.length
            "#,
        )
        .bind(length.get())
        .fetch_all(self.pool)
        .await?;

        debug!(rows = rows.len(), "average amount by length");
        Ok(Table::new(rows))
    }

    /// Cast of the film with exactly this title, ordered by last then first name.
    #[instrument(skip(self), level = "debug")]
    pub async fn cast(&self, title: &str) -> Result<Table<CastMember>> {
        let rows = sqlx::query_as::<_, CastMember>(
            r#"
            SELECT a.first_name, a.last_name
            FROM actor a
            JOIN film_actor fa ON fa.actor_id = a.actor_id
            JOIN film f ON f.film_id = fa.film_id
            WHERE f.title = $1
            ORDER BY a.last_name, a.first_name
            "#,
        )
        .bind(title)
        .fetch_all(self.pool)
        .await?;

        debug!(rows = rows.len(), "film cast");
        Ok(Table::new(rows))
    }

    /// Titles containing any of `words` as a whole word, ignoring case.
    #[instrument(skip(self), level = "debug")]
    pub async fn titles_matching(&self, words: &TitleWords) -> Result<Table<FilmTitle>> {
        let rows = sqlx::query_as::<_, FilmTitle>(
            r#"
            SELECT f.title
            FROM film f
            WHERE f.title ~* $1
            ORDER BY f.title
            "#,
        )
        .bind(words.pattern())
        .fetch_all(self.pool)
        .await?;

        debug!(
            rows = rows.len(),
            words = ?words.words(),
            pattern = words.pattern(),
            "titles matching words"
        );
        Ok(Table::new(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_shapes() {
        assert_eq!(FilmInCategory::COLUMNS, ["title", "language", "category"]);
        assert_eq!(LengthCount::COLUMNS, ["length", "count"]);
        assert_eq!(LengthAverageAmount::COLUMNS, ["length", "avg"]);
        assert_eq!(CastMember::COLUMNS, ["first_name", "last_name"]);
        assert_eq!(FilmTitle::COLUMNS, ["title"]);
    }

    #[test]
    fn cells_match_columns() {
        let film = FilmInCategory {
            title: "Amadeus Holy".into(),
            language: "English".into(),
            category: "Action".into(),
        };
        assert_eq!(
            film.cells(),
            vec![
                Cell::Text("Amadeus Holy".into()),
                Cell::Text("English".into()),
                Cell::Text("Action".into()),
            ]
        );

        let avg = LengthAverageAmount {
            length: 48,
            avg: Some(4.295389),
        };
        assert_eq!(avg.cells(), vec![Cell::Int(48), Cell::Float(4.295389)]);
    }

    #[test]
    fn serialized_keys_match_columns() {
        let row = serde_json::to_value(LengthCount {
            length: 46,
            count: 64,
        })
        .unwrap();
        let mut keys: Vec<_> = row.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        let mut expected: Vec<_> = LengthCount::COLUMNS.iter().map(|c| c.to_string()).collect();
        expected.sort();
        assert_eq!(keys, expected);
    }
}
