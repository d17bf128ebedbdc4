//! Customer repository - customers by city and by total rented film length

use serde::Serialize;
use sqlx::{FromRow, PgPool};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::models::SumThreshold;
use crate::table::{Cell, Record, Table};

/// Customer living in a city
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct CityCustomer {
    pub city: String,
    pub first_name: String,
    pub last_name: String,
}

impl Record for CityCustomer {
    const COLUMNS: &'static [&'static str] = &["city", "first_name", "last_name"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.city.as_str().into(),
            self.first_name.as_str().into(),
            self.last_name.as_str().into(),
        ]
    }
}

/// Customer with the summed length of every film they rented
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct CustomerLengthSum {
    pub first_name: String,
    pub last_name: String,
    pub sum: i64,
}

impl Record for CustomerLengthSum {
    const COLUMNS: &'static [&'static str] = &["first_name", "last_name", "sum"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.first_name.as_str().into(),
            self.last_name.as_str().into(),
            self.sum.into(),
        ]
    }
}

/// Customer repository
pub struct CustomerRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Customers whose address is in exactly this city, in join order.
    #[instrument(skip(self), level = "debug")]
    pub async fn from_city(&self, city: &str) -> Result<Table<CityCustomer>> {
        let rows = sqlx::query_as::<_, CityCustomer>(
            r#"
            SELECT ci.city, c.first_name, c.last_name
            FROM city ci
            JOIN address a ON a.city_id = ci.city_id
            JOIN customer c ON c.address_id = a.address_id
            WHERE ci.city = $1
            "#,
        )
        .bind(city)
        .fetch_all(self.pool)
        .await?;

        debug!(rows = rows.len(), "customers from city");
        Ok(Table::new(rows))
    }

    /// Customers whose rented film lengths add up to more than `threshold`.
    ///
    /// Grouped by first and last name, ordered by sum, last name, first name.
    #[instrument(skip(self), level = "debug")]
    pub async fn by_length_sum(&self, threshold: SumThreshold) -> Result<Table<CustomerLengthSum>> {
        let rows = sqlx::query_as::<_, CustomerLengthSum>(
            r#"
            SELECT c.first_name, c.last_name, sum(f.length) AS sum
            FROM film f
            JOIN inventory i ON i.film_id = f.film_id
            JOIN rental r ON r.inventory_id = i.inventory_id
            JOIN customer c ON c.customer_id = r.customer_id
            GROUP BY c.first_name, c.last_name
            HAVING sum(f.length) > $1
            ORDER BY sum, c.last_name, c.first_name
            "#,
        )
        .bind(threshold.get())
        .fetch_all(self.pool)
        .await?;

        debug!(rows = rows.len(), "customers by rental length sum");
        Ok(Table::new(rows))
    }
}
