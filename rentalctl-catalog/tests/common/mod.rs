//! Shared fixture for database-backed tests
//!
//! Each fixture loads `fixtures/schema.sql` into its own schema so tests
//! can run in parallel against one database.

use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};

const FIXTURE_SQL: &str = include_str!("../fixtures/schema.sql");

pub struct Fixture {
    pub pool: PgPool,
    admin: PgPool,
    schema: String,
}

impl Fixture {
    pub async fn load() -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let schema = format!("rentalctl_test_{}", uuid::Uuid::new_v4().simple());

        let admin = PgPool::connect(&url).await.expect("connect failed");
        admin
            .execute(format!("CREATE SCHEMA {}", schema).as_str())
            .await
            .expect("create schema failed");

        let search_path = schema.clone();
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .after_connect(move |conn, _meta| {
                let statement = format!("SET search_path TO {}", search_path);
                Box::pin(async move {
                    conn.execute(statement.as_str()).await?;
                    Ok(())
                })
            })
            .connect(&url)
            .await
            .expect("fixture pool failed");

        sqlx::raw_sql(FIXTURE_SQL)
            .execute(&pool)
            .await
            .expect("loading fixture failed");

        Self {
            pool,
            admin,
            schema,
        }
    }

    pub async fn teardown(self) {
        self.pool.close().await;
        self.admin
            .execute(format!("DROP SCHEMA {} CASCADE", self.schema).as_str())
            .await
            .expect("drop schema failed");
    }
}
