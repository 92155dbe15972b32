// Repository layer for database operations
// One flat table: events (id, event, date)

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::str::FromStr;

use crate::models::*;

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create database connection from URL, creating the file if it does not exist
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database URL: {}", database_url))?
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;
        Ok(Self { pool })
    }

    /// Private in-memory database.
    ///
    /// Every SQLite connection to `:memory:` gets its own database, so the
    /// pool is pinned to one connection that is never recycled.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Ok(Self { pool })
    }

    /// Apply embedded migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run database migrations")?;
        Ok(())
    }

    // ============================================
    // Events
    // ============================================

    pub async fn create_event(&self, input: CreateEvent) -> Result<EventRow> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            INSERT INTO events (event, date)
            VALUES (?, ?)
            RETURNING id, event, date
            "#,
        )
        .bind(&input.event)
        .bind(input.date)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_event(&self, id: i64) -> Result<Option<EventRow>> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, event, date
            FROM events
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list_events(&self, filter: DateFilter) -> Result<Vec<EventRow>> {
        let mut query = QueryBuilder::<Sqlite>::new("SELECT id, event, date FROM events");

        match filter {
            DateFilter::All => {}
            DateFilter::On(day) => {
                query.push(" WHERE date = ").push_bind(day);
            }
            DateFilter::Range { start, end } => {
                let mut clause = " WHERE ";
                if let Some(start) = start {
                    query.push(clause).push("date >= ").push_bind(start);
                    clause = " AND ";
                }
                if let Some(end) = end {
                    query.push(clause).push("date < ").push_bind(end);
                }
            }
        }
        query.push(" ORDER BY id ASC");

        let rows = query
            .build_query_as::<EventRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn delete_event(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
