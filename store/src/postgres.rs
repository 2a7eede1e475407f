//! # PostgreSQL item store
//!
//! [`PgItemStore`] keeps the item collection in a single `items` table, one
//! JSONB document per row, so the schema stays as loose as the API promises.
//! The table is created by the embedded migration in `store/migrations`.
//!
//! ## Connection lifecycle
//!
//! The pool is opened once, by [`PgItemStore::connect`], when the server
//! starts. A failed connection (or failed migration) is logged and the store
//! is still returned: it simply has no pool, and every operation reports
//! [`StoreError::Unavailable`] with the original failure text. The connection
//! is not retried.

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::{Item, NewItem};
use crate::repo::{new_item_id, ItemStore};

/// ItemStore backed by a PostgreSQL connection pool.
#[derive(Clone, Debug)]
pub struct PgItemStore {
    pool: Result<PgPool, String>,
}

impl PgItemStore {
    /// Open the pool and run migrations. Never fails; see the module docs.
    pub async fn connect(database_url: &str) -> Self {
        match open_pool(database_url).await {
            Ok(pool) => {
                tracing::info!("Database connected");
                Self { pool: Ok(pool) }
            }
            Err(e) => {
                tracing::error!("Database connection error: {}", e);
                Self::unavailable(e.to_string())
            }
        }
    }

    /// A store whose every operation fails with `reason`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            pool: Err(reason.into()),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.pool.is_ok()
    }

    fn pool(&self) -> Result<&PgPool, StoreError> {
        self.pool
            .as_ref()
            .map_err(|reason| StoreError::Unavailable(reason.clone()))
    }
}

async fn open_pool(database_url: &str) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn insert(&self, record: NewItem) -> Result<Item, StoreError> {
        let pool = self.pool()?;
        let item = record.into_item(new_item_id());

        sqlx::query("INSERT INTO items (id, doc) VALUES ($1, $2)")
            .bind(&item.id)
            .bind(Json(&item.fields))
            .execute(pool)
            .await?;

        Ok(item)
    }

    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        let pool = self.pool()?;

        let rows: Vec<(String, Json<Map<String, Value>>)> =
            sqlx::query_as("SELECT id, doc FROM items ORDER BY seq")
                .fetch_all(pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, Json(fields))| Item::new(id, fields))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bad_url_yields_unavailable_store() {
        let store = PgItemStore::connect("not a database url").await;
        assert!(!store.is_connected());

        let err = store.list_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
        assert_eq!(err.to_string().matches("database unavailable").count(), 1);
    }

    #[tokio::test]
    async fn test_migration_failure_reported_once() {
        let failure = StoreError::from(sqlx::migrate::MigrateError::VersionMissing(1));
        let store = PgItemStore::unavailable(failure.to_string());

        let err = store.insert(NewItem::new("Pen", "Blue ink")).await.unwrap_err();
        let text = err.to_string();
        assert!(text.starts_with("database unavailable: migration failed: "));
        assert_eq!(text.matches("database unavailable").count(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_every_operation() {
        let store = PgItemStore::unavailable("connection refused");

        let err = store.insert(NewItem::new("Pen", "Blue ink")).await.unwrap_err();
        assert_eq!(err.to_string(), "database unavailable: connection refused");

        let err = store.list_all().await.unwrap_err();
        assert_eq!(err.to_string(), "database unavailable: connection refused");
    }
}
