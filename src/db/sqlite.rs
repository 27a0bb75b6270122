use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::{pool, KeyValueStore};
use crate::error::StorageResult;

/// Key-value storage in a SQLite table. Every key lives under `scope`, so
/// several consumers can share one database file.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
    scope: String,
}

impl SqliteStore {
    /// Wraps an existing pool. The schema must already be migrated.
    pub fn new(pool: SqlitePool, scope: impl Into<String>) -> Self {
        Self {
            pool,
            scope: scope.into(),
        }
    }

    pub async fn open(
        database_url: &str,
        max_connections: u32,
        scope: impl Into<String>,
    ) -> StorageResult<Self> {
        let pool = pool::create_pool(database_url, max_connections).await?;
        pool::run_migrations(&pool).await?;
        let store = Self::new(pool, scope);
        tracing::info!(scope = %store.scope, "Key-value store opened");
        Ok(store)
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = sqlx::query_scalar::<_, String>(
            "SELECT value FROM kv_store WHERE scope = ?1 AND key = ?2",
        )
        .bind(&self.scope)
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        sqlx::query(
            r#"
            INSERT INTO kv_store (scope, key, value, updated_at)
            VALUES (?1, ?2, ?3, CURRENT_TIMESTAMP)
            ON CONFLICT (scope, key) DO UPDATE SET
                value = excluded.value,
                updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(&self.scope)
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        sqlx::query("DELETE FROM kv_store WHERE scope = ?1 AND key = ?2")
            .bind(&self.scope)
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn multi_get(&self, keys: &[String]) -> StorageResult<Vec<(String, Option<String>)>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = QueryBuilder::<Sqlite>::new("SELECT key, value FROM kv_store WHERE scope = ");
        query.push_bind(self.scope.clone());
        query.push(" AND key IN (");
        let mut separated = query.separated(", ");
        for key in keys {
            separated.push_bind(key.clone());
        }
        separated.push_unseparated(")");

        let rows = query
            .build_query_as::<(String, String)>()
            .fetch_all(&self.pool)
            .await?;

        let mut found: HashMap<String, String> = rows.into_iter().collect();
        Ok(keys
            .iter()
            .map(|key| (key.clone(), found.remove(key)))
            .collect())
    }
}
