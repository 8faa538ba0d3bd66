use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::cart::storage::CartStorage;
use business::domain::errors::RepositoryError;

/// Device-keyed cart blobs. The payload is stored opaque; all shape and
/// freshness rules live in the domain layer.
pub struct CartStoragePostgres {
    pool: PgPool,
}

impl CartStoragePostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartStorage for CartStoragePostgres {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let payload: Option<String> =
            sqlx::query_scalar("SELECT payload FROM cart_records WHERE key = $1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Reading cart record failed: {e}");
                    RepositoryError::DatabaseError
                })?;

        Ok(payload)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO cart_records (key, payload, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key) DO UPDATE SET
                payload = EXCLUDED.payload,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Writing cart record failed: {e}");
            RepositoryError::DatabaseError
        })?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart_records WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
