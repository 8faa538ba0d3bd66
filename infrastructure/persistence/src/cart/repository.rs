use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;

use business::domain::cart::model::CartRecord;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

/// Server-side cart mirror, one row per authenticated user.
pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<CartRecord>, RepositoryError> {
        let record: Option<Json<CartRecord>> =
            sqlx::query_scalar("SELECT payload FROM user_carts WHERE user_id = $1")
                .bind(user_id.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Reading server cart failed: {e}");
                    RepositoryError::DatabaseError
                })?;

        Ok(record.map(|r| r.0))
    }

    async fn save(&self, user_id: &UserId, record: &CartRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO user_carts (user_id, payload, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (user_id) DO UPDATE SET
                payload = EXCLUDED.payload,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(user_id.as_str())
        .bind(Json(record))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Writing server cart failed: {e}");
            RepositoryError::DatabaseError
        })?;

        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM user_carts WHERE user_id = $1")
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
