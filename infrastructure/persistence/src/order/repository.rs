use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::repository::OrderRepository;
use business::domain::shared::value_objects::{Page, PageRequest};

use super::entity::OrderEntity;

const COLUMNS: &str = "id, user_id, lines, address, subtotal, tax, shipping, total, status, \
     invoice_id, created_at, updated_at";

pub struct OrderRepositoryPostgres {
    pool: PgPool,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError> {
        let entity = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_page(&self, page: PageRequest) -> Result<Page<Order>, RepositoryError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        let entities = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {COLUMNS} FROM orders ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        ))
        .bind(i64::from(page.per_page()))
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Listing orders failed: {e}");
            RepositoryError::DatabaseError
        })?;

        Ok(Page::new(
            entities.into_iter().map(|e| e.into_domain()).collect(),
            total as u64,
            page,
        ))
    }

    async fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO orders (id, user_id, lines, address, subtotal, tax, shipping, total, status, invoice_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (id) DO UPDATE SET
                status = EXCLUDED.status,
                invoice_id = EXCLUDED.invoice_id,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(order.id)
        .bind(order.user_id.as_str())
        .bind(Json(&order.lines))
        .bind(Json(&order.address))
        .bind(order.totals.subtotal)
        .bind(order.totals.tax)
        .bind(order.totals.shipping)
        .bind(order.totals.total)
        .bind(order.status.to_string())
        .bind(order.invoice_id)
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Saving order failed: {e}");
            RepositoryError::DatabaseError
        })?;

        Ok(())
    }
}
