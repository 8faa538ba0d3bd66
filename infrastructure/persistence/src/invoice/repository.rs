use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::invoice::model::Invoice;
use business::domain::invoice::repository::InvoiceRepository;

use super::entity::InvoiceEntity;

const COLUMNS: &str = "id, order_id, number, pdf_path, created_at";

pub struct InvoiceRepositoryPostgres {
    pool: PgPool,
}

impl InvoiceRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvoiceRepository for InvoiceRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<Invoice, RepositoryError> {
        let entity = sqlx::query_as::<_, InvoiceEntity>(&format!(
            "SELECT {COLUMNS} FROM invoices WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_by_order_id(&self, order_id: Uuid) -> Result<Option<Invoice>, RepositoryError> {
        let entity = sqlx::query_as::<_, InvoiceEntity>(&format!(
            "SELECT {COLUMNS} FROM invoices WHERE order_id = $1"
        ))
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn max_sequence(&self, year: i32) -> Result<Option<u32>, RepositoryError> {
        // Numbers are YYYY-NNNNNN with a fixed-width sequence, so the
        // numeric maximum is the integer cast of the last six characters.
        let max: Option<i32> = sqlx::query_scalar(
            "SELECT MAX(CAST(RIGHT(number, 6) AS INTEGER)) FROM invoices WHERE number LIKE $1",
        )
        .bind(format!("{year}-%"))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Reading invoice sequence failed: {e}");
            RepositoryError::DatabaseError
        })?;

        Ok(max.map(|m| m.max(0) as u32))
    }

    async fn save(&self, invoice: &Invoice) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO invoices (id, order_id, number, pdf_path, created_at)
            VALUES ($1, $2, $3, $4, $5)"#,
        )
        .bind(invoice.id)
        .bind(invoice.order_id)
        .bind(&invoice.number)
        .bind(&invoice.pdf_path)
        .bind(invoice.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // The unique index on order_id turns the concurrent-generation
            // race into this variant.
            if e.as_database_error()
                .is_some_and(|d| d.code().as_deref() == Some("23505"))
            {
                RepositoryError::Duplicated
            } else {
                tracing::error!("Saving invoice failed: {e}");
                RepositoryError::DatabaseError
            }
        })?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
