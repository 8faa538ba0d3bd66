use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Invoice;

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Invoice, RepositoryError>;
    async fn find_by_order_id(&self, order_id: Uuid) -> Result<Option<Invoice>, RepositoryError>;
    /// Highest sequence already issued for the given calendar year.
    async fn max_sequence(&self, year: i32) -> Result<Option<u32>, RepositoryError>;
    /// Must surface `RepositoryError::Duplicated` when an invoice for the
    /// same order already exists (unique index on order id).
    async fn save(&self, invoice: &Invoice) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
