use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::invoice::errors::InvoiceError;

/// Admin-only; removes the record and the archived file and unlinks the order.
pub struct DeleteInvoiceParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteInvoiceUseCase: Send + Sync {
    async fn execute(&self, params: DeleteInvoiceParams) -> Result<(), InvoiceError>;
}
