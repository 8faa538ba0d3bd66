use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::invoice::errors::InvoiceError;
use crate::domain::invoice::model::Invoice;
use crate::domain::shared::value_objects::Actor;

pub struct GetInvoicePdfParams {
    pub order_id: Uuid,
    pub actor: Actor,
}

/// The invoice record plus the PDF bytes to stream back.
pub struct InvoicePdf {
    pub invoice: Invoice,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait GetInvoicePdfUseCase: Send + Sync {
    async fn execute(&self, params: GetInvoicePdfParams) -> Result<InvoicePdf, InvoiceError>;
}
