use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::invoice::model::Invoice;

#[derive(Debug, FromRow)]
pub struct InvoiceEntity {
    pub id: Uuid,
    pub order_id: Uuid,
    pub number: String,
    pub pdf_path: String,
    pub created_at: DateTime<Utc>,
}

impl InvoiceEntity {
    pub fn into_domain(self) -> Invoice {
        Invoice::from_repository(
            self.id,
            self.order_id,
            self.number,
            self.pdf_path,
            self.created_at,
        )
    }
}
