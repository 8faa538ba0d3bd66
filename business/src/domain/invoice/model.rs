use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One invoice per order, created lazily on the first PDF request and cached
/// by the archived file path afterwards.
#[derive(Debug, Clone)]
pub struct Invoice {
    pub id: Uuid,
    pub order_id: Uuid,
    /// Human-readable number, sequential per calendar year: `YYYY-NNNNNN`.
    pub number: String,
    pub pdf_path: String,
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    pub fn new(order_id: Uuid, number: String, pdf_path: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            number,
            pdf_path,
            created_at: Utc::now(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        order_id: Uuid,
        number: String,
        pdf_path: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            order_id,
            number,
            pdf_path,
            created_at,
        }
    }
}
