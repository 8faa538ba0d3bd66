use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::order::model::{Order, OrderLine, Totals};
use business::domain::order::value_objects::{OrderStatus, ShippingAddress};
use business::domain::shared::value_objects::UserId;

/// Order lines and the shipping address are denormalized JSON; both are
/// snapshots that never change after checkout.
#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: Uuid,
    pub user_id: String,
    pub lines: Json<Vec<OrderLine>>,
    pub address: Json<ShippingAddress>,
    pub subtotal: f64,
    pub tax: f64,
    pub shipping: f64,
    pub total: f64,
    pub status: String,
    pub invoice_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderEntity {
    pub fn into_domain(self) -> Order {
        Order::from_repository(
            self.id,
            UserId::new(&self.user_id),
            self.lines.0,
            self.address.0,
            Totals {
                subtotal: self.subtotal,
                tax: self.tax,
                shipping: self.shipping,
                total: self.total,
            },
            self.status
                .parse::<OrderStatus>()
                .unwrap_or(OrderStatus::Pending),
            self.invoice_id,
            self.created_at,
            self.updated_at,
        )
    }
}
