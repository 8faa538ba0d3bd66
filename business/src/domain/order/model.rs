use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::cart::model::{CartItem, CartItemKind};
use crate::domain::shared::value_objects::UserId;

use super::errors::OrderError;
use super::value_objects::{OrderStatus, ShippingAddress};

/// Spanish standard VAT rate applied over the tax-inclusive subtotal.
pub const TAX_RATE: f64 = 0.21;
pub const SHIPPING_FLAT: f64 = 4.95;
pub const FREE_SHIPPING_FROM: f64 = 50.0;

/// Immutable copy of one cart line taken at checkout time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Cart item id: product id for regular lines, registry item id for gifts.
    pub reference: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub is_gift: bool,
}

impl OrderLine {
    fn from_cart_item(item: &CartItem) -> Self {
        Self {
            reference: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.price,
            quantity: item.quantity,
            is_gift: item.kind == CartItemKind::Gift,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: f64,
    pub tax: f64,
    pub shipping: f64,
    pub total: f64,
}

impl Totals {
    /// Line prices already include VAT; `tax` reports the included portion.
    pub fn compute(lines: &[OrderLine]) -> Self {
        let subtotal = round2(
            lines
                .iter()
                .map(|l| l.unit_price * f64::from(l.quantity))
                .sum(),
        );
        let tax = round2(subtotal * TAX_RATE / (1.0 + TAX_RATE));
        let shipping = if subtotal >= FREE_SHIPPING_FROM {
            0.0
        } else {
            SHIPPING_FLAT
        };
        let total = round2(subtotal + shipping);
        Self {
            subtotal,
            tax,
            shipping,
            total,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A finalized order. Immutable after creation except for `status` and the
/// invoice link set when the PDF is first generated.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub user_id: UserId,
    pub lines: Vec<OrderLine>,
    pub address: ShippingAddress,
    pub totals: Totals,
    pub status: OrderStatus,
    pub invoice_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn from_cart(
        user_id: UserId,
        items: &[CartItem],
        address: ShippingAddress,
    ) -> Result<Self, OrderError> {
        if items.is_empty() {
            return Err(OrderError::CartEmpty);
        }
        if !address.is_complete() {
            return Err(OrderError::AddressIncomplete);
        }

        let lines: Vec<OrderLine> = items.iter().map(OrderLine::from_cart_item).collect();
        let totals = Totals::compute(&lines);
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            lines,
            address,
            totals,
            status: OrderStatus::Pending,
            invoice_id: None,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    pub fn link_invoice(&mut self, invoice_id: Uuid) {
        self.invoice_id = Some(invoice_id);
        self.updated_at = Utc::now();
    }

    pub fn unlink_invoice(&mut self) {
        self.invoice_id = None;
        self.updated_at = Utc::now();
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        lines: Vec<OrderLine>,
        address: ShippingAddress,
        totals: Totals,
        status: OrderStatus,
        invoice_id: Option<Uuid>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            lines,
            address,
            totals,
            status,
            invoice_id,
            created_at,
            updated_at,
        }
    }
}
