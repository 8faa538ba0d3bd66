use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::order::model::{Order, OrderLine, Totals};
use business::domain::order::value_objects::{OrderStatus, ShippingAddress};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum OrderStatusDto {
    #[oai(rename = "pending")]
    Pending,
    #[oai(rename = "paid")]
    Paid,
    #[oai(rename = "shipped")]
    Shipped,
    #[oai(rename = "delivered")]
    Delivered,
    #[oai(rename = "cancelled")]
    Cancelled,
}

impl From<OrderStatus> for OrderStatusDto {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => OrderStatusDto::Pending,
            OrderStatus::Paid => OrderStatusDto::Paid,
            OrderStatus::Shipped => OrderStatusDto::Shipped,
            OrderStatus::Delivered => OrderStatusDto::Delivered,
            OrderStatus::Cancelled => OrderStatusDto::Cancelled,
        }
    }
}

impl From<OrderStatusDto> for OrderStatus {
    fn from(dto: OrderStatusDto) -> Self {
        match dto {
            OrderStatusDto::Pending => OrderStatus::Pending,
            OrderStatusDto::Paid => OrderStatus::Paid,
            OrderStatusDto::Shipped => OrderStatus::Shipped,
            OrderStatusDto::Delivered => OrderStatus::Delivered,
            OrderStatusDto::Cancelled => OrderStatus::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ShippingAddressDto {
    pub full_name: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    #[oai(skip_serializing_if_is_none)]
    pub phone: Option<String>,
}

impl From<ShippingAddressDto> for ShippingAddress {
    fn from(dto: ShippingAddressDto) -> Self {
        Self {
            full_name: dto.full_name,
            street: dto.street,
            city: dto.city,
            postal_code: dto.postal_code,
            country: dto.country,
            phone: dto.phone,
        }
    }
}

impl From<&ShippingAddress> for ShippingAddressDto {
    fn from(address: &ShippingAddress) -> Self {
        Self {
            full_name: address.full_name.clone(),
            street: address.street.clone(),
            city: address.city.clone(),
            postal_code: address.postal_code.clone(),
            country: address.country.clone(),
            phone: address.phone.clone(),
        }
    }
}

/// Immutable copy of one cart line taken at checkout time.
#[derive(Debug, Clone, Object)]
pub struct OrderLineResponse {
    /// Product id for regular lines, registry item id for gifts
    pub reference: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub is_gift: bool,
}

impl From<&OrderLine> for OrderLineResponse {
    fn from(line: &OrderLine) -> Self {
        Self {
            reference: line.reference.clone(),
            name: line.name.clone(),
            unit_price: line.unit_price,
            quantity: line.quantity,
            is_gift: line.is_gift,
        }
    }
}

/// Order money breakdown. Line prices include VAT; `tax` reports the
/// included portion.
#[derive(Debug, Clone, Object)]
pub struct TotalsResponse {
    pub subtotal: f64,
    pub tax: f64,
    pub shipping: f64,
    pub total: f64,
}

impl From<Totals> for TotalsResponse {
    fn from(totals: Totals) -> Self {
        Self {
            subtotal: totals.subtotal,
            tax: totals.tax,
            shipping: totals.shipping,
            total: totals.total,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderResponse {
    /// Order unique identifier
    pub id: String,
    /// Buyer user id
    pub user_id: String,
    pub lines: Vec<OrderLineResponse>,
    pub address: ShippingAddressDto,
    pub totals: TotalsResponse,
    pub status: OrderStatusDto,
    /// Set once the invoice PDF has been generated
    #[oai(skip_serializing_if_is_none)]
    pub invoice_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            user_id: order.user_id.to_string(),
            lines: order.lines.iter().map(|l| l.into()).collect(),
            address: (&order.address).into(),
            totals: order.totals.into(),
            status: order.status.into(),
            invoice_id: order.invoice_id.map(|id| id.to_string()),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutRequest {
    /// Shipping address; all fields except phone are required
    pub address: ShippingAddressDto,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatusDto,
}

/// One back-office page plus the total row count for the query.
#[derive(Debug, Clone, Object)]
pub struct OrderPageResponse {
    pub items: Vec<OrderResponse>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}
