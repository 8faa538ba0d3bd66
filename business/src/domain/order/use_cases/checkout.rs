use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::value_objects::ShippingAddress;
use crate::domain::shared::value_objects::UserId;

pub struct CheckoutParams {
    pub cart_key: String,
    pub user_id: UserId,
    pub address: ShippingAddress,
}

#[async_trait]
pub trait CheckoutUseCase: Send + Sync {
    async fn execute(&self, params: CheckoutParams) -> Result<Order, OrderError>;
}
