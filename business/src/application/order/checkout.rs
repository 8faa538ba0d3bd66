use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::cart::model::CartRecord;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::storage::CartStorage;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::checkout::{CheckoutParams, CheckoutUseCase};

pub struct CheckoutUseCaseImpl {
    pub order_repository: Arc<dyn OrderRepository>,
    pub cart_storage: Arc<dyn CartStorage>,
    pub cart_repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckoutUseCase for CheckoutUseCaseImpl {
    async fn execute(&self, params: CheckoutParams) -> Result<Order, OrderError> {
        self.logger
            .info(&format!("Checking out cart {}", params.cart_key));

        let raw = self
            .cart_storage
            .get(&params.cart_key)
            .await
            .map_err(OrderError::Repository)?;
        let record = raw
            .and_then(|r| serde_json::from_str::<CartRecord>(&r).ok())
            .filter(|r| r.is_fresh(Utc::now()) && r.is_well_formed())
            .ok_or(OrderError::CartEmpty)?;

        let order = Order::from_cart(params.user_id.clone(), &record.items, params.address)?;
        self.order_repository.save(&order).await?;

        // The cart is spent once the order exists. Cleanup failures only get
        // logged; the order must not be lost over them.
        if let Err(e) = self.cart_storage.remove(&params.cart_key).await {
            self.logger.warn(&format!(
                "Could not clear cart {} after checkout: {e}",
                params.cart_key
            ));
        }
        if let Err(e) = self.cart_repository.delete(&params.user_id).await {
            self.logger.warn(&format!(
                "Could not clear server cart for {} after checkout: {e}",
                params.user_id
            ));
        }

        Ok(order)
    }
}
