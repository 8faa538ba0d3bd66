use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::shared::value_objects::{Page, PageRequest};

/// Admin back-office listing.
pub struct GetAllOrdersParams {
    pub page: PageRequest,
}

#[async_trait]
pub trait GetAllOrdersUseCase: Send + Sync {
    async fn execute(&self, params: GetAllOrdersParams) -> Result<Page<Order>, OrderError>;
}
