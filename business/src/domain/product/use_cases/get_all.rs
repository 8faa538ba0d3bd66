use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductFilters;
use crate::domain::shared::value_objects::{Page, PageRequest};

pub struct GetAllProductsParams {
    pub filters: ProductFilters,
    pub page: PageRequest,
}

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Page<Product>, ProductError>;
}
