use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{Page, PageRequest};

use super::model::Product;
use super::value_objects::ProductFilters;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_page(
        &self,
        filters: &ProductFilters,
        page: PageRequest,
    ) -> Result<Page<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
