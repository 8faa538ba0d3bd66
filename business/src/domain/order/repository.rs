use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{Page, PageRequest};

use super::model::Order;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
    async fn find_page(&self, page: PageRequest) -> Result<Page<Order>, RepositoryError>;
    async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
}
