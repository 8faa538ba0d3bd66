use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::birth_list::errors::BirthListError;
use crate::domain::birth_list::model::{BirthListItem, Contributor};

pub struct PurchaseItemParams {
    pub list_id: Uuid,
    pub item_id: Uuid,
    pub contributor: Contributor,
}

#[async_trait]
pub trait PurchaseItemUseCase: Send + Sync {
    async fn execute(&self, params: PurchaseItemParams) -> Result<BirthListItem, BirthListError>;
}
