use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::birth_list::errors::BirthListError;
use crate::domain::birth_list::model::{BirthListItem, Contributor};

/// Buyer-facing: no session required, identity travels in the request.
pub struct ReserveItemParams {
    pub list_id: Uuid,
    pub item_id: Uuid,
    pub contributor: Contributor,
}

#[async_trait]
pub trait ReserveItemUseCase: Send + Sync {
    async fn execute(&self, params: ReserveItemParams) -> Result<BirthListItem, BirthListError>;
}
