use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartRecord;
use crate::domain::shared::value_objects::UserId;

pub struct RemoveCartItemParams {
    pub key: String,
    pub user: Option<UserId>,
    pub item_id: String,
}

#[async_trait]
pub trait RemoveCartItemUseCase: Send + Sync {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<CartRecord, CartError>;
}
