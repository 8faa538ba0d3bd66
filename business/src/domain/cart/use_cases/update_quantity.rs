use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartRecord;
use crate::domain::shared::value_objects::UserId;

pub struct UpdateCartQuantityParams {
    pub key: String,
    pub user: Option<UserId>,
    pub item_id: String,
    pub quantity: u32,
}

#[async_trait]
pub trait UpdateCartQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCartQuantityParams) -> Result<CartRecord, CartError>;
}
