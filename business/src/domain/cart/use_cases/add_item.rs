use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartItem, CartRecord};
use crate::domain::shared::value_objects::UserId;

pub struct AddCartItemParams {
    pub key: String,
    pub user: Option<UserId>,
    pub item: CartItem,
    pub quantity: u32,
}

#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    async fn execute(&self, params: AddCartItemParams) -> Result<CartRecord, CartError>;
}
