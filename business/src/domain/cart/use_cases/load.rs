use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartRecord;
use crate::domain::shared::value_objects::UserId;

pub struct LoadCartParams {
    pub key: String,
    /// Present when a session is active; triggers the server-cart merge.
    pub user: Option<UserId>,
}

#[async_trait]
pub trait LoadCartUseCase: Send + Sync {
    async fn execute(&self, params: LoadCartParams) -> Result<CartRecord, CartError>;
}
