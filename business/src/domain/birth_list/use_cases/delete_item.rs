use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::birth_list::errors::BirthListError;
use crate::domain::birth_list::model::BirthList;
use crate::domain::shared::value_objects::Actor;

pub struct DeleteItemParams {
    pub list_id: Uuid,
    pub actor: Actor,
    pub item_id: Uuid,
}

#[async_trait]
pub trait DeleteItemUseCase: Send + Sync {
    async fn execute(&self, params: DeleteItemParams) -> Result<BirthList, BirthListError>;
}
