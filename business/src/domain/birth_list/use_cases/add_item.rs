use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::birth_list::errors::BirthListError;
use crate::domain::birth_list::model::BirthList;
use crate::domain::shared::value_objects::Actor;

pub struct AddItemParams {
    pub list_id: Uuid,
    pub actor: Actor,
    pub product_id: Uuid,
    pub quantity: u32,
    pub priority: i32,
}

#[async_trait]
pub trait AddItemUseCase: Send + Sync {
    async fn execute(&self, params: AddItemParams) -> Result<BirthList, BirthListError>;
}
