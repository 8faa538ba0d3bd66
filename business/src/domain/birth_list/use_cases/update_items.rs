use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::birth_list::errors::BirthListError;
use crate::domain::birth_list::model::BirthList;
use crate::domain::shared::value_objects::Actor;

/// One entry of the batch edit. State is never editable through this path;
/// it only moves through the reserve/purchase/cancel transitions.
pub struct ItemPatch {
    pub item_id: Uuid,
    pub quantity: Option<u32>,
    pub priority: Option<i32>,
}

pub struct UpdateItemsParams {
    pub list_id: Uuid,
    pub actor: Actor,
    pub patches: Vec<ItemPatch>,
}

#[async_trait]
pub trait UpdateItemsUseCase: Send + Sync {
    async fn execute(&self, params: UpdateItemsParams) -> Result<BirthList, BirthListError>;
}
