use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::birth_list::errors::BirthListError;
use crate::domain::birth_list::model::BirthList;
use crate::domain::shared::value_objects::Actor;

pub struct GetBirthListByIdParams {
    pub id: Uuid,
    /// Anonymous viewers may only see public lists.
    pub viewer: Option<Actor>,
}

#[async_trait]
pub trait GetBirthListByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetBirthListByIdParams) -> Result<BirthList, BirthListError>;
}
