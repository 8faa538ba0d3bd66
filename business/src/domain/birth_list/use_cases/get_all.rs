use async_trait::async_trait;

use crate::domain::birth_list::errors::BirthListError;
use crate::domain::birth_list::model::BirthList;
use crate::domain::shared::value_objects::UserId;

pub struct GetOwnBirthListsParams {
    pub owner_id: UserId,
}

#[async_trait]
pub trait GetOwnBirthListsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetOwnBirthListsParams,
    ) -> Result<Vec<BirthList>, BirthListError>;
}
