use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::birth_list::errors::BirthListError;
use crate::domain::birth_list::model::BirthListItem;

pub struct CancelReservationParams {
    pub list_id: Uuid,
    pub item_id: Uuid,
}

#[async_trait]
pub trait CancelReservationUseCase: Send + Sync {
    async fn execute(
        &self,
        params: CancelReservationParams,
    ) -> Result<BirthListItem, BirthListError>;
}
