use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::birth_list::errors::BirthListError;
use crate::domain::birth_list::model::BirthList;
use crate::domain::birth_list::repository::BirthListRepository;
use crate::domain::birth_list::use_cases::update_items::{UpdateItemsParams, UpdateItemsUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateItemsUseCaseImpl {
    pub repository: Arc<dyn BirthListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateItemsUseCase for UpdateItemsUseCaseImpl {
    async fn execute(&self, params: UpdateItemsParams) -> Result<BirthList, BirthListError> {
        self.logger.info(&format!(
            "Batch updating {} items of birth list {}",
            params.patches.len(),
            params.list_id
        ));

        let mut list = self
            .repository
            .get_by_id(params.list_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => BirthListError::NotFound,
                other => BirthListError::Repository(other),
            })?;

        if !params.actor.can_manage(&list.owner_id) {
            return Err(BirthListError::Forbidden);
        }

        // Validate the whole batch against in-memory state before saving so
        // a failing patch leaves nothing persisted.
        for patch in &params.patches {
            let item = list.item_mut(patch.item_id)?;
            if let Some(quantity) = patch.quantity {
                if quantity == 0 {
                    return Err(BirthListError::QuantityInvalid);
                }
                item.quantity = quantity;
            }
            if let Some(priority) = patch.priority {
                item.priority = priority;
            }
        }

        list.refresh_status();
        self.repository.save(&list).await?;

        Ok(list)
    }
}
