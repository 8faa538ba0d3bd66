use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::birth_list::errors::BirthListError;
use crate::domain::birth_list::model::BirthListItem;
use crate::domain::birth_list::repository::BirthListRepository;
use crate::domain::birth_list::use_cases::reserve_item::{ReserveItemParams, ReserveItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct ReserveItemUseCaseImpl {
    pub repository: Arc<dyn BirthListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ReserveItemUseCase for ReserveItemUseCaseImpl {
    async fn execute(&self, params: ReserveItemParams) -> Result<BirthListItem, BirthListError> {
        self.logger.info(&format!(
            "Reserving item {} of birth list {}",
            params.item_id, params.list_id
        ));

        let mut list = self
            .repository
            .get_by_id(params.list_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => BirthListError::NotFound,
                other => BirthListError::Repository(other),
            })?;

        let item = list.item_mut(params.item_id)?;
        item.reserve(params.contributor, Utc::now())?;
        let reserved = item.clone();

        list.refresh_status();
        self.repository.save(&list).await?;

        Ok(reserved)
    }
}
