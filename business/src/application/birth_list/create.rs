use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::birth_list::errors::BirthListError;
use crate::domain::birth_list::model::BirthList;
use crate::domain::birth_list::repository::BirthListRepository;
use crate::domain::birth_list::use_cases::create::{CreateBirthListParams, CreateBirthListUseCase};
use crate::domain::logger::Logger;

pub struct CreateBirthListUseCaseImpl {
    pub repository: Arc<dyn BirthListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateBirthListUseCase for CreateBirthListUseCaseImpl {
    async fn execute(&self, params: CreateBirthListParams) -> Result<BirthList, BirthListError> {
        self.logger.info(&format!(
            "Creating birth list for owner: {}",
            params.props.owner_id
        ));

        let list = BirthList::new(params.props)?;
        self.repository.save(&list).await?;

        self.logger.info(&format!("Birth list created: {}", list.id));
        Ok(list)
    }
}
