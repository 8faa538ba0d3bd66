use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::birth_list::errors::BirthListError;
use crate::domain::birth_list::model::BirthList;
use crate::domain::birth_list::repository::BirthListRepository;
use crate::domain::birth_list::use_cases::get_all::{
    GetOwnBirthListsParams, GetOwnBirthListsUseCase,
};
use crate::domain::logger::Logger;

pub struct GetOwnBirthListsUseCaseImpl {
    pub repository: Arc<dyn BirthListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOwnBirthListsUseCase for GetOwnBirthListsUseCaseImpl {
    async fn execute(
        &self,
        params: GetOwnBirthListsParams,
    ) -> Result<Vec<BirthList>, BirthListError> {
        self.logger
            .debug(&format!("Listing birth lists of: {}", params.owner_id));

        let lists = self.repository.get_by_owner(&params.owner_id).await?;
        Ok(lists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::birth_list::model::NewBirthListProps;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub BirthListRepo {}

        #[async_trait]
        impl BirthListRepository for BirthListRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<BirthList, RepositoryError>;
            async fn get_by_owner(&self, owner_id: &UserId) -> Result<Vec<BirthList>, RepositoryError>;
            async fn save(&self, list: &BirthList) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_list_only_requested_owner() {
        let owner = UserId::new("owner-1");
        let owned = BirthList::new(NewBirthListProps {
            owner_id: owner.clone(),
            title: "Lista de Vega".to_string(),
            description: None,
            baby_name: None,
            due_date: None,
            is_public: true,
            theme: None,
        })
        .unwrap();

        let mut mock_repo = MockBirthListRepo::new();
        let expected_owner = owner.clone();
        mock_repo
            .expect_get_by_owner()
            .withf(move |o| *o == expected_owner)
            .returning(move |_| Ok(vec![owned.clone()]));

        let use_case = GetOwnBirthListsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetOwnBirthListsParams { owner_id: owner })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 1);
    }
}
