use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::birth_list::errors::BirthListError;
use crate::domain::birth_list::model::BirthList;
use crate::domain::birth_list::repository::BirthListRepository;
use crate::domain::birth_list::use_cases::get_by_id::{
    GetBirthListByIdParams, GetBirthListByIdUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetBirthListByIdUseCaseImpl {
    pub repository: Arc<dyn BirthListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetBirthListByIdUseCase for GetBirthListByIdUseCaseImpl {
    async fn execute(&self, params: GetBirthListByIdParams) -> Result<BirthList, BirthListError> {
        self.logger
            .debug(&format!("Fetching birth list: {}", params.id));

        let list = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => BirthListError::NotFound,
                other => BirthListError::Repository(other),
            })?;

        if !list.is_public {
            let allowed = params
                .viewer
                .as_ref()
                .is_some_and(|viewer| viewer.can_manage(&list.owner_id));
            if !allowed {
                return Err(BirthListError::Forbidden);
            }
        }

        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::birth_list::model::NewBirthListProps;
    use crate::domain::shared::value_objects::{Actor, Role, UserId};
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

    fn list(is_public: bool) -> BirthList {
        BirthList::new(NewBirthListProps {
            owner_id: UserId::new("owner-1"),
            title: "Lista privada".to_string(),
            description: None,
            baby_name: None,
            due_date: None,
            is_public,
            theme: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_serve_public_list_to_anonymous_viewer() {
        let stored = list(true);
        let id = stored.id;
        let mut mock_repo = MockBirthListRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));

        let use_case = GetBirthListByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetBirthListByIdParams { id, viewer: None })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_hide_private_list_from_strangers() {
        let stored = list(false);
        let id = stored.id;
        let mut mock_repo = MockBirthListRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));

        let use_case = GetBirthListByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetBirthListByIdParams {
                id,
                viewer: Some(Actor::new("stranger", Role::Customer)),
            })
            .await;

        assert!(matches!(result, Err(BirthListError::Forbidden)));
    }

    #[tokio::test]
    async fn should_serve_private_list_to_owner_and_admin() {
        let stored = list(false);
        let id = stored.id;
        let mut mock_repo = MockBirthListRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));

        let use_case = GetBirthListByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        for actor in [
            Actor::new("owner-1", Role::Customer),
            Actor::new("staff", Role::Admin),
        ] {
            let result = use_case
                .execute(GetBirthListByIdParams {
                    id,
                    viewer: Some(actor),
                })
                .await;
            assert!(result.is_ok());
        }
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_list() {
        let mut mock_repo = MockBirthListRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetBirthListByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetBirthListByIdParams {
                id: Uuid::new_v4(),
                viewer: None,
            })
            .await;

        assert!(matches!(result, Err(BirthListError::NotFound)));
    }
}
