use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::birth_list::errors::BirthListError;
use crate::domain::birth_list::model::BirthList;
use crate::domain::birth_list::repository::BirthListRepository;
use crate::domain::birth_list::use_cases::delete_item::{DeleteItemParams, DeleteItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct DeleteItemUseCaseImpl {
    pub repository: Arc<dyn BirthListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteItemUseCase for DeleteItemUseCaseImpl {
    async fn execute(&self, params: DeleteItemParams) -> Result<BirthList, BirthListError> {
        self.logger.info(&format!(
            "Deleting item {} from birth list {}",
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

        if !params.actor.can_manage(&list.owner_id) {
            return Err(BirthListError::Forbidden);
        }

        list.remove_item(params.item_id)?;
        list.refresh_status();
        self.repository.save(&list).await?;

        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::birth_list::model::{Contributor, NewBirthListProps};
    use crate::domain::birth_list::value_objects::BirthListStatus;
    use crate::domain::product::model::{NewProductProps, Product};
    use crate::domain::product::value_objects::{ProductStatus, Stock};
    use crate::domain::shared::value_objects::{Actor, Role, UserId};
    use chrono::Utc;
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

    fn product(name: &str) -> Product {
        Product::new(NewProductProps {
            name: name.to_string(),
            reference: None,
            price: 10.0,
            price_excl_tax: 8.26,
            category: "varios".to_string(),
            brand: None,
            images: vec![],
            stock: Stock::new(5, 1),
            status: ProductStatus::Active,
            featured: false,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_remove_item_and_rederive_status() {
        // Two items: one purchased, one pending. Removing the pending one
        // leaves only purchased items, so the list completes.
        let mut stored = BirthList::new(NewBirthListProps {
            owner_id: UserId::new("owner-1"),
            title: "Lista".to_string(),
            description: None,
            baby_name: None,
            due_date: None,
            is_public: true,
            theme: None,
        })
        .unwrap();
        let bought = stored.add_item(&product("Bodies"), 1, 0).unwrap();
        let pending = stored.add_item(&product("Gorro"), 1, 0).unwrap();
        stored
            .item_mut(bought)
            .unwrap()
            .purchase(
                Contributor::new("Ana".to_string(), "ana@x.com".to_string(), None, None),
                Utc::now(),
            )
            .unwrap();

        let list_id = stored.id;
        let mut mock_repo = MockBirthListRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteItemParams {
                list_id,
                actor: Actor::new("owner-1", Role::Customer),
                item_id: pending,
            })
            .await;

        assert!(result.is_ok());
        let list = result.unwrap();
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.status, BirthListStatus::Completed);
    }

    #[tokio::test]
    async fn should_reject_stranger_deleting_item() {
        let mut stored = BirthList::new(NewBirthListProps {
            owner_id: UserId::new("owner-1"),
            title: "Lista".to_string(),
            description: None,
            baby_name: None,
            due_date: None,
            is_public: true,
            theme: None,
        })
        .unwrap();
        let item_id = stored.add_item(&product("Bodies"), 1, 0).unwrap();
        let list_id = stored.id;

        let mut mock_repo = MockBirthListRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteItemParams {
                list_id,
                actor: Actor::new("stranger", Role::Customer),
                item_id,
            })
            .await;

        assert!(matches!(result, Err(BirthListError::Forbidden)));
    }
}
