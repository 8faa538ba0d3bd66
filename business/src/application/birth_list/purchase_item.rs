use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::birth_list::errors::BirthListError;
use crate::domain::birth_list::model::BirthListItem;
use crate::domain::birth_list::repository::BirthListRepository;
use crate::domain::birth_list::use_cases::purchase_item::{
    PurchaseItemParams, PurchaseItemUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct PurchaseItemUseCaseImpl {
    pub repository: Arc<dyn BirthListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PurchaseItemUseCase for PurchaseItemUseCaseImpl {
    async fn execute(&self, params: PurchaseItemParams) -> Result<BirthListItem, BirthListError> {
        self.logger.info(&format!(
            "Purchasing item {} of birth list {}",
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
        item.purchase(params.contributor, Utc::now())?;
        let purchased = item.clone();

        list.refresh_status();
        self.repository.save(&list).await?;

        Ok(purchased)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::birth_list::model::{BirthList, Contributor, NewBirthListProps};
    use crate::domain::birth_list::value_objects::{BirthListStatus, ItemState};
    use crate::domain::product::model::{NewProductProps, Product};
    use crate::domain::product::value_objects::{ProductStatus, Stock};
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

    fn product(name: &str) -> Product {
        Product::new(NewProductProps {
            name: name.to_string(),
            reference: None,
            price: 12.0,
            price_excl_tax: 9.92,
            category: "varios".to_string(),
            brand: None,
            images: vec![],
            stock: Stock::new(5, 1),
            status: ProductStatus::Active,
            featured: false,
        })
        .unwrap()
    }

    fn contributor(name: &str) -> Contributor {
        Contributor::new(name.to_string(), format!("{name}@x.com"), None, None)
    }

    #[tokio::test]
    async fn should_complete_list_when_last_item_purchased() {
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
        let first = stored.add_item(&product("Bodies"), 1, 0).unwrap();
        let last = stored.add_item(&product("Gorro"), 1, 0).unwrap();
        stored
            .item_mut(first)
            .unwrap()
            .purchase(contributor("ana"), Utc::now())
            .unwrap();

        let list_id = stored.id;
        let mut mock_repo = MockBirthListRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));
        // The save path must carry the re-derived Completada status.
        mock_repo
            .expect_save()
            .withf(|list| list.status == BirthListStatus::Completed)
            .returning(|_| Ok(()));

        let use_case = PurchaseItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PurchaseItemParams {
                list_id,
                item_id: last,
                contributor: contributor("eva"),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().state, ItemState::Purchased);
    }

    #[tokio::test]
    async fn should_reject_double_purchase() {
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
        stored
            .item_mut(item_id)
            .unwrap()
            .purchase(contributor("ana"), Utc::now())
            .unwrap();
        let list_id = stored.id;

        let mut mock_repo = MockBirthListRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));

        let use_case = PurchaseItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PurchaseItemParams {
                list_id,
                item_id,
                contributor: contributor("eva"),
            })
            .await;

        assert!(matches!(result, Err(BirthListError::AlreadyInState)));
    }
}
