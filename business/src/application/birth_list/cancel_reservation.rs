use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::birth_list::errors::BirthListError;
use crate::domain::birth_list::model::BirthListItem;
use crate::domain::birth_list::repository::BirthListRepository;
use crate::domain::birth_list::use_cases::cancel_reservation::{
    CancelReservationParams, CancelReservationUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct CancelReservationUseCaseImpl {
    pub repository: Arc<dyn BirthListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CancelReservationUseCase for CancelReservationUseCaseImpl {
    async fn execute(
        &self,
        params: CancelReservationParams,
    ) -> Result<BirthListItem, BirthListError> {
        self.logger.info(&format!(
            "Cancelling reservation of item {} in birth list {}",
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
        item.cancel()?;
        let released = item.clone();

        list.refresh_status();
        self.repository.save(&list).await?;

        Ok(released)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::birth_list::model::{BirthList, Contributor, NewBirthListProps};
    use crate::domain::birth_list::value_objects::ItemState;
    use crate::domain::product::model::{NewProductProps, Product};
    use crate::domain::product::value_objects::{ProductStatus, Stock};
    use crate::domain::shared::value_objects::UserId;
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

    fn list_with_item(state: ItemState) -> (BirthList, Uuid) {
        let mut list = BirthList::new(NewBirthListProps {
            owner_id: UserId::new("owner-1"),
            title: "Lista".to_string(),
            description: None,
            baby_name: None,
            due_date: None,
            is_public: true,
            theme: None,
        })
        .unwrap();
        let product = Product::new(NewProductProps {
            name: "Chupete".to_string(),
            reference: None,
            price: 6.0,
            price_excl_tax: 4.96,
            category: "varios".to_string(),
            brand: None,
            images: vec![],
            stock: Stock::new(9, 2),
            status: ProductStatus::Active,
            featured: false,
        })
        .unwrap();
        let item_id = list.add_item(&product, 1, 0).unwrap();
        let contributor =
            Contributor::new("Ana".to_string(), "ana@x.com".to_string(), None, None);
        match state {
            ItemState::Pending => {}
            ItemState::Reserved => list
                .item_mut(item_id)
                .unwrap()
                .reserve(contributor, Utc::now())
                .unwrap(),
            ItemState::Purchased => list
                .item_mut(item_id)
                .unwrap()
                .purchase(contributor, Utc::now())
                .unwrap(),
        }
        (list, item_id)
    }

    #[tokio::test]
    async fn should_release_reserved_item_keeping_contributor() {
        let (stored, item_id) = list_with_item(ItemState::Reserved);
        let list_id = stored.id;
        let mut mock_repo = MockBirthListRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = CancelReservationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CancelReservationParams { list_id, item_id })
            .await;

        assert!(result.is_ok());
        let item = result.unwrap();
        assert_eq!(item.state, ItemState::Pending);
        assert!(item.contributor.is_some());
    }

    #[tokio::test]
    async fn should_reject_cancel_of_pending_item() {
        let (stored, item_id) = list_with_item(ItemState::Pending);
        let list_id = stored.id;
        let mut mock_repo = MockBirthListRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));

        let use_case = CancelReservationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CancelReservationParams { list_id, item_id })
            .await;

        assert!(matches!(result, Err(BirthListError::AlreadyInState)));
    }

    #[tokio::test]
    async fn should_reject_cancel_of_purchased_item() {
        let (stored, item_id) = list_with_item(ItemState::Purchased);
        let list_id = stored.id;
        let mut mock_repo = MockBirthListRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));

        let use_case = CancelReservationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CancelReservationParams { list_id, item_id })
            .await;

        assert!(matches!(
            result,
            Err(BirthListError::TransitionNotAllowed)
        ));
    }
}
