use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::birth_list::errors::BirthListError;
use crate::domain::birth_list::model::BirthList;
use crate::domain::birth_list::repository::BirthListRepository;
use crate::domain::birth_list::use_cases::add_item::{AddItemParams, AddItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddItemUseCaseImpl {
    pub repository: Arc<dyn BirthListRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddItemUseCase for AddItemUseCaseImpl {
    async fn execute(&self, params: AddItemParams) -> Result<BirthList, BirthListError> {
        self.logger.info(&format!(
            "Adding product {} to birth list {}",
            params.product_id, params.list_id
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

        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => BirthListError::ProductNotFound,
                other => BirthListError::Repository(other),
            })?;

        list.add_item(&product, params.quantity, params.priority)?;
        self.repository.save(&list).await?;

        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::birth_list::model::NewBirthListProps;
    use crate::domain::birth_list::value_objects::BirthListStatus;
    use crate::domain::product::model::{NewProductProps, Product};
    use crate::domain::product::value_objects::{ProductFilters, ProductStatus, Stock};
    use crate::domain::shared::value_objects::{Actor, Page, PageRequest, Role, UserId};
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
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn find_page(&self, filters: &ProductFilters, page: PageRequest) -> Result<Page<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
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

    fn list() -> BirthList {
        BirthList::new(NewBirthListProps {
            owner_id: UserId::new("owner-1"),
            title: "Lista de Mateo".to_string(),
            description: None,
            baby_name: None,
            due_date: None,
            is_public: true,
            theme: None,
        })
        .unwrap()
    }

    fn product() -> Product {
        Product::new(NewProductProps {
            name: "Vigilabebés".to_string(),
            reference: Some("VIG-3".to_string()),
            price: 59.0,
            price_excl_tax: 48.76,
            category: "seguridad/vigilabebes".to_string(),
            brand: None,
            images: vec![],
            stock: Stock::new(3, 1),
            status: ProductStatus::Active,
            featured: false,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_append_snapshotted_pending_item() {
        let stored = list();
        let list_id = stored.id;
        let stored_product = product();
        let product_id = stored_product.id;

        let mut mock_repo = MockBirthListRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));
        mock_repo.expect_save().returning(|_| Ok(()));

        let mut mock_products = MockProductRepo::new();
        mock_products
            .expect_get_by_id()
            .returning(move |_| Ok(stored_product.clone()));

        let use_case = AddItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(mock_products),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddItemParams {
                list_id,
                actor: Actor::new("owner-1", Role::Customer),
                product_id,
                quantity: 1,
                priority: 2,
            })
            .await;

        assert!(result.is_ok());
        let updated = result.unwrap();
        assert_eq!(updated.items.len(), 1);
        assert_eq!(updated.items[0].snapshot.name(), "Vigilabebés");
        assert_eq!(updated.status, BirthListStatus::Active);
    }

    #[tokio::test]
    async fn should_reject_non_owner() {
        let stored = list();
        let list_id = stored.id;
        let mut mock_repo = MockBirthListRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));

        let use_case = AddItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddItemParams {
                list_id,
                actor: Actor::new("stranger", Role::Customer),
                product_id: Uuid::new_v4(),
                quantity: 1,
                priority: 0,
            })
            .await;

        assert!(matches!(result, Err(BirthListError::Forbidden)));
    }

    #[tokio::test]
    async fn should_report_missing_product() {
        let stored = list();
        let list_id = stored.id;
        let mut mock_repo = MockBirthListRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));

        let mut mock_products = MockProductRepo::new();
        mock_products
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = AddItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(mock_products),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddItemParams {
                list_id,
                actor: Actor::new("owner-1", Role::Customer),
                product_id: Uuid::new_v4(),
                quantity: 1,
                priority: 0,
            })
            .await;

        assert!(matches!(result, Err(BirthListError::ProductNotFound)));
    }
}
