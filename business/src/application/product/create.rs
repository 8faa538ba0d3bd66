use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.props.name));

        let product = Product::new(params.props)?;
        self.repository.save(&product).await?;

        self.logger.info(&format!("Product created: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::NewProductProps;
    use crate::domain::product::value_objects::{ProductFilters, ProductStatus, Stock};
    use crate::domain::shared::value_objects::{Page, PageRequest};
    use mockall::mock;
    use uuid::Uuid;

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

    fn props() -> NewProductProps {
        NewProductProps {
            name: "Trona evolutiva".to_string(),
            reference: Some("TRO-010".to_string()),
            price: 89.0,
            price_excl_tax: 73.55,
            category: "alimentacion/tronas".to_string(),
            brand: None,
            images: vec![],
            stock: Stock::new(4, 2),
            status: ProductStatus::Active,
            featured: false,
        }
    }

    #[tokio::test]
    async fn should_create_and_persist_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(CreateProductParams { props: props() }).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().name, "Trona evolutiva");
    }

    #[tokio::test]
    async fn should_reject_invalid_product_without_persisting() {
        let mock_repo = MockProductRepo::new();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut invalid = props();
        invalid.name = "".to_string();
        let result = use_case.execute(CreateProductParams { props: invalid }).await;

        assert!(matches!(result, Err(ProductError::NameEmpty)));
    }
}
