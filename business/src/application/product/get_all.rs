use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use crate::domain::shared::value_objects::Page;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Page<Product>, ProductError> {
        self.logger.debug(&format!(
            "Listing products, page {} ({} per page)",
            params.page.page(),
            params.page.per_page()
        ));

        let page = self
            .repository
            .find_page(&params.filters, params.page)
            .await?;

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::value_objects::{ProductFilters, ProductStatus};
    use crate::domain::shared::value_objects::PageRequest;
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

    #[tokio::test]
    async fn should_pass_filters_through_to_repository() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_page()
            .withf(|filters, _| filters.status == Some(ProductStatus::Active))
            .returning(|_, page| Ok(Page::new(vec![], 0, page)));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllProductsParams {
                filters: ProductFilters {
                    status: Some(ProductStatus::Active),
                    ..Default::default()
                },
                page: PageRequest::default(),
            })
            .await;

        assert!(result.is_ok());
        let page = result.unwrap();
        assert_eq!(page.total, 0);
        assert_eq!(page.page, 1);
    }
}
