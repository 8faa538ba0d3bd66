use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_all::{GetAllOrdersParams, GetAllOrdersUseCase};
use crate::domain::shared::value_objects::Page;

pub struct GetAllOrdersUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllOrdersUseCase for GetAllOrdersUseCaseImpl {
    async fn execute(&self, params: GetAllOrdersParams) -> Result<Page<Order>, OrderError> {
        self.logger
            .debug(&format!("Listing orders, page {}", params.page.page()));

        let page = self.repository.find_page(params.page).await?;
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::PageRequest;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub OrderRepo {}

        #[async_trait]
        impl OrderRepository for OrderRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
            async fn find_page(&self, page: PageRequest) -> Result<Page<Order>, RepositoryError>;
            async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
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
    async fn should_return_requested_page() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo.expect_find_page().returning(|page| {
            Ok(Page {
                items: vec![],
                total: 0,
                page: page.page(),
                per_page: page.per_page(),
            })
        });

        let use_case = GetAllOrdersUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllOrdersParams {
                page: PageRequest::new(Some(2), Some(10)),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().page, 2);
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_find_page()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetAllOrdersUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllOrdersParams {
                page: PageRequest::new(None, None),
            })
            .await;

        assert!(matches!(result, Err(OrderError::Repository(_))));
    }
}
