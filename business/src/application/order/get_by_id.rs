use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_by_id::{GetOrderByIdParams, GetOrderByIdUseCase};

pub struct GetOrderByIdUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrderByIdUseCase for GetOrderByIdUseCaseImpl {
    async fn execute(&self, params: GetOrderByIdParams) -> Result<Order, OrderError> {
        self.logger.debug(&format!("Fetching order {}", params.id));

        let order = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })?;

        if !params.actor.can_manage(&order.user_id) {
            return Err(OrderError::Forbidden);
        }

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{CartItem, CartItemKind};
    use crate::domain::order::value_objects::ShippingAddress;
    use crate::domain::shared::value_objects::{Actor, Page, PageRequest, Role, UserId};
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

    fn order_for(user: &str) -> Order {
        Order::from_cart(
            UserId::new(user),
            &[CartItem {
                id: "p1".to_string(),
                name: "Producto".to_string(),
                price: 10.0,
                quantity: 1,
                image: None,
                kind: CartItemKind::Regular,
                list_info: None,
            }],
            ShippingAddress {
                full_name: "Ana García".to_string(),
                street: "Calle Mayor 1".to_string(),
                city: "Madrid".to_string(),
                postal_code: "28001".to_string(),
                country: "España".to_string(),
                phone: None,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn should_return_order_to_its_owner() {
        let stored = order_for("user-1");
        let id = stored.id;
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));

        let use_case = GetOrderByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetOrderByIdParams {
                id,
                actor: Actor::new("user-1", Role::Customer),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_allow_admin_to_read_any_order() {
        let stored = order_for("user-1");
        let id = stored.id;
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));

        let use_case = GetOrderByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetOrderByIdParams {
                id,
                actor: Actor::new("back-office", Role::Admin),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_hide_order_from_other_customers() {
        let stored = order_for("user-1");
        let id = stored.id;
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));

        let use_case = GetOrderByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetOrderByIdParams {
                id,
                actor: Actor::new("user-2", Role::Customer),
            })
            .await;

        assert!(matches!(result, Err(OrderError::Forbidden)));
    }

    #[tokio::test]
    async fn should_map_missing_order_to_not_found() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetOrderByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetOrderByIdParams {
                id: Uuid::new_v4(),
                actor: Actor::new("user-1", Role::Customer),
            })
            .await;

        assert!(matches!(result, Err(OrderError::NotFound)));
    }
}
