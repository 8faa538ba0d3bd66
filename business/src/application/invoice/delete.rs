use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::invoice::archive::InvoiceArchive;
use crate::domain::invoice::errors::InvoiceError;
use crate::domain::invoice::repository::InvoiceRepository;
use crate::domain::invoice::use_cases::delete::{DeleteInvoiceParams, DeleteInvoiceUseCase};
use crate::domain::logger::Logger;
use crate::domain::order::repository::OrderRepository;

pub struct DeleteInvoiceUseCaseImpl {
    pub invoice_repository: Arc<dyn InvoiceRepository>,
    pub order_repository: Arc<dyn OrderRepository>,
    pub archive: Arc<dyn InvoiceArchive>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteInvoiceUseCase for DeleteInvoiceUseCaseImpl {
    async fn execute(&self, params: DeleteInvoiceParams) -> Result<(), InvoiceError> {
        self.logger
            .info(&format!("Deleting invoice {}", params.id));

        let invoice = self
            .invoice_repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => InvoiceError::NotFound,
                other => InvoiceError::Repository(other),
            })?;

        // Unlink first so a re-request regenerates instead of pointing at a
        // record about to disappear.
        match self.order_repository.get_by_id(invoice.order_id).await {
            Ok(mut order) => {
                order.unlink_invoice();
                self.order_repository.save(&order).await?;
            }
            Err(RepositoryError::NotFound) => {}
            Err(other) => return Err(InvoiceError::Repository(other)),
        }

        if let Err(e) = self.archive.remove(&invoice.pdf_path).await {
            self.logger.warn(&format!(
                "Could not remove archived invoice file {}: {e}",
                invoice.pdf_path
            ));
        }

        self.invoice_repository.delete(invoice.id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{CartItem, CartItemKind};
    use crate::domain::invoice::model::Invoice;
    use crate::domain::order::model::Order;
    use crate::domain::order::value_objects::ShippingAddress;
    use crate::domain::shared::value_objects::{Page, PageRequest, UserId};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub InvoiceRepo {}

        #[async_trait]
        impl InvoiceRepository for InvoiceRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<Invoice, RepositoryError>;
            async fn find_by_order_id(&self, order_id: Uuid) -> Result<Option<Invoice>, RepositoryError>;
            async fn max_sequence(&self, year: i32) -> Result<Option<u32>, RepositoryError>;
            async fn save(&self, invoice: &Invoice) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

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
        pub Archive {}

        #[async_trait]
        impl InvoiceArchive for Archive {
            async fn store(&self, number: &str, bytes: &[u8]) -> Result<String, InvoiceError>;
            async fn load(&self, path: &str) -> Result<Vec<u8>, InvoiceError>;
            async fn remove(&self, path: &str) -> Result<(), InvoiceError>;
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

    fn linked_order(user: &str, invoice_id: Uuid) -> Order {
        let mut order = Order::from_cart(
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
        .unwrap();
        order.link_invoice(invoice_id);
        order
    }

    #[tokio::test]
    async fn should_unlink_order_remove_file_and_delete_record() {
        let invoice = Invoice::new(
            Uuid::new_v4(),
            "2026-000003".to_string(),
            "/var/invoices/2026-000003.pdf".to_string(),
        );
        let invoice_id = invoice.id;
        let order = linked_order("user-1", invoice_id);

        let mut invoice_repo = MockInvoiceRepo::new();
        let returned = invoice.clone();
        invoice_repo
            .expect_get_by_id()
            .returning(move |_| Ok(returned.clone()));
        invoice_repo
            .expect_delete()
            .withf(move |id| *id == invoice_id)
            .times(1)
            .returning(|_| Ok(()));

        let mut order_repo = MockOrderRepo::new();
        order_repo
            .expect_get_by_id()
            .returning(move |_| Ok(order.clone()));
        order_repo
            .expect_save()
            .withf(|order| order.invoice_id.is_none())
            .returning(|_| Ok(()));

        let mut archive = MockArchive::new();
        archive
            .expect_remove()
            .withf(|path| path == "/var/invoices/2026-000003.pdf")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteInvoiceUseCaseImpl {
            invoice_repository: Arc::new(invoice_repo),
            order_repository: Arc::new(order_repo),
            archive: Arc::new(archive),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteInvoiceParams { id: invoice_id }).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_map_missing_invoice_to_not_found() {
        let mut invoice_repo = MockInvoiceRepo::new();
        invoice_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteInvoiceUseCaseImpl {
            invoice_repository: Arc::new(invoice_repo),
            order_repository: Arc::new(MockOrderRepo::new()),
            archive: Arc::new(MockArchive::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteInvoiceParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result, Err(InvoiceError::NotFound)));
    }
}
