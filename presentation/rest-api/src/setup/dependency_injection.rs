use std::sync::Arc;

use logger::TracingLogger;
use persistence::birth_list::repository::BirthListRepositoryPostgres;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::cart::storage::CartStoragePostgres;
use persistence::invoice::repository::InvoiceRepositoryPostgres;
use persistence::order::repository::OrderRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;

use renderer::archive::InvoiceArchiveFs;
use renderer::client::GotenbergClient;
use renderer::pdf_renderer::InvoiceRendererGotenberg;

use business::application::birth_list::add_item::AddItemUseCaseImpl;
use business::application::birth_list::cancel_reservation::CancelReservationUseCaseImpl;
use business::application::birth_list::create::CreateBirthListUseCaseImpl;
use business::application::birth_list::delete_item::DeleteItemUseCaseImpl;
use business::application::birth_list::get_all::GetOwnBirthListsUseCaseImpl;
use business::application::birth_list::get_by_id::GetBirthListByIdUseCaseImpl;
use business::application::birth_list::purchase_item::PurchaseItemUseCaseImpl;
use business::application::birth_list::reserve_item::ReserveItemUseCaseImpl;
use business::application::birth_list::update_items::UpdateItemsUseCaseImpl;
use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::load::LoadCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartQuantityUseCaseImpl;
use business::application::invoice::delete::DeleteInvoiceUseCaseImpl;
use business::application::invoice::get_pdf::GetInvoicePdfUseCaseImpl;
use business::application::order::checkout::CheckoutUseCaseImpl;
use business::application::order::get_all::GetAllOrdersUseCaseImpl;
use business::application::order::get_by_id::GetOrderByIdUseCaseImpl;
use business::application::order::update_status::UpdateOrderStatusUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::config::renderer_config::RendererConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub birth_list_api: crate::api::birth_list::routes::BirthListApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub order_api: crate::api::order::routes::OrderApi,
    pub invoice_api: crate::api::invoice::routes::InvoiceApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let birth_list_repository = Arc::new(BirthListRepositoryPostgres::new(pool.clone()));
        let cart_storage = Arc::new(CartStoragePostgres::new(pool.clone()));
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool.clone()));
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool.clone()));
        let invoice_repository = Arc::new(InvoiceRepositoryPostgres::new(pool));

        let renderer_config = RendererConfig::from_env();
        let gotenberg_client = GotenbergClient::new(renderer_config.base_url);
        let invoice_renderer = Arc::new(InvoiceRendererGotenberg::new(gotenberg_client));
        let invoice_archive = Arc::new(InvoiceArchiveFs::new(renderer_config.invoice_dir));

        // Product use cases
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_product_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_product_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Birth list use cases
        let create_birth_list_use_case = Arc::new(CreateBirthListUseCaseImpl {
            repository: birth_list_repository.clone(),
            logger: logger.clone(),
        });
        let get_own_birth_lists_use_case = Arc::new(GetOwnBirthListsUseCaseImpl {
            repository: birth_list_repository.clone(),
            logger: logger.clone(),
        });
        let get_birth_list_by_id_use_case = Arc::new(GetBirthListByIdUseCaseImpl {
            repository: birth_list_repository.clone(),
            logger: logger.clone(),
        });
        let add_list_item_use_case = Arc::new(AddItemUseCaseImpl {
            repository: birth_list_repository.clone(),
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_list_items_use_case = Arc::new(UpdateItemsUseCaseImpl {
            repository: birth_list_repository.clone(),
            logger: logger.clone(),
        });
        let delete_list_item_use_case = Arc::new(DeleteItemUseCaseImpl {
            repository: birth_list_repository.clone(),
            logger: logger.clone(),
        });
        let reserve_item_use_case = Arc::new(ReserveItemUseCaseImpl {
            repository: birth_list_repository.clone(),
            logger: logger.clone(),
        });
        let purchase_item_use_case = Arc::new(PurchaseItemUseCaseImpl {
            repository: birth_list_repository.clone(),
            logger: logger.clone(),
        });
        let cancel_reservation_use_case = Arc::new(CancelReservationUseCaseImpl {
            repository: birth_list_repository,
            logger: logger.clone(),
        });

        // Cart use cases
        let load_cart_use_case = Arc::new(LoadCartUseCaseImpl {
            storage: cart_storage.clone(),
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let add_cart_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            storage: cart_storage.clone(),
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let update_cart_quantity_use_case = Arc::new(UpdateCartQuantityUseCaseImpl {
            storage: cart_storage.clone(),
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let remove_cart_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            storage: cart_storage.clone(),
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });

        // Order use cases
        let checkout_use_case = Arc::new(CheckoutUseCaseImpl {
            order_repository: order_repository.clone(),
            cart_storage,
            cart_repository,
            logger: logger.clone(),
        });
        let get_order_by_id_use_case = Arc::new(GetOrderByIdUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_orders_use_case = Arc::new(GetAllOrdersUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let update_order_status_use_case = Arc::new(UpdateOrderStatusUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });

        // Invoice use cases
        let get_invoice_pdf_use_case = Arc::new(GetInvoicePdfUseCaseImpl {
            invoice_repository: invoice_repository.clone(),
            order_repository: order_repository.clone(),
            renderer: invoice_renderer,
            archive: invoice_archive.clone(),
            logger: logger.clone(),
        });
        let delete_invoice_use_case = Arc::new(DeleteInvoiceUseCaseImpl {
            invoice_repository,
            order_repository,
            archive: invoice_archive,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_product_use_case,
            get_all_products_use_case,
            get_product_by_id_use_case,
            update_product_use_case,
            delete_product_use_case,
        );

        let birth_list_api = crate::api::birth_list::routes::BirthListApi::new(
            create_birth_list_use_case,
            get_own_birth_lists_use_case,
            get_birth_list_by_id_use_case,
            add_list_item_use_case,
            update_list_items_use_case,
            delete_list_item_use_case,
            reserve_item_use_case,
            purchase_item_use_case,
            cancel_reservation_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            load_cart_use_case,
            add_cart_item_use_case,
            update_cart_quantity_use_case,
            remove_cart_item_use_case,
        );

        let order_api = crate::api::order::routes::OrderApi::new(
            checkout_use_case,
            get_order_by_id_use_case,
            get_all_orders_use_case,
            update_order_status_use_case,
        );

        let invoice_api = crate::api::invoice::routes::InvoiceApi::new(
            get_invoice_pdf_use_case,
            delete_invoice_use_case,
        );

        Ok(Self {
            health_api,
            product_api,
            birth_list_api,
            cart_api,
            order_api,
            invoice_api,
        })
    }
}
