use std::sync::Arc;

use poem_openapi::{OpenApi, param::Header, param::Path, param::Query, payload::Json};
use uuid::Uuid;

use business::domain::order::use_cases::checkout::{CheckoutParams, CheckoutUseCase};
use business::domain::order::use_cases::get_all::{GetAllOrdersParams, GetAllOrdersUseCase};
use business::domain::order::use_cases::get_by_id::{GetOrderByIdParams, GetOrderByIdUseCase};
use business::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};
use business::domain::shared::value_objects::PageRequest;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::{
    CheckoutRequest, OrderPageResponse, OrderResponse, UpdateOrderStatusRequest,
};
use crate::api::security::ApiBearer;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    checkout_use_case: Arc<dyn CheckoutUseCase>,
    get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
    get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
    update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
}

impl OrderApi {
    pub fn new(
        checkout_use_case: Arc<dyn CheckoutUseCase>,
        get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
        get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
        update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
    ) -> Self {
        Self {
            checkout_use_case,
            get_by_id_use_case,
            get_all_use_case,
            update_status_use_case,
        }
    }
}

fn admin_required() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "Forbidden".to_string(),
        message: "auth.admin_required".to_string(),
    })
}

fn invalid_id() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: "order.invalid_id".to_string(),
    })
}

/// Order API
///
/// Checkout converts the caller's cart into an order. Customers see their
/// own orders; the back-office listing and status updates are admin only.
#[OpenApi]
impl OrderApi {
    /// Checkout the cart
    ///
    /// Creates an order from the device cart identified by X-Cart-Key and
    /// clears the cart afterwards.
    #[oai(path = "/orders", method = "post", tag = "ApiTags::Orders")]
    async fn checkout(
        &self,
        auth: ApiBearer,
        #[oai(name = "X-Cart-Key")] cart_key: Header<String>,
        body: Json<CheckoutRequest>,
    ) -> CheckoutResponse {
        let params = CheckoutParams {
            cart_key: cart_key.0,
            user_id: auth.0.id,
            address: body.0.address.into(),
        };

        match self.checkout_use_case.execute(params).await {
            Ok(order) => CheckoutResponse::Created(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CheckoutResponse::BadRequest(json),
                    _ => CheckoutResponse::InternalError(json),
                }
            }
        }
    }

    /// Get an order by ID
    ///
    /// Customers may only read their own orders; admins may read any.
    #[oai(path = "/orders/:id", method = "get", tag = "ApiTags::Orders")]
    async fn get_order_by_id(&self, auth: ApiBearer, id: Path<String>) -> GetOrderByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return GetOrderByIdResponse::BadRequest(invalid_id()),
        };

        match self
            .get_by_id_use_case
            .execute(GetOrderByIdParams {
                id: uuid,
                actor: auth.0.actor(),
            })
            .await
        {
            Ok(order) => GetOrderByIdResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => GetOrderByIdResponse::Forbidden(json),
                    404 => GetOrderByIdResponse::NotFound(json),
                    _ => GetOrderByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// List all orders
    ///
    /// Back-office listing, newest first. Admin only.
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_all_orders(
        &self,
        auth: ApiBearer,
        page: Query<Option<u32>>,
        per_page: Query<Option<u32>>,
    ) -> GetAllOrdersResponse {
        if !auth.0.role.is_admin() {
            return GetAllOrdersResponse::Forbidden(admin_required());
        }

        let params = GetAllOrdersParams {
            page: PageRequest::new(page.0, per_page.0),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(page) => GetAllOrdersResponse::Ok(Json(OrderPageResponse {
                items: page.items.into_iter().map(|o| o.into()).collect(),
                total: page.total,
                page: page.page,
                per_page: page.per_page,
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllOrdersResponse::InternalError(json)
            }
        }
    }

    /// Update order status
    ///
    /// Status is the only mutable field of a created order. Admin only.
    #[oai(path = "/orders/:id/status", method = "put", tag = "ApiTags::Orders")]
    async fn update_order_status(
        &self,
        auth: ApiBearer,
        id: Path<String>,
        body: Json<UpdateOrderStatusRequest>,
    ) -> UpdateOrderStatusResponse {
        if !auth.0.role.is_admin() {
            return UpdateOrderStatusResponse::Forbidden(admin_required());
        }

        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return UpdateOrderStatusResponse::BadRequest(invalid_id()),
        };

        let params = UpdateOrderStatusParams {
            id: uuid,
            status: body.0.status.into(),
        };

        match self.update_status_use_case.execute(params).await {
            Ok(order) => UpdateOrderStatusResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateOrderStatusResponse::NotFound(json),
                    _ => UpdateOrderStatusResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckoutResponse {
    #[oai(status = 201)]
    Created(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrderByIdResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<OrderPageResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateOrderStatusResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
