use std::sync::Arc;

use poem_openapi::{OpenApi, param::Header, param::Path, payload::Json};

use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::load::{LoadCartParams, LoadCartUseCase};
use business::domain::cart::use_cases::remove_item::{
    RemoveCartItemParams, RemoveCartItemUseCase,
};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use business::domain::shared::value_objects::UserId;

use crate::api::cart::dto::{AddCartItemRequest, CartResponse, UpdateCartQuantityRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::optional_user;
use crate::api::tags::ApiTags;

pub struct CartApi {
    load_use_case: Arc<dyn LoadCartUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
}

impl CartApi {
    pub fn new(
        load_use_case: Arc<dyn LoadCartUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    ) -> Self {
        Self {
            load_use_case,
            add_item_use_case,
            update_quantity_use_case,
            remove_item_use_case,
        }
    }
}

fn user_of(authorization: Option<&String>) -> Option<UserId> {
    optional_user(authorization).map(|u| u.id)
}

/// Shopping cart API
///
/// The cart is keyed by the X-Cart-Key device header. A bearer token, when
/// present, additionally mirrors the cart to the caller's account so it
/// follows them across devices.
#[OpenApi]
impl CartApi {
    /// Load the cart
    ///
    /// Returns the device cart, or the account cart when a signed-in caller
    /// has a non-empty one (the account copy replaces the device copy).
    /// Stale or malformed records come back as an empty cart.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn load_cart(
        &self,
        #[oai(name = "X-Cart-Key")] cart_key: Header<String>,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
    ) -> CartActionResponse {
        let params = LoadCartParams {
            key: cart_key.0,
            user: user_of(authorization.0.as_ref()),
        };

        match self.load_use_case.execute(params).await {
            Ok(record) => CartActionResponse::Ok(Json(record.into())),
            Err(err) => dispatch_cart_error(err),
        }
    }

    /// Add an item to the cart
    ///
    /// Adding a product already in the cart grows its quantity. Gift lines
    /// are single-instance with quantity pinned to one.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(
        &self,
        #[oai(name = "X-Cart-Key")] cart_key: Header<String>,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
        body: Json<AddCartItemRequest>,
    ) -> CartActionResponse {
        let (item, quantity) = match body.0.into_domain() {
            Ok(parsed) => parsed,
            Err(message) => {
                return CartActionResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message,
                }));
            }
        };

        let params = AddCartItemParams {
            key: cart_key.0,
            user: user_of(authorization.0.as_ref()),
            item,
            quantity,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(record) => CartActionResponse::Ok(Json(record.into())),
            Err(err) => dispatch_cart_error(err),
        }
    }

    /// Change the quantity of a cart line
    ///
    /// Gift lines cannot be resized.
    #[oai(path = "/cart/items/:id", method = "put", tag = "ApiTags::Cart")]
    async fn update_quantity(
        &self,
        #[oai(name = "X-Cart-Key")] cart_key: Header<String>,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
        id: Path<String>,
        body: Json<UpdateCartQuantityRequest>,
    ) -> CartActionResponse {
        let params = UpdateCartQuantityParams {
            key: cart_key.0,
            user: user_of(authorization.0.as_ref()),
            item_id: id.0,
            quantity: body.0.quantity,
        };

        match self.update_quantity_use_case.execute(params).await {
            Ok(record) => CartActionResponse::Ok(Json(record.into())),
            Err(err) => dispatch_cart_error(err),
        }
    }

    /// Remove a cart line
    ///
    /// Gift lines cannot be removed; cancel the reservation instead.
    #[oai(path = "/cart/items/:id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(
        &self,
        #[oai(name = "X-Cart-Key")] cart_key: Header<String>,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
        id: Path<String>,
    ) -> CartActionResponse {
        let params = RemoveCartItemParams {
            key: cart_key.0,
            user: user_of(authorization.0.as_ref()),
            item_id: id.0,
        };

        match self.remove_item_use_case.execute(params).await {
            Ok(record) => CartActionResponse::Ok(Json(record.into())),
            Err(err) => dispatch_cart_error(err),
        }
    }
}

fn dispatch_cart_error(err: business::domain::cart::errors::CartError) -> CartActionResponse {
    let (status, json) = err.into_error_response();
    match status.as_u16() {
        400 => CartActionResponse::BadRequest(json),
        404 => CartActionResponse::NotFound(json),
        409 => CartActionResponse::Conflict(json),
        _ => CartActionResponse::InternalError(json),
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartActionResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
