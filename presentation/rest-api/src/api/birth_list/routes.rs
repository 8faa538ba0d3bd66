use std::sync::Arc;

use poem_openapi::{OpenApi, param::Header, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::birth_list::model::NewBirthListProps;
use business::domain::birth_list::use_cases::add_item::{AddItemParams, AddItemUseCase};
use business::domain::birth_list::use_cases::cancel_reservation::{
    CancelReservationParams, CancelReservationUseCase,
};
use business::domain::birth_list::use_cases::create::{
    CreateBirthListParams, CreateBirthListUseCase,
};
use business::domain::birth_list::use_cases::delete_item::{DeleteItemParams, DeleteItemUseCase};
use business::domain::birth_list::use_cases::get_all::{
    GetOwnBirthListsParams, GetOwnBirthListsUseCase,
};
use business::domain::birth_list::use_cases::get_by_id::{
    GetBirthListByIdParams, GetBirthListByIdUseCase,
};
use business::domain::birth_list::use_cases::purchase_item::{
    PurchaseItemParams, PurchaseItemUseCase,
};
use business::domain::birth_list::use_cases::reserve_item::{
    ReserveItemParams, ReserveItemUseCase,
};
use business::domain::birth_list::use_cases::update_items::{
    ItemPatch, UpdateItemsParams, UpdateItemsUseCase,
};

use crate::api::birth_list::dto::{
    AddItemRequest, BirthListItemResponse, BirthListResponse, ContributorRequest,
    CreateBirthListRequest, UpdateItemsRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::{ApiBearer, optional_user};
use crate::api::tags::ApiTags;

pub struct BirthListApi {
    create_use_case: Arc<dyn CreateBirthListUseCase>,
    get_all_use_case: Arc<dyn GetOwnBirthListsUseCase>,
    get_by_id_use_case: Arc<dyn GetBirthListByIdUseCase>,
    add_item_use_case: Arc<dyn AddItemUseCase>,
    update_items_use_case: Arc<dyn UpdateItemsUseCase>,
    delete_item_use_case: Arc<dyn DeleteItemUseCase>,
    reserve_item_use_case: Arc<dyn ReserveItemUseCase>,
    purchase_item_use_case: Arc<dyn PurchaseItemUseCase>,
    cancel_reservation_use_case: Arc<dyn CancelReservationUseCase>,
}

impl BirthListApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create_use_case: Arc<dyn CreateBirthListUseCase>,
        get_all_use_case: Arc<dyn GetOwnBirthListsUseCase>,
        get_by_id_use_case: Arc<dyn GetBirthListByIdUseCase>,
        add_item_use_case: Arc<dyn AddItemUseCase>,
        update_items_use_case: Arc<dyn UpdateItemsUseCase>,
        delete_item_use_case: Arc<dyn DeleteItemUseCase>,
        reserve_item_use_case: Arc<dyn ReserveItemUseCase>,
        purchase_item_use_case: Arc<dyn PurchaseItemUseCase>,
        cancel_reservation_use_case: Arc<dyn CancelReservationUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            add_item_use_case,
            update_items_use_case,
            delete_item_use_case,
            reserve_item_use_case,
            purchase_item_use_case,
            cancel_reservation_use_case,
        }
    }
}

fn invalid_id(message: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: message.to_string(),
    })
}

/// Birth list (gift registry) API
///
/// Owners manage their lists with a bearer token. The gift flows
/// (reserve, purchase, cancel) are open to anonymous guests who identify
/// themselves in the request body.
#[OpenApi]
impl BirthListApi {
    /// Create a birth list
    #[oai(path = "/birth-lists", method = "post", tag = "ApiTags::BirthLists")]
    async fn create_birth_list(
        &self,
        auth: ApiBearer,
        body: Json<CreateBirthListRequest>,
    ) -> CreateBirthListResponse {
        let params = CreateBirthListParams {
            props: NewBirthListProps {
                owner_id: auth.0.id,
                title: body.0.title,
                description: body.0.description,
                baby_name: body.0.baby_name,
                due_date: body.0.due_date,
                is_public: body.0.is_public,
                theme: body.0.theme,
            },
        };

        match self.create_use_case.execute(params).await {
            Ok(list) => CreateBirthListResponse::Created(Json(list.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateBirthListResponse::BadRequest(json),
                    _ => CreateBirthListResponse::InternalError(json),
                }
            }
        }
    }

    /// List the caller's birth lists
    #[oai(
        path = "/birth-lists/mine",
        method = "get",
        tag = "ApiTags::BirthLists"
    )]
    async fn get_own_birth_lists(&self, auth: ApiBearer) -> GetOwnBirthListsResponse {
        match self
            .get_all_use_case
            .execute(GetOwnBirthListsParams {
                owner_id: auth.0.id,
            })
            .await
        {
            Ok(lists) => GetOwnBirthListsResponse::Ok(Json(
                lists.into_iter().map(|l| l.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetOwnBirthListsResponse::InternalError(json)
            }
        }
    }

    /// Get a birth list by ID
    ///
    /// Public lists are visible to anyone; private lists only to their owner
    /// or an admin. A token, when present, identifies the viewer.
    #[oai(path = "/birth-lists/:id", method = "get", tag = "ApiTags::BirthLists")]
    async fn get_birth_list_by_id(
        &self,
        id: Path<String>,
        authorization: Header<Option<String>>,
    ) -> GetBirthListByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetBirthListByIdResponse::BadRequest(invalid_id("birth_list.invalid_id"));
            }
        };

        let viewer = optional_user(authorization.0.as_ref()).map(|u| u.actor());

        match self
            .get_by_id_use_case
            .execute(GetBirthListByIdParams { id: uuid, viewer })
            .await
        {
            Ok(list) => GetBirthListByIdResponse::Ok(Json(list.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => GetBirthListByIdResponse::Forbidden(json),
                    404 => GetBirthListByIdResponse::NotFound(json),
                    _ => GetBirthListByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Add an item to a birth list
    ///
    /// Snapshots the product's display fields at add time. Adding to a
    /// completed list reopens it.
    #[oai(
        path = "/birth-lists/:id/items",
        method = "post",
        tag = "ApiTags::BirthLists"
    )]
    async fn add_item(
        &self,
        auth: ApiBearer,
        id: Path<String>,
        body: Json<AddItemRequest>,
    ) -> AddItemResponse {
        let list_id = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return AddItemResponse::BadRequest(invalid_id("birth_list.invalid_id")),
        };
        let product_id = match Uuid::parse_str(&body.0.product_id) {
            Ok(uuid) => uuid,
            Err(_) => {
                return AddItemResponse::BadRequest(invalid_id("birth_list.invalid_product_id"));
            }
        };

        let params = AddItemParams {
            list_id,
            actor: auth.0.actor(),
            product_id,
            quantity: body.0.quantity,
            priority: body.0.priority,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(list) => AddItemResponse::Ok(Json(list.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddItemResponse::BadRequest(json),
                    403 => AddItemResponse::Forbidden(json),
                    404 => AddItemResponse::NotFound(json),
                    _ => AddItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Batch-edit quantities and priorities
    ///
    /// Item state never changes through this path; it only moves through the
    /// reserve, purchase and cancel transitions.
    #[oai(
        path = "/birth-lists/:id/items",
        method = "put",
        tag = "ApiTags::BirthLists"
    )]
    async fn update_items(
        &self,
        auth: ApiBearer,
        id: Path<String>,
        body: Json<UpdateItemsRequest>,
    ) -> UpdateItemsResponse {
        let list_id = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return UpdateItemsResponse::BadRequest(invalid_id("birth_list.invalid_id")),
        };

        let mut patches = Vec::with_capacity(body.0.items.len());
        for patch in body.0.items {
            let item_id = match Uuid::parse_str(&patch.item_id) {
                Ok(uuid) => uuid,
                Err(_) => {
                    return UpdateItemsResponse::BadRequest(invalid_id(
                        "birth_list.invalid_item_id",
                    ));
                }
            };
            patches.push(ItemPatch {
                item_id,
                quantity: patch.quantity,
                priority: patch.priority,
            });
        }

        let params = UpdateItemsParams {
            list_id,
            actor: auth.0.actor(),
            patches,
        };

        match self.update_items_use_case.execute(params).await {
            Ok(list) => UpdateItemsResponse::Ok(Json(list.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateItemsResponse::BadRequest(json),
                    403 => UpdateItemsResponse::Forbidden(json),
                    404 => UpdateItemsResponse::NotFound(json),
                    _ => UpdateItemsResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove an item from a birth list
    #[oai(
        path = "/birth-lists/:id/items/:item_id",
        method = "delete",
        tag = "ApiTags::BirthLists"
    )]
    async fn delete_item(
        &self,
        auth: ApiBearer,
        id: Path<String>,
        item_id: Path<String>,
    ) -> DeleteItemResponse {
        let list_id = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return DeleteItemResponse::BadRequest(invalid_id("birth_list.invalid_id")),
        };
        let item_uuid = match Uuid::parse_str(&item_id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return DeleteItemResponse::BadRequest(invalid_id("birth_list.invalid_item_id"));
            }
        };

        let params = DeleteItemParams {
            list_id,
            actor: auth.0.actor(),
            item_id: item_uuid,
        };

        match self.delete_item_use_case.execute(params).await {
            Ok(list) => DeleteItemResponse::Ok(Json(list.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DeleteItemResponse::Forbidden(json),
                    404 => DeleteItemResponse::NotFound(json),
                    _ => DeleteItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Reserve an item for a guest
    ///
    /// Open to anonymous guests; identity travels in the request body.
    #[oai(
        path = "/birth-lists/:id/items/:item_id/reserve",
        method = "post",
        tag = "ApiTags::BirthLists"
    )]
    async fn reserve_item(
        &self,
        id: Path<String>,
        item_id: Path<String>,
        body: Json<ContributorRequest>,
    ) -> ItemTransitionResponse {
        let (list_id, item_uuid) = match parse_item_path(&id.0, &item_id.0) {
            Ok(ids) => ids,
            Err(json) => return ItemTransitionResponse::BadRequest(json),
        };

        let params = ReserveItemParams {
            list_id,
            item_id: item_uuid,
            contributor: body.0.into(),
        };

        match self.reserve_item_use_case.execute(params).await {
            Ok(item) => ItemTransitionResponse::Ok(Json((&item).into())),
            Err(err) => dispatch_transition_error(err),
        }
    }

    /// Mark an item as purchased
    ///
    /// Allowed from pending or reserved; the buyer's identity overwrites any
    /// stored reservation contact.
    #[oai(
        path = "/birth-lists/:id/items/:item_id/purchase",
        method = "post",
        tag = "ApiTags::BirthLists"
    )]
    async fn purchase_item(
        &self,
        id: Path<String>,
        item_id: Path<String>,
        body: Json<ContributorRequest>,
    ) -> ItemTransitionResponse {
        let (list_id, item_uuid) = match parse_item_path(&id.0, &item_id.0) {
            Ok(ids) => ids,
            Err(json) => return ItemTransitionResponse::BadRequest(json),
        };

        let params = PurchaseItemParams {
            list_id,
            item_id: item_uuid,
            contributor: body.0.into(),
        };

        match self.purchase_item_use_case.execute(params).await {
            Ok(item) => ItemTransitionResponse::Ok(Json((&item).into())),
            Err(err) => dispatch_transition_error(err),
        }
    }

    /// Cancel a reservation
    ///
    /// Returns a reserved item to pending. Contributor contact details are
    /// kept for display.
    #[oai(
        path = "/birth-lists/:id/items/:item_id/cancel",
        method = "post",
        tag = "ApiTags::BirthLists"
    )]
    async fn cancel_reservation(
        &self,
        id: Path<String>,
        item_id: Path<String>,
    ) -> ItemTransitionResponse {
        let (list_id, item_uuid) = match parse_item_path(&id.0, &item_id.0) {
            Ok(ids) => ids,
            Err(json) => return ItemTransitionResponse::BadRequest(json),
        };

        let params = CancelReservationParams {
            list_id,
            item_id: item_uuid,
        };

        match self.cancel_reservation_use_case.execute(params).await {
            Ok(item) => ItemTransitionResponse::Ok(Json((&item).into())),
            Err(err) => dispatch_transition_error(err),
        }
    }
}

fn parse_item_path(id: &str, item_id: &str) -> Result<(Uuid, Uuid), Json<ErrorResponse>> {
    let list_id = Uuid::parse_str(id).map_err(|_| invalid_id("birth_list.invalid_id"))?;
    let item_uuid =
        Uuid::parse_str(item_id).map_err(|_| invalid_id("birth_list.invalid_item_id"))?;
    Ok((list_id, item_uuid))
}

fn dispatch_transition_error(
    err: business::domain::birth_list::errors::BirthListError,
) -> ItemTransitionResponse {
    let (status, json) = err.into_error_response();
    match status.as_u16() {
        400 => ItemTransitionResponse::BadRequest(json),
        404 => ItemTransitionResponse::NotFound(json),
        409 => ItemTransitionResponse::Conflict(json),
        _ => ItemTransitionResponse::InternalError(json),
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateBirthListResponse {
    #[oai(status = 201)]
    Created(Json<BirthListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOwnBirthListsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<BirthListResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetBirthListByIdResponse {
    #[oai(status = 200)]
    Ok(Json<BirthListResponse>),
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
pub enum AddItemResponse {
    #[oai(status = 200)]
    Ok(Json<BirthListResponse>),
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
pub enum UpdateItemsResponse {
    #[oai(status = 200)]
    Ok(Json<BirthListResponse>),
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
pub enum DeleteItemResponse {
    #[oai(status = 200)]
    Ok(Json<BirthListResponse>),
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
pub enum ItemTransitionResponse {
    #[oai(status = 200)]
    Ok(Json<BirthListItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
