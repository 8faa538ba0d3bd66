use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};
use uuid::Uuid;

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::value_objects::{ProductFilters, ProductStatus};
use business::domain::shared::value_objects::PageRequest;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ProductPageResponse, ProductRequest, ProductResponse};
use crate::api::security::ApiBearer;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
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
        message: "product.invalid_id".to_string(),
    })
}

/// Product catalog API
///
/// Reads are public; writes require an admin bearer token.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// Admin only.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        auth: ApiBearer,
        body: Json<ProductRequest>,
    ) -> CreateProductResponse {
        if !auth.0.role.is_admin() {
            return CreateProductResponse::Forbidden(admin_required());
        }

        let params = CreateProductParams {
            props: body.0.into(),
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List catalog products
    ///
    /// Filters combine with AND semantics. The category filter matches the
    /// category path by prefix, so "cochecitos" also returns
    /// "cochecitos/sillas-de-paseo".
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(
        &self,
        category: Query<Option<String>>,
        brand: Query<Option<String>>,
        status: Query<Option<String>>,
        featured: Query<Option<bool>>,
        search: Query<Option<String>>,
        page: Query<Option<u32>>,
        per_page: Query<Option<u32>>,
    ) -> GetAllProductsResponse {
        let status_filter = match status.0.as_deref() {
            None => None,
            Some(raw) => match raw.parse::<ProductStatus>() {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    return GetAllProductsResponse::BadRequest(Json(ErrorResponse {
                        name: "ValidationError".to_string(),
                        message: "product.invalid_status".to_string(),
                    }));
                }
            },
        };

        let params = GetAllProductsParams {
            filters: ProductFilters {
                category: category.0,
                brand: brand.0,
                status: status_filter,
                featured: featured.0,
                search: search.0,
            },
            page: PageRequest::new(page.0, per_page.0),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(page) => GetAllProductsResponse::Ok(Json(ProductPageResponse {
                items: page.items.into_iter().map(|p| p.into()).collect(),
                total: page.total,
                page: page.page,
                per_page: page.per_page,
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return GetProductByIdResponse::BadRequest(invalid_id()),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Full-field update. Admin only.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        auth: ApiBearer,
        id: Path<String>,
        body: Json<ProductRequest>,
    ) -> UpdateProductResponse {
        if !auth.0.role.is_admin() {
            return UpdateProductResponse::Forbidden(admin_required());
        }

        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return UpdateProductResponse::BadRequest(invalid_id()),
        };

        let params = UpdateProductParams {
            id: uuid,
            props: body.0.into(),
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Permanently removes a product from the catalog. Admin only.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, auth: ApiBearer, id: Path<String>) -> DeleteProductResponse {
        if !auth.0.role.is_admin() {
            return DeleteProductResponse::Forbidden(admin_required());
        }

        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return DeleteProductResponse::BadRequest(invalid_id()),
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: uuid })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
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
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
