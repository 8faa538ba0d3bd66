use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            OrderError::CartEmpty => {
                (StatusCode::BAD_REQUEST, "ValidationError", "order.cart_empty")
            }
            OrderError::AddressIncomplete => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.address_incomplete",
            ),
            OrderError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "order.not_found"),
            OrderError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden", "order.forbidden"),
            OrderError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
